use std::fs::File;
use std::io::{Cursor, Read, Write};

use hfmn::compression::header::{ARCHIVE_OVERHEAD, HEADER_LEN, MAGIC};
use hfmn::huffman_coding::code_table::CodeTable;
use hfmn::huffman_coding::tree::{HuffmanTree, SYMBOLS, TREE_SIZE};
use hfmn::tools::freq_count::freqs;
use hfmn::{compress, compress_stream, decompress, HfError};
use tempfile::tempdir;

fn encode(data: &[u8]) -> Vec<u8> {
    let mut archive: Vec<u8> = Vec::new();
    let stats = compress(&mut Cursor::new(data.to_vec()), &mut archive, 4096)
        .expect("Failed to compress");
    assert_eq!(stats.input_len, data.len() as u64);
    assert_eq!(stats.output_len, archive.len() as u64);
    archive
}

fn decode(archive: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    decompress(archive, &mut out, 4096).expect("Failed to decompress");
    out
}

fn declared_len(archive: &[u8]) -> u64 {
    let mut raw = [0_u8; 8];
    raw.copy_from_slice(&archive[4..HEADER_LEN]);
    u64::from_ne_bytes(raw)
}

#[test]
fn empty_input() {
    let archive = encode(&[]);
    assert_eq!(archive.len(), ARCHIVE_OVERHEAD);
    assert_eq!(declared_len(&archive), 0);
    assert!(decode(&archive).is_empty());
}

#[test]
fn single_repeated_byte() {
    let data = vec![0x41_u8; 1000];
    let archive = encode(&data);
    assert_eq!(declared_len(&archive), 1000);
    // One bit per byte.
    assert_eq!(archive.len(), ARCHIVE_OVERHEAD + 125);
    assert_eq!(decode(&archive), data);
}

#[test]
fn every_byte_value_once() {
    let data: Vec<u8> = (0..=255_u8).collect();
    let archive = encode(&data);
    // A flat distribution gives every symbol an 8 bit code.
    assert_eq!(archive.len(), ARCHIVE_OVERHEAD + 256);
    assert_eq!(decode(&archive), data);
}

#[test]
fn skewed_text() {
    let data = b"aaaabbbccd";
    let counts = freqs(data).counts;
    assert_eq!(
        [b'a', b'b', b'c', b'd'].map(|b| counts[b as usize]),
        [4, 3, 2, 1]
    );
    let table = CodeTable::from_tree(&HuffmanTree::from_weights(&counts));
    let len = |b: u8| table.code(b).len();
    assert!(len(b'a') <= len(b'b') && len(b'b') <= len(b'c') && len(b'c') <= len(b'd'));
    assert_eq!(decode(&encode(data)), data);
}

#[test]
fn wrong_magic_is_rejected() {
    let mut archive = encode(b"some text to compress");
    archive[..4].copy_from_slice(b"ZIP!");
    let mut out: Vec<u8> = Vec::new();
    let err = decompress(archive.as_slice(), &mut out, 4096).unwrap_err();
    assert!(matches!(err, HfError::NotAnArchive));
    assert!(out.is_empty());
}

#[test]
fn header_matches_input() {
    for data in [&b""[..], &b"x"[..], &b"hello, world"[..], &[7_u8; 5000][..]] {
        let archive = encode(data);
        assert_eq!(&archive[..4], &MAGIC);
        assert_eq!(declared_len(&archive), data.len() as u64);
    }
}

#[test]
fn deterministic_output() {
    let data: Vec<u8> = (0..20_000_u32).map(|i| ((i * 31) ^ (i >> 3)) as u8).collect();
    assert_eq!(encode(&data), encode(&data));
}

#[test]
fn decoded_tree_gives_same_codes() {
    let data = b"she sells sea shells by the sea shore";
    let tree = HuffmanTree::from_weights(&freqs(data).counts);
    let archive = encode(data);
    let back = HuffmanTree::read_from(&mut &archive[HEADER_LEN..]).unwrap();
    assert_eq!(back.nodes().len(), TREE_SIZE);
    let (a, b) = (CodeTable::from_tree(&tree), CodeTable::from_tree(&back));
    for sym in 0..SYMBOLS {
        let sym = sym as u8;
        assert!(a.code(sym).bits().eq(b.code(sym).bits()));
    }
}

#[test]
fn corrupt_tree_is_rejected() {
    let mut archive = encode(b"abcabcabc");
    // Point the first internal node at itself.
    archive[HEADER_LEN..HEADER_LEN + 2].copy_from_slice(&256_i16.to_ne_bytes());
    let mut out: Vec<u8> = Vec::new();
    let err = decompress(archive.as_slice(), &mut out, 4096).unwrap_err();
    assert!(matches!(err, HfError::CorruptTree { node: 256, child: 256 }));
    assert!(out.is_empty());
}

#[test]
fn truncated_archive_is_reported() {
    let data = b"the rain in spain stays mainly in the plain".repeat(50);
    let archive = encode(&data);
    let cut = &archive[..ARCHIVE_OVERHEAD + 10];
    let mut out: Vec<u8> = Vec::new();
    match decompress(cut, &mut out, 4096) {
        Err(HfError::IncompleteArchive { expected, decoded }) => {
            assert_eq!(expected, data.len() as u64);
            assert_eq!(decoded, out.len() as u64);
            assert!(data.starts_with(&out));
        }
        other => panic!("expected an incomplete archive, got {:?}", other),
    }
}

#[test]
fn large_input_crosses_blocks() {
    // Several times the block size on both sides.
    let data: Vec<u8> = (0..300_000_u32)
        .map(|i| if i % 3 == 0 { (i % 251) as u8 } else { b'e' })
        .collect();
    let mut archive: Vec<u8> = Vec::new();
    compress(&mut Cursor::new(data.clone()), &mut archive, 1000).unwrap();
    assert!(archive.len() < data.len());
    let mut out: Vec<u8> = Vec::new();
    let n = decompress(archive.as_slice(), &mut out, 777).unwrap();
    assert_eq!(n, data.len() as u64);
    assert_eq!(out, data);
}

#[test]
fn file_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let plain = dir.path().join("plain.txt");
    let packed = dir.path().join("plain.hf");
    let restored = dir.path().join("restored.txt");

    let data = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n".repeat(100);
    File::create(&plain)
        .and_then(|mut f| f.write_all(&data))
        .expect("Failed to write input file");

    let mut fin = File::open(&plain).unwrap();
    compress(&mut fin, File::create(&packed).unwrap(), 1024).unwrap();

    decompress(
        File::open(&packed).unwrap(),
        File::create(&restored).unwrap(),
        1024,
    )
    .unwrap();

    let mut back = vec![];
    File::open(&restored)
        .unwrap()
        .read_to_end(&mut back)
        .unwrap();
    assert_eq!(back, data);
}

#[test]
fn forward_only_source_round_trips() {
    // A byte slice reads forward only, like a pipe.
    let data = b"piped in, never rewound\n".repeat(2000);
    let mut archive: Vec<u8> = Vec::new();
    let stats = compress_stream(data.as_slice(), &mut archive, 4096).unwrap();
    assert_eq!(stats.input_len, data.len() as u64);
    assert_eq!(archive, encode(&data));
    assert_eq!(decode(&archive), data);
}
