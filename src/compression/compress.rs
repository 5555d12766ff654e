use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

use log::{debug, info, warn};

use super::header::{ArchiveHeader, ARCHIVE_OVERHEAD};
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::HuffmanTree;
use crate::tools::freq_count::FreqTable;

/*
    Compression takes two passes over the source.

    The first pass counts every byte value. From the counts we build the tree
    and the code table, then write the header and the tree table. The second
    pass looks up each byte's code and packs it onto the bitstream, which is
    written out one block at a time.

    A source that cannot seek (a pipe, a FIFO, stdin) is first spooled into an
    anonymous temp file, and both passes run over that copy.
*/

/// Sizes of one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    /// Bytes read from the source.
    pub input_len: u64,
    /// Bytes written to the sink, header and tree included.
    pub output_len: u64,
}

impl CompressStats {
    /// Output size as a fraction of the input size.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.output_len as f64 / self.input_len as f64
    }
}

/// Compress `source` into `sink`, using I/O blocks of `block_size` bytes.
/// The source is read twice, so it must be seekable. See [`compress_stream`] for sources that
/// can only be read forward.
pub fn compress<R, W>(source: &mut R, mut sink: W, block_size: usize) -> Result<CompressStats>
where
    R: Read + Seek,
    W: Write,
{
    info!("Preparing...");
    let freqs = FreqTable::from_reader(source, block_size)?;

    info!("Building Huffman tree...");
    let tree = HuffmanTree::from_weights(&freqs.counts);
    let codes = CodeTable::from_tree(&tree);
    debug!(
        "Payload will be {} bits for {} input bytes",
        codes.encoded_bits(&freqs.counts),
        freqs.total
    );

    // Write header with the size information and the tree
    let header = ArchiveHeader {
        original_len: freqs.total,
    };
    header.write_to(&mut sink)?;
    tree.write_to(&mut sink)?;

    info!("Writing archive...");
    let mut bw = BitWriter::new(&mut sink, block_size);
    let mut buf = vec![0_u8; block_size.max(1)];
    let mut reread = 0_u64;
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            bw.write_bits(codes.code(byte).bits())?;
        }
        reread += n as u64;
    }
    let payload_len = bw.byte_count();
    bw.finish()?;

    if reread != freqs.total {
        warn!(
            "Source changed between passes: counted {} bytes, encoded {}",
            freqs.total, reread
        );
    }

    let stats = CompressStats {
        input_len: freqs.total,
        output_len: ARCHIVE_OVERHEAD as u64 + payload_len,
    };
    debug!("Payload is {} bytes", payload_len);
    Ok(stats)
}

/// Compress a source that can only be read once, front to back.
///
/// The source is copied into an unnamed temp file (removed when dropped) and compressed from
/// there.
pub fn compress_stream<R, W>(mut source: R, sink: W, block_size: usize) -> Result<CompressStats>
where
    R: Read,
    W: Write,
{
    let mut spool = tempfile::tempfile()?;
    let spooled = io::copy(&mut source, &mut spool)?;
    debug!("Spooled {} bytes of unseekable input to a temp file", spooled);
    spool.seek(SeekFrom::Start(0))?;
    compress(&mut spool, sink, block_size)
}
