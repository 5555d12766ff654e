use std::io::{Read, Write};

use log::{debug, error, info};

use super::header::ArchiveHeader;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HfError, Result};
use crate::huffman_coding::tree::{is_leaf, HuffmanTree, ROOT};

/// Decompress the archive in `source` into `sink`, using I/O blocks of `block_size` bytes.
/// Returns the number of bytes written.
///
/// Nothing is written to the sink unless the header and tree table are valid. If the payload runs
/// out before the declared length is reached, the bytes decoded so far are written and
/// `HfError::IncompleteArchive` is returned.
pub fn decompress<R: Read, W: Write>(mut source: R, mut sink: W, block_size: usize) -> Result<u64> {
    // Look for a valid signature, then get the length and the tree.
    let header = ArchiveHeader::read_from(&mut source)?;
    info!("Found a valid archive header.");
    let tree = HuffmanTree::read_from(&mut source)?;
    let expected = header.original_len;
    info!("Extracting {} bytes...", expected);

    let block_size = block_size.max(1);
    let mut br = BitReader::new(source, block_size);
    let mut out: Vec<u8> = Vec::with_capacity(block_size.min(expected as usize));
    let mut decoded = 0_u64;
    let mut node = ROOT;

    while decoded < expected {
        let bit = match br.bit()? {
            Some(bit) => bit,
            None => break,
        };
        node = if bit == 0 {
            tree.left(node)
        } else {
            tree.right(node)
        };
        if is_leaf(node) {
            out.push(node as u8);
            decoded += 1;
            node = ROOT;
            if out.len() == block_size {
                sink.write_all(&out)?;
                out.clear();
            }
        }
    }
    sink.write_all(&out)?;
    sink.flush()?;

    if decoded < expected {
        error!(
            "Archive ended early at {}: decoded {} of {} bytes",
            br.loc(),
            decoded,
            expected
        );
        return Err(HfError::IncompleteArchive { expected, decoded });
    }
    debug!("Decoded {} bytes", decoded);
    Ok(decoded)
}
