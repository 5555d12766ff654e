use std::io::{Read, Write};

use byteorder::{ByteOrder, NativeEndian, ReadBytesExt};

use crate::error::{HfError, Result};
use crate::huffman_coding::tree::TREE_TABLE_LEN;

/// Fixed tag at the start of every archive.
pub const MAGIC: [u8; 4] = *b"HFMN";
/// Magic plus the 64 bit original length.
pub const HEADER_LEN: usize = MAGIC.len() + 8;
/// Bytes preceding the payload: header plus the tree table.
pub const ARCHIVE_OVERHEAD: usize = HEADER_LEN + TREE_TABLE_LEN;

/// Fixed-size archive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Length of the uncompressed input.
    pub original_len: u64,
}

impl ArchiveHeader {
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let mut raw = [0_u8; HEADER_LEN];
        raw[..MAGIC.len()].copy_from_slice(&MAGIC);
        NativeEndian::write_u64(&mut raw[MAGIC.len()..], self.original_len);
        w.write_all(&raw)
    }

    /// Read and check the header. A missing or wrong magic tag is reported before anything
    /// else is read.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut magic = [0_u8; 4];
        r.read_exact(&mut magic)
            .map_err(|e| HfError::eof_as(e, HfError::NotAnArchive))?;
        if magic != MAGIC {
            return Err(HfError::NotAnArchive);
        }
        let original_len = r
            .read_u64::<NativeEndian>()
            .map_err(|e| HfError::eof_as(e, HfError::TruncatedHeader))?;
        Ok(Self { original_len })
    }
}
