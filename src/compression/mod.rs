//! The compression module manages both directions of the hfmn codec.
//!
//! An archive is laid out as follows:
//! - Magic tag: the 4 ASCII bytes `HFMN`.
//! - Original length: u64, native byte order.
//! - Tree table: 255 pairs of i16 `(left, right)` child indices for internal nodes 256..510,
//!   native byte order. Indices below 256 are leaves, i.e. byte values.
//! - Payload: the Huffman code of every input byte, packed LSB first, zero padded to a byte.
//!
//! Compression reads the source twice: once to count byte frequencies, once to emit codes.
//! Decompression reads the archive once, walking the tree from the root one bit at a time.
//!

pub mod compress;
pub mod decompress;
pub mod header;
