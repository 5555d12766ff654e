//! hfmn, a static Huffman file compressor.
//!
//! Version 0.1.0
//!
//! Compresses any byte stream with a two pass static Huffman code and restores it exactly.
//! The first pass counts how often each of the 256 byte values occurs. A Huffman tree is built
//! over all 256 values (unused ones included), serialized into the archive, and the second pass
//! replaces every byte with its code.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hfmn test.txt test.hf`
//!
//! and to extract it again:
//!
//! `$> hfmn -x test.hf test.txt`
//!
//! The codec itself works on any `Read + Seek` source and `Write` sink. Sources that only read
//! forward go through `compress_stream`, which spools them to a temp file first:
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut archive: Vec<u8> = Vec::new();
//! hfmn::compress(&mut Cursor::new(b"abracadabra".to_vec()), &mut archive, 1024)?;
//! let mut restored: Vec<u8> = Vec::new();
//! hfmn::decompress(archive.as_slice(), &mut restored, 1024)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), hfmn::HfError>(())
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_stream, CompressStats};
pub use compression::decompress::decompress;
pub use error::{HfError, Result};
