//! The huffman module builds the coding model for hfmn: a static Huffman tree over all 256 byte
//! values, and the per-symbol bit codes derived from it.
//!
//! The tree is always complete. Byte values that never occur still get a leaf (with weight zero),
//! so every possible input byte has a code and the serialized tree has a fixed size. The merge
//! order is fully determined by `(weight, index)`, so the same counts always give the same tree.
//!
//! Decoding walks the same tree directly and happens in the decompress function.
//!

pub mod code_table;
pub mod tree;
