//! The bitstream module forms the I/O subsystem for hfmn.
//!
//! Everything is packed least significant bit first. The cursor primitives do the actual bit
//! placement; the writer and reader add fixed size block buffering on top so that memory use is
//! bounded regardless of the size of the file being processed.
//!
pub mod bitreader;
pub mod bitwriter;
pub mod cursor;
