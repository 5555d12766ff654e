//! BitReader: reads the packed payload of an archive one bit at a time.
//!
//! NOTE: This module can read from any I/O source that supports the read() call. The source is
//! pulled in fixed size blocks, so memory use does not depend on the archive size.
//!
use std::io::{self, ErrorKind, Read};

use super::cursor::BitCursor;

/// Reads a bitstream from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    /// Valid bytes in the buffer after the last refill.
    len: usize,
    cursor: BitCursor,
    source: R,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader that refills `block_size` bytes at a time.
    pub fn new(source: R, block_size: usize) -> Self {
        Self {
            buffer: vec![0; block_size.max(1)],
            len: 0,
            cursor: BitCursor::new(),
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when every byte in the buffer has been consumed
        if self.cursor.byte == self.len {
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            if size == 0 {
                return Ok(false);
            }
            self.len = size;
            self.cursor = BitCursor::new();
        }
        Ok(true)
    }

    /// Return the next bit (1 or 0), or None if the source is exhausted.
    pub fn bit(&mut self) -> io::Result<Option<u8>> {
        if !self.have_data()? {
            return Ok(None);
        }
        Ok(Some(self.cursor.read_bit(&self.buffer[..self.len])))
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor.byte, self.cursor.bit)
    }
}
