use std::io::{self, Write};

use log::trace;

use super::cursor::BitCursor;

/// Writes a bitstream for output. Bits are packed into a fixed size block which is written to
/// the sink and cleared each time it fills. Call finish() to write the final partial byte.
pub struct BitWriter<W> {
    /// Block being filled with bits.
    buffer: Vec<u8>,
    /// Position of the next bit in the block.
    cursor: BitCursor,
    /// Handle to the output stream
    writer: W,
    /// Bytes handed to the writer so far.
    written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new BitWriter that flushes to `writer` every `block_size` bytes.
    pub fn new(writer: W, block_size: usize) -> Self {
        Self {
            buffer: vec![0; block_size.max(1)],
            cursor: BitCursor::new(),
            writer,
            written: 0,
        }
    }

    /// Append a single bit (0 or 1) to the stream.
    #[inline]
    pub fn write_bit(&mut self, bit: u8) -> io::Result<()> {
        self.cursor.write_bit(&mut self.buffer, bit);
        if self.cursor.byte == self.buffer.len() {
            self.drain_block()?;
        }
        Ok(())
    }

    /// Append every bit yielded by `bits`, in order.
    pub fn write_bits<I: IntoIterator<Item = u8>>(&mut self, bits: I) -> io::Result<()> {
        for bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Bytes written to the sink so far plus the bytes pending in the block, counting a partial
    /// last byte as whole.
    pub fn byte_count(&self) -> u64 {
        self.written + self.cursor.bytes_used() as u64
    }

    /// Write the full block out and start a new, zeroed one.
    fn drain_block(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.written += self.buffer.len() as u64;
        trace!("Flushed {} byte block, {} bytes total", self.buffer.len(), self.written);
        self.buffer.fill(0);
        self.cursor = BitCursor::new();
        Ok(())
    }

    /// Flushes the remaining bits, padding the last byte with 0s in its most significant bits.
    /// Returns the writer and the total number of bytes written through it.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        let used = self.cursor.bytes_used();
        self.writer.write_all(&self.buffer[..used])?;
        self.written += used as u64;
        self.writer.flush()?;
        Ok((self.writer, self.written))
    }
}
