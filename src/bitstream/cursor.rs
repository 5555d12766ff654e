//! BitCursor: the single-bit primitives every other part of the codec packs through.
//!
//! Bits are stored least significant bit first within each byte. The cursor does no bounds
//! checking of its own; callers size the buffer so the next bit always fits.

/// Position of the next bit within a byte buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitCursor {
    /// Index of the byte holding the next bit.
    pub byte: usize,
    /// Offset (0-7) of the next bit within that byte.
    pub bit: u8,
}

impl BitCursor {
    /// A cursor at the first bit of a buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits the cursor has moved past.
    pub fn bits(&self) -> usize {
        self.byte * 8 + self.bit as usize
    }

    /// Number of bytes touched so far, counting a partially filled byte.
    pub fn bytes_used(&self) -> usize {
        self.byte + usize::from(self.bit > 0)
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.bit += 1;
        if self.bit == 8 {
            self.bit = 0;
            self.byte += 1;
        }
    }

    /// OR the low bit of `bit` into the buffer at the cursor and advance. The target bit must
    /// already be zero; buffers are expected to be cleared before reuse.
    #[inline]
    pub fn write_bit(&mut self, buf: &mut [u8], bit: u8) {
        buf[self.byte] |= (bit & 1) << self.bit;
        self.advance();
    }

    /// Return the bit (0 or 1) at the cursor and advance.
    #[inline]
    pub fn read_bit(&mut self, buf: &[u8]) -> u8 {
        let bit = (buf[self.byte] >> self.bit) & 1;
        self.advance();
        bit
    }
}
