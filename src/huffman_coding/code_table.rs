//! Derives the bit code of every symbol from a built tree.
//!
//! Codes are found by walking from each leaf up through its parents. The walk yields the bits
//! leaf first, so they are reversed before being packed: a code always reads root first.

use log::trace;

use super::tree::{HuffmanTree, ROOT, SYMBOLS};
use crate::bitstream::cursor::BitCursor;

/// A tree over 256 leaves is at most 255 levels deep.
pub const MAX_CODE_BITS: usize = SYMBOLS - 1;
const CODE_BYTES: usize = (MAX_CODE_BITS + 7) / 8;

/// Root-first bit sequence of one symbol, packed LSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    bits: [u8; CODE_BYTES],
    len: u16,
}

impl Code {
    fn from_path(path: &[u8]) -> Self {
        let mut code = Code {
            bits: [0; CODE_BYTES],
            len: path.len() as u16,
        };
        let mut cur = BitCursor::new();
        path.iter().for_each(|&bit| cur.write_bit(&mut code.bits, bit));
        code
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bits of the code, root first.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        let mut cur = BitCursor::new();
        (0..self.len).map(move |_| cur.read_bit(&self.bits))
    }
}

/// Code of every byte value, indexed by the byte.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut path = Vec::with_capacity(MAX_CODE_BITS);
        let codes = (0..SYMBOLS as u16)
            .map(|sym| {
                path.clear();
                let mut idx = sym;
                while idx != ROOT {
                    let parent = tree.parent(idx);
                    path.push(u8::from(tree.left(parent) != idx));
                    idx = parent;
                }
                path.reverse();
                Code::from_path(&path)
            })
            .collect::<Vec<Code>>();
        trace!(
            "Code lengths range {}..={}",
            codes.iter().map(Code::len).min().unwrap_or(0),
            codes.iter().map(Code::len).max().unwrap_or(0)
        );
        Self { codes }
    }

    #[inline(always)]
    pub fn code(&self, byte: u8) -> &Code {
        &self.codes[byte as usize]
    }

    /// Number of payload bits needed to encode data with these counts.
    pub fn encoded_bits(&self, counts: &[u64; SYMBOLS]) -> u64 {
        counts
            .iter()
            .zip(&self.codes)
            .map(|(&c, code)| c * code.len() as u64)
            .sum()
    }
}
