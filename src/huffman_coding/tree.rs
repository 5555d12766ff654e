use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::{Read, Write};

use byteorder::{ByteOrder, NativeEndian, ReadBytesExt};
use log::trace;

use crate::error::{HfError, Result};

/// Size of the alphabet. Every byte value gets a leaf, used or not.
pub const SYMBOLS: usize = 256;
/// Leaves plus internal nodes.
pub const TREE_SIZE: usize = 2 * SYMBOLS - 1;
/// Internal nodes occupy indices SYMBOLS..TREE_SIZE.
pub const INTERNAL_NODES: usize = TREE_SIZE - SYMBOLS;
/// The last internal node built is always the root.
pub const ROOT: u16 = TREE_SIZE as u16 - 1;
/// Bytes taken by the serialized tree: one (left, right) pair of i16 per internal node.
pub const TREE_TABLE_LEN: usize = INTERNAL_NODES * 2 * 2;

/// Serialized children, `(left, right)` for nodes 256..510 in order.
pub type TreeTable = [i16; INTERNAL_NODES * 2];

/// One slot of the tree arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Byte value for leaves, own index for internal nodes.
    pub symbol: u16,
    /// Occurrences (leaves) or sum of the children's weights.
    pub weight: u64,
    pub left: u16,
    pub right: u16,
    /// The root is its own parent.
    pub parent: u16,
}

/// True if the node at `idx` is a leaf, i.e. represents a byte value.
#[inline(always)]
pub fn is_leaf(idx: u16) -> bool {
    (idx as usize) < SYMBOLS
}

/// Huffman tree over the full byte alphabet, stored as an arena of 511 nodes addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
}

impl HuffmanTree {
    /// Arena with every node labelled and unlinked.
    fn blank() -> Self {
        let mut nodes = vec![Node::default(); TREE_SIZE];
        nodes
            .iter_mut()
            .enumerate()
            .for_each(|(i, n)| n.symbol = i as u16);
        nodes[ROOT as usize].parent = ROOT;
        Self { nodes }
    }

    /// Build the tree from the 256 symbol weights (zero allowed).
    ///
    /// Nodes are merged lowest `(weight, index)` first. The first node taken becomes the left child,
    /// the second the right child, and the new internal node gets the next free index. Ties on
    /// weight therefore always go to the lower index, which makes the topology fully determined
    /// by the weights.
    pub fn from_weights(weights: &[u64; SYMBOLS]) -> Self {
        let mut tree = Self::blank();
        let mut queue: BinaryHeap<Reverse<(u64, u16)>> = BinaryHeap::with_capacity(SYMBOLS);
        for (sym, &weight) in weights.iter().enumerate() {
            tree.nodes[sym].weight = weight;
            queue.push(Reverse((weight, sym as u16)));
        }

        for idx in SYMBOLS..TREE_SIZE {
            // 256 - k nodes are queued at step k, so both pops always succeed.
            let Reverse((lw, left)) = queue.pop().expect("queue holds at least two nodes");
            let Reverse((rw, right)) = queue.pop().expect("queue holds at least two nodes");
            let weight = lw + rw;
            let node = &mut tree.nodes[idx];
            node.weight = weight;
            node.left = left;
            node.right = right;
            tree.nodes[left as usize].parent = idx as u16;
            tree.nodes[right as usize].parent = idx as u16;
            queue.push(Reverse((weight, idx as u16)));
        }
        tree.nodes[ROOT as usize].parent = ROOT;
        trace!("Built tree, root weight {}", tree.nodes[ROOT as usize].weight);
        tree
    }

    /// Rebuild a tree from its serialized child table: `(left, right)` for nodes 256..510, in order.
    /// Weights are not stored in an archive and come back as zero.
    pub fn from_table(table: &TreeTable) -> Result<Self> {
        let mut tree = Self::blank();
        for (k, pair) in table.chunks_exact(2).enumerate() {
            let idx = SYMBOLS + k;
            // Children are always built before their parent.
            for &child in pair {
                if child < 0 || child as usize >= idx {
                    return Err(HfError::CorruptTree { node: idx, child });
                }
            }
            let (left, right) = (pair[0] as u16, pair[1] as u16);
            tree.nodes[idx].left = left;
            tree.nodes[idx].right = right;
            tree.nodes[left as usize].parent = idx as u16;
            tree.nodes[right as usize].parent = idx as u16;
        }
        tree.nodes[ROOT as usize].parent = ROOT;
        Ok(tree)
    }

    /// The child table as written to an archive.
    pub fn to_table(&self) -> TreeTable {
        let mut table = [0_i16; INTERNAL_NODES * 2];
        for (pair, n) in table.chunks_exact_mut(2).zip(&self.nodes[SYMBOLS..]) {
            pair[0] = n.left as i16;
            pair[1] = n.right as i16;
        }
        table
    }

    /// Serialize the internal nodes as native endian i16 pairs, in a single write.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let mut raw = [0_u8; TREE_TABLE_LEN];
        NativeEndian::write_i16_into(&self.to_table(), &mut raw);
        w.write_all(&raw)
    }

    /// Read a serialized child table and rebuild the tree.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut table = [0_i16; INTERNAL_NODES * 2];
        r.read_i16_into::<NativeEndian>(&mut table)
            .map_err(|e| HfError::eof_as(e, HfError::TruncatedHeader))?;
        Self::from_table(&table)
    }

    pub fn node(&self, idx: u16) -> &Node {
        &self.nodes[idx as usize]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline(always)]
    pub fn left(&self, idx: u16) -> u16 {
        self.nodes[idx as usize].left
    }

    #[inline(always)]
    pub fn right(&self, idx: u16) -> u16 {
        self.nodes[idx as usize].right
    }

    #[inline(always)]
    pub fn parent(&self, idx: u16) -> u16 {
        self.nodes[idx as usize].parent
    }

    /// Number of edges between the node and the root.
    pub fn depth(&self, mut idx: u16) -> usize {
        let mut depth = 0;
        while idx != ROOT {
            idx = self.parent(idx);
            depth += 1;
        }
        depth
    }
}
