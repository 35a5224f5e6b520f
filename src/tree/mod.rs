use std::{collections::BinaryHeap, cmp::Reverse, ops::Index};

use crate::frequency::{FrequencyTable, NUM_SYMBOLS};

pub type NodeId = usize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HuffmanNode {
    Leaf { byte: u8, frequency: u64 },
    Internal { frequency: u64, left: NodeId, right: NodeId },
}

impl HuffmanNode {
    #[inline(always)]
    pub fn frequency(&self) -> u64 {
        match *self {
            HuffmanNode::Leaf { frequency, .. } | HuffmanNode::Internal { frequency, .. } => frequency,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Entry of the merge queue. Equal frequencies are ordered by arena index:
/// leaves enter the arena in byte order and merged nodes after them in creation
/// order, so two builds from the same table always produce the same tree.
#[derive(PartialEq, Eq, Debug)]
struct HeapNode {
    key: NodeId,
    data: u64,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.data == other.data {
            return self.key.cmp(&other.key);
        }
        self.data.cmp(&other.data)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A codeword: the low `len` bits of `bits`, most significant first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Codeword {
    pub bits: u64,
    pub len: u8,
}

impl Codeword {
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

/// Byte value to codeword mapping derived from a [`HuffmanTree`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CodeTable {
    codes: [Option<Codeword>; NUM_SYMBOLS],
}

impl CodeTable {
    #[inline(always)]
    pub fn get(&self, byte: u8) -> Option<Codeword> {
        self.codes[byte as usize]
    }

    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Codeword)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(b, code)| code.map(|c| (b as u8, c)))
    }

    pub fn max_len(&self) -> u8 {
        self.iter().map(|(_, c)| c.len).max().unwrap_or(0)
    }

    /// Exact number of payload bits produced by encoding a stream with this histogram.
    pub fn bit_count(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter_nonzero()
            .map(|(byte, count)| count as u64 * self.get(byte).map_or(0, |c| c.len as u64))
            .sum()
    }
}

/// Huffman tree stored as an arena; children are referenced by index.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: NodeId,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes. The first node
    /// extracted becomes the left child. Returns `None` when every count is zero.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut nodes = Vec::with_capacity(2 * frequencies.distinct());
        let mut freq_tree = BinaryHeap::with_capacity(frequencies.distinct());

        for (byte, count) in frequencies.iter_nonzero() {
            let frequency = count as u64;
            freq_tree.push(Reverse(HeapNode { key: nodes.len(), data: frequency }));
            nodes.push(HuffmanNode::Leaf { byte, frequency });
        }

        while freq_tree.len() > 1 {
            let Reverse(left) = freq_tree.pop()?;
            let Reverse(right) = freq_tree.pop()?;

            let frequency = left.data + right.data;
            freq_tree.push(Reverse(HeapNode { key: nodes.len(), data: frequency }));
            nodes.push(HuffmanNode::Internal { frequency, left: left.key, right: right.key });
        }

        let Reverse(root) = freq_tree.pop()?;

        log::debug!("built huffman tree with {} nodes ({} leaves)", nodes.len(), frequencies.distinct());

        Some(Self { nodes, root: root.key })
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                HuffmanNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Walks the tree once, left = 0 and right = 1, the first branch being the
    /// most significant bit. A tree made of a single leaf gets the 1-bit code `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable { codes: [None; NUM_SYMBOLS] };

        if let HuffmanNode::Leaf { byte, .. } = self.nodes[self.root] {
            table.codes[byte as usize] = Some(Codeword { bits: 0, len: 1 });
        } else {
            self.get_code_len(&mut table, self.root, 0, 0);
        }

        table
    }

    fn get_code_len(&self, table: &mut CodeTable, id: NodeId, code: u64, len: u8) {
        match self.nodes[id] {
            HuffmanNode::Leaf { byte, .. } => {
                table.codes[byte as usize] = Some(Codeword { bits: code, len });
            }
            HuffmanNode::Internal { left, right, .. } => {
                debug_assert!(len < 64, "codeword longer than 64 bits");
                self.get_code_len(table, left, code << 1, len + 1);
                self.get_code_len(table, right, (code << 1) | 1, len + 1);
            }
        }
    }
}

impl Index<NodeId> for HuffmanTree {
    type Output = HuffmanNode;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}
