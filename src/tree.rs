//! Huffman tree construction
//!
//! Greedy two-smallest merge over a frequency-sorted work list. Ties are
//! resolved by position, never by symbol value, so the same text always
//! yields the same tree.

use crate::frequency::FrequencyTable;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Build the tree for `table`. Returns `None` only for an empty table.
    pub fn build(table: &FrequencyTable) -> Option<HuffNode> {
        let mut leaves: Vec<HuffNode> = table
            .iter()
            .map(|(symbol, freq)| HuffNode::Leaf { symbol, freq })
            .collect();
        // stable: equal frequencies keep first-occurrence order
        leaves.sort_by_key(HuffNode::freq);

        let mut nodes = VecDeque::from(leaves);
        while nodes.len() > 1 {
            let first = nodes.pop_front()?;
            let second = nodes.pop_front()?;
            let parent = HuffNode::merge(first, second);
            let freq = parent.freq();
            match nodes.iter().position(|node| node.freq() >= freq) {
                Some(index) => nodes.insert(index, parent),
                None => nodes.push_back(parent),
            }
        }
        nodes.pop_front()
    }

    /// Join two subtrees; `left` is the one taken from the front of the list.
    pub fn merge(left: HuffNode, right: HuffNode) -> HuffNode {
        HuffNode::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> u64 {
        match self {
            HuffNode::Leaf { freq, .. } | HuffNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
