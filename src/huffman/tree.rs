use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;
use crate::{binary_stream::BitSequence, error::Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NodeKind {
    Leaf { symbol: char },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    weight: usize,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena; children are referenced by their index.
///
/// Leaves are created first, in ascending symbol order, followed by the
/// inner nodes in the order they are merged.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// Lighter nodes first; equally heavy nodes in creation order.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        if frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut nodes: Vec<Node> = frequencies
            .iter()
            .enumerate()
            .map(|(index, (&symbol, &weight))| Node {
                weight,
                index,
                kind: NodeKind::Leaf { symbol },
            })
            .collect();
        let mut heap: BinaryHeap<Reverse<Node>> = nodes.iter().copied().map(Reverse).collect();

        while let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.peek().copied())
        {
            heap.pop();
            let node = Node {
                weight: left.weight + right.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // the loop consumed the last remaining node, which is the root
        let root_index = nodes.len() - 1;
        log::debug!(
            "Built huffman tree with {} leaves and {} nodes",
            frequencies.len(),
            nodes.len()
        );
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn weight(&self) -> usize {
        self.nodes[self.root_index].weight
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf { .. }))
            .count()
    }

    pub(super) fn root_index(&self) -> usize {
        self.root_index
    }

    pub(super) fn kind(&self, index: usize) -> NodeKind {
        self.nodes[index].kind
    }

    /// Walks the tree from the root, one bit per step, emitting a symbol and
    /// restarting at the root whenever a leaf is reached.
    ///
    /// A tree made of a single leaf decodes every `0` as its symbol.
    pub fn decode(&self, bits: &BitSequence) -> Result<String> {
        let mut decoded = String::new();
        let mut current_index = self.root_index;
        for (position, bit) in bits.iter().enumerate() {
            let next_index = match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                NodeKind::Leaf { .. } if !bit => current_index,
                NodeKind::Leaf { .. } => {
                    return Err(Error::MalformedStream(
                        position,
                        "bit selects a child that does not exist",
                    ))
                }
            };
            match self.nodes[next_index].kind {
                NodeKind::Leaf { symbol } => {
                    decoded.push(symbol);
                    current_index = self.root_index;
                }
                NodeKind::Inner { .. } => current_index = next_index,
            }
        }
        if current_index != self.root_index {
            return Err(Error::MalformedStream(
                bits.len(),
                "stream ends in the middle of a code word",
            ));
        }
        Ok(decoded)
    }
}
