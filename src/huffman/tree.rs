use crate::errors::BuildError;
use crate::frequency::FrequencyTable;
use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};

use super::{EngineOptions, Selection};

/// Index of a node in the [`HuffmanTree`] arena.
pub type NodeIndex = usize;

/// A leaf (one original symbol) or an internal node created by a merge.
///
/// Children are not stored. A node knows only its parent, the two children of an
/// internal node are the two nodes pointing at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    symbol: Option<char>,
    weight: f64,
    /// '0' or '1', assigned when this node becomes a merge input
    bit: Option<char>,
    visited: bool,
    parent: Option<NodeIndex>,
}

impl Node {
    fn leaf(symbol: char, weight: f64) -> Node {
        Node {
            symbol: Some(symbol),
            weight,
            bit: None,
            visited: false,
            parent: None,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bit(&self) -> Option<char> {
        self.bit
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// A Huffman tree stored as a flat arena.
///
/// The first [`HuffmanTree::leaf_count`] nodes are the leaves, in frequency table
/// order. Every following node is the result of one merge, the last one being the root.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    leaf_count: usize,
}

impl HuffmanTree {
    pub fn build(
        frequencies: &FrequencyTable,
        options: &EngineOptions,
    ) -> Result<HuffmanTree, BuildError> {
        if frequencies.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }
        let scale = options.weight_scale;
        if !scale.is_finite() || scale.is_sign_negative() {
            return Err(BuildError::InvalidScale { scale });
        }
        if let Some(code) = options.single_leaf_code {
            if code != '0' && code != '1' {
                return Err(BuildError::InvalidSingleLeafCode { code });
            }
        }

        let mut nodes = Vec::with_capacity(frequencies.len() * 2 - 1);
        for (symbol, frequency) in frequencies.iter() {
            if !frequency.is_finite() || frequency.is_sign_negative() {
                return Err(BuildError::InvalidWeight {
                    symbol,
                    weight: frequency,
                });
            }
            nodes.push(Node::leaf(symbol, frequency * scale));
        }

        let mut tree = HuffmanTree {
            leaf_count: nodes.len(),
            nodes,
        };

        match options.selection {
            Selection::LinearScan => tree.merge_linear(),
            Selection::MinHeap => tree.merge_with_heap(),
        }

        if tree.leaf_count == 1 {
            // Nothing was merged, the sole leaf is the root and would get an empty code
            tree.nodes[0].bit = options.single_leaf_code;
        }

        Ok(tree)
    }

    /// Scans all nodes for each selection. O(n²), fine for small alphabets.
    fn merge_linear(&mut self) {
        while let Some((first, second)) = self.two_lowest_unvisited() {
            self.merge(first, second);
        }
    }

    fn two_lowest_unvisited(&self) -> Option<(NodeIndex, NodeIndex)> {
        let first = self.lowest_unvisited(None)?;
        let second = self.lowest_unvisited(Some(first))?;
        Some((first, second))
    }

    /// Ties go to the lowest index
    fn lowest_unvisited(&self, skip: Option<NodeIndex>) -> Option<NodeIndex> {
        let mut lowest: Option<NodeIndex> = None;
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.visited || Some(idx) == skip {
                continue;
            }
            match lowest {
                Some(current) if self.nodes[current].weight <= node.weight => {}
                _ => lowest = Some(idx),
            }
        }
        lowest
    }

    /// Same selection order as [`HuffmanTree::merge_linear`], in O(n log n).
    fn merge_with_heap(&mut self) {
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                Reverse(HeapEntry {
                    weight: node.weight,
                    index,
                })
            })
            .collect();

        while heap.len() >= 2 {
            let (first, second) = match (heap.pop(), heap.pop()) {
                (Some(Reverse(first)), Some(Reverse(second))) => (first, second),
                _ => break,
            };
            let merged = self.merge(first.index, second.index);
            heap.push(Reverse(HeapEntry {
                weight: self.nodes[merged].weight,
                index: merged,
            }));
        }
    }

    /// Creates the parent of `first` and `second`. The heavier input gets the '0' bit,
    /// on equal weights `first` gets it.
    fn merge(&mut self, first: NodeIndex, second: NodeIndex) -> NodeIndex {
        let parent = self.nodes.len();
        let first_weight = self.nodes[first].weight;
        let second_weight = self.nodes[second].weight;

        let (first_bit, second_bit) = if first_weight >= second_weight {
            ('0', '1')
        } else {
            ('1', '0')
        };

        for (idx, bit) in [(first, first_bit), (second, second_bit)] {
            let node = &mut self.nodes[idx];
            node.visited = true;
            node.bit = Some(bit);
            node.parent = Some(parent);
        }

        vprintln!(
            "merge {} ({}) + {} ({}) -> {}",
            first,
            first_weight,
            second,
            second_weight,
            parent
        );

        self.nodes.push(Node {
            symbol: None,
            weight: first_weight + second_weight,
            bit: None,
            visited: false,
            parent: None,
        });
        parent
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn leaves(&self) -> &[Node] {
        &self.nodes[..self.leaf_count]
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn root(&self) -> NodeIndex {
        self.nodes.len() - 1
    }

    pub fn root_weight(&self) -> f64 {
        self.nodes[self.root()].weight
    }

    pub fn leaf_weight_sum(&self) -> f64 {
        self.leaves().iter().map(|node| node.weight).sum()
    }

    pub fn leaf_index(&self, symbol: char) -> Option<NodeIndex> {
        self.leaves()
            .iter()
            .position(|node| node.symbol == Some(symbol))
    }

    /// `idx` followed by every node on the way up to the root.
    pub fn path_to_root(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        core::iter::successors(self.nodes.get(idx).map(|_| idx), move |current| {
            self.nodes[*current].parent
        })
    }

    /// Number of merges between the node and the root.
    pub fn depth(&self, idx: NodeIndex) -> usize {
        self.path_to_root(idx).count().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    weight: f64,
    index: NodeIndex,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.weight.total_cmp(&other.weight) {
            Ordering::Equal => self.index.cmp(&other.index),
            other => other,
        }
    }
}
