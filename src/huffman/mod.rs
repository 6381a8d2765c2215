//! Huffman coding is a method of encoding where symbols are assigned a code,
//! and more commonly used symbols get shorter codes, and less commonly
//! used symbols get longer codes. Codes are prefix free, meaning no code
//! is the beginning of another code.
//!
//! The tree is built by repeatedly merging the two lightest nodes that have not been
//! merged yet. Each merge hands one bit to each of its two inputs, and the code of a
//! symbol is the sequence of bits met on the way from the root down to its leaf.

mod code_table;
mod huffman_decoder;
mod huffman_encoder;
mod tree;

pub use code_table::CodeTable;
pub use huffman_decoder::HuffmanDecoder;
pub use huffman_encoder::HuffmanEncoder;
pub use tree::{HuffmanTree, Node, NodeIndex};

use crate::errors::{BuildError, DecodeError, EncodeError};
use crate::frequency::FrequencyTable;
use alloc::string::String;

/// How the two lightest unvisited nodes are found for each merge.
///
/// Both strategies produce the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Scan every node for each pick
    LinearScan,
    /// Keep the unvisited nodes in a binary heap
    MinHeap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Every frequency is multiplied by this to get the leaf weight
    pub weight_scale: f64,
    pub selection: Selection,
    /// Code fragment for the only leaf of a single symbol alphabet. With `None` that
    /// leaf gets an empty code and every message encodes to an empty bitstring.
    pub single_leaf_code: Option<char>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            weight_scale: 0.1,
            selection: Selection::LinearScan,
            single_leaf_code: Some('0'),
        }
    }
}

/// A built Huffman tree together with the code table derived from it.
///
/// The engine is immutable once built. Encoding and decoding only read the code table.
#[derive(Debug, Clone)]
pub struct HuffmanEngine {
    tree: HuffmanTree,
    table: CodeTable,
    options: EngineOptions,
}

impl HuffmanEngine {
    pub fn build(frequencies: &FrequencyTable) -> Result<HuffmanEngine, BuildError> {
        Self::build_with(frequencies, EngineOptions::default())
    }

    pub fn build_with(
        frequencies: &FrequencyTable,
        options: EngineOptions,
    ) -> Result<HuffmanEngine, BuildError> {
        let tree = HuffmanTree::build(frequencies, &options)?;
        let table = CodeTable::from_tree(&tree);
        vprintln!(
            "Built huffman tree with {} leaves and {} nodes",
            tree.leaf_count(),
            tree.nodes().len()
        );
        Ok(HuffmanEngine {
            tree,
            table,
            options,
        })
    }

    /// Derives the frequencies from `message` and builds an engine for them.
    pub fn from_message(message: &str) -> Result<HuffmanEngine, BuildError> {
        Self::build(&FrequencyTable::from_message(message))
    }

    pub fn encode(&self, message: &str) -> Result<String, EncodeError> {
        HuffmanEncoder::new(&self.table).encode(message)
    }

    /// Never fails, see [`HuffmanDecoder::decode`] for what happens to bits no code matches.
    pub fn decode(&self, bits: &str) -> String {
        HuffmanDecoder::new(&self.table).decode(bits)
    }

    pub fn decode_strict(&self, bits: &str) -> Result<String, DecodeError> {
        HuffmanDecoder::new(&self.table).decode_strict(bits)
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

/// Builds an engine from `message` and checks that the message survives encoding
/// and decoding unchanged.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(message: &str) {
    let engine = HuffmanEngine::from_message(message).unwrap();
    assert!(engine.code_table().is_prefix_free());

    let encoded = engine.encode(message).unwrap();
    assert!(encoded.chars().all(|bit| bit == '0' || bit == '1'));
    assert_eq!(engine.decode(&encoded), message);
    assert_eq!(engine.decode_strict(&encoded).unwrap(), message);
}

#[test]
fn roundtrip() {
    round_trip("");
    round_trip("a");
    round_trip("aaab");
    round_trip("hello world");
    round_trip("      ");
    round_trip("El veloz murciélago hindú comía feliz cardillo y kiwi.");
    round_trip("mississippi river");
}
