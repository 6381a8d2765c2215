use super::tree::{HuffmanTree, NodeIndex};
use alloc::string::String;
use alloc::vec::Vec;

/// Maps every leaf symbol to its code, in frequency table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let entries = tree
            .leaves()
            .iter()
            .enumerate()
            .filter_map(|(idx, leaf)| leaf.symbol().map(|symbol| (symbol, code_for(tree, idx))))
            .collect();
        CodeTable { entries }
    }

    /// `None` if the symbol is not part of the alphabet
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if no code starts with another code.
    pub fn is_prefix_free(&self) -> bool {
        for (i, (_, left)) in self.entries.iter().enumerate() {
            for (j, (_, right)) in self.entries.iter().enumerate() {
                if i != j && right.starts_with(left.as_str()) {
                    return false;
                }
            }
        }
        true
    }
}

/// Walks from the leaf up to the root. The bit closest to the root comes first.
fn code_for(tree: &HuffmanTree, leaf: NodeIndex) -> String {
    let mut bits: Vec<char> = tree
        .path_to_root(leaf)
        .filter_map(|idx| tree.nodes()[idx].bit())
        .collect();
    bits.reverse();
    bits.into_iter().collect()
}
