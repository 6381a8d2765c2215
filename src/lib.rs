//! A static Huffman coder for short, in-memory messages.
//!
//! The pipeline is: message -> [`FrequencyTable`] -> [`HuffmanTree`] -> [`CodeTable`],
//! with the encoder and decoder both consuming the code table.
//!
//! ```
//! use huffcode::HuffmanEngine;
//!
//! let engine = HuffmanEngine::from_message("abracadabra").unwrap();
//! let bits = engine.encode("abracadabra").unwrap();
//! assert_eq!(engine.decode(&bits), "abracadabra");
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(feature = "std")]
pub const VERBOSE: bool = false;

macro_rules! vprintln {
    ($($x:expr),*) => {
        #[cfg(feature = "std")]
        if crate::VERBOSE {
            std::println!($($x),*);
        }
    }
}

pub mod errors;
pub mod frequency;
pub mod huffman;
mod tests;

pub use errors::HuffmanError;
pub use frequency::{FrequencyTable, ModelOptions};
pub use huffman::{
    CodeTable, EngineOptions, HuffmanEngine, HuffmanTree, Node, NodeIndex, Selection,
};
