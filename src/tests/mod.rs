#![cfg(test)]

use crate::errors::{BuildError, EncodeError, HuffmanError};
use crate::frequency::FrequencyTable;
use crate::huffman::{round_trip, EngineOptions, HuffmanEngine, Selection};
use alloc::string::String;
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};


fn random_message(rng: &mut rand::rngs::SmallRng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn random_round_trips() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz .,áé0123456789".chars().collect();
    for _ in 0..200 {
        let size = rng.gen_range(1..alphabet.len());
        let len = rng.gen_range(0..300);
        let message = random_message(&mut rng, &alphabet[..size], len);
        round_trip(&message);
    }
}

#[test]
fn random_tables_are_prefix_free() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let size = rng.gen_range(1..60u32);
        let frequencies: FrequencyTable = (0..size)
            .map(|idx| {
                let symbol = core::char::from_u32('A' as u32 + idx).unwrap();
                (symbol, rng.gen_range(0.0..1.0))
            })
            .collect();

        let linear = HuffmanEngine::build(&frequencies).unwrap();
        let heap = HuffmanEngine::build_with(
            &frequencies,
            EngineOptions {
                selection: Selection::MinHeap,
                ..EngineOptions::default()
            },
        )
        .unwrap();

        assert!(linear.code_table().is_prefix_free());
        assert_eq!(linear.code_table(), heap.code_table());

        let tree = linear.tree();
        assert!((tree.root_weight() - tree.leaf_weight_sum()).abs() < 1e-9);
    }
}

#[test]
fn repeated_builds_are_identical() {
    let frequencies = FrequencyTable::from_message("the quick brown fox jumps over the lazy dog");
    let first = HuffmanEngine::build(&frequencies).unwrap();
    for _ in 0..10 {
        let again = HuffmanEngine::build(&frequencies).unwrap();
        assert_eq!(first.code_table(), again.code_table());
    }
}

#[test]
fn engines_are_independent() {
    let left = HuffmanEngine::from_message("aaaaab").unwrap();
    let right = HuffmanEngine::from_message("xyz").unwrap();
    assert_eq!(left.code_table().get('x'), None);
    assert_eq!(right.code_table().get('a'), None);
    assert_eq!(
        right.encode("xa"),
        Err(EncodeError::UnknownSymbol {
            symbol: 'a',
            position: 1
        })
    );
}

#[test]
fn empty_frequency_table() {
    assert_eq!(
        HuffmanEngine::build(&FrequencyTable::new()).unwrap_err(),
        BuildError::EmptyAlphabet
    );
}

#[test]
fn whitespace_is_encodable_after_training_without_it() {
    let engine = HuffmanEngine::from_message("banana").unwrap();
    let bits = engine.encode("nab ana").unwrap();
    assert_eq!(engine.decode(&bits), "nab ana");
}

#[test]
fn stages_share_one_error_type() {
    fn transcode(training: &str, message: &str) -> Result<String, HuffmanError> {
        let engine = HuffmanEngine::from_message(training)?;
        let bits = engine.encode(message)?;
        Ok(engine.decode_strict(&bits)?)
    }

    assert_eq!(transcode("hello", "hole").unwrap(), "hole");
    assert_eq!(
        transcode("hello", "help"),
        Err(HuffmanError::Encode(EncodeError::UnknownSymbol {
            symbol: 'p',
            position: 3
        }))
    );
}

#[test]
fn engine_keeps_its_options() {
    let options = EngineOptions {
        selection: Selection::MinHeap,
        single_leaf_code: Some('1'),
        ..EngineOptions::default()
    };
    let engine = HuffmanEngine::build_with(&FrequencyTable::from_message("   "), options).unwrap();
    assert_eq!(engine.options(), &options);
    assert_eq!(engine.encode("  ").unwrap(), "11");
}
