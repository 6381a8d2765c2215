#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcode;
use huffcode::HuffmanEngine;

// First line trains the code, the rest is decoded. Decoding must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (train, bits) = input.split_once('\n').unwrap_or((input, ""));
        let engine = HuffmanEngine::from_message(train).unwrap();
        let _ = engine.decode(bits);
        let _ = engine.decode_strict(bits);
    }
});
