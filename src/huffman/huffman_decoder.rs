use super::CodeTable;
use crate::errors::DecodeError;
use alloc::string::String;

pub struct HuffmanDecoder<'table> {
    table: &'table CodeTable,
}

impl<'t> HuffmanDecoder<'t> {
    pub fn new(table: &'t CodeTable) -> HuffmanDecoder<'t> {
        HuffmanDecoder { table }
    }

    /// Returns the first entry, in table order, whose code starts `bits`.
    ///
    /// Empty codes never match, they would not move the cursor.
    pub fn next_symbol(&self, bits: &str) -> Option<(char, usize)> {
        self.table
            .iter()
            .find(|(_, code)| !code.is_empty() && bits.starts_with(*code))
            .map(|(symbol, code)| (symbol, code.len()))
    }

    /// Best effort decoding. Where no code matches, the character at the cursor is
    /// copied to the output as is and the cursor moves on by one.
    pub fn decode(&self, bits: &str) -> String {
        let mut decoded = String::new();
        let mut cursor = 0;

        while cursor < bits.len() {
            let rest = &bits[cursor..];
            match self.next_symbol(rest) {
                Some((symbol, len)) => {
                    decoded.push(symbol);
                    cursor += len;
                }
                None => {
                    // rest is not empty, so there is a next char
                    let raw = rest.chars().next().unwrap_or_default();
                    vprintln!(
                        "No code matches at position {}, copying {:?}",
                        bits[..cursor].chars().count(),
                        raw
                    );
                    decoded.push(raw);
                    cursor += raw.len_utf8();
                }
            }
        }

        decoded
    }

    /// Like [`HuffmanDecoder::decode`] but fails on the first position no code matches.
    pub fn decode_strict(&self, bits: &str) -> Result<String, DecodeError> {
        let mut decoded = String::new();
        let mut cursor = 0;

        while cursor < bits.len() {
            let (symbol, len) = self
                .next_symbol(&bits[cursor..])
                .ok_or(DecodeError::Mismatch {
                    position: bits[..cursor].chars().count(),
                })?;
            decoded.push(symbol);
            cursor += len;
        }

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::HuffmanDecoder;
    use crate::errors::DecodeError;
    use crate::frequency::FrequencyTable;
    use crate::huffman::{CodeTable, EngineOptions, HuffmanTree};

    fn table(entries: &[(char, f64)], options: &EngineOptions) -> CodeTable {
        let frequencies: FrequencyTable = entries.iter().copied().collect();
        CodeTable::from_tree(&HuffmanTree::build(&frequencies, options).unwrap())
    }

    #[test]
    fn decodes_valid_input() {
        let table = table(&[('a', 0.5), ('b', 0.25), ('c', 0.25)], &EngineOptions::default());
        let decoder = HuffmanDecoder::new(&table);
        assert_eq!(decoder.decode("010110"), "abca");
        assert_eq!(decoder.decode_strict("010110").unwrap(), "abca");
        assert_eq!(decoder.decode(""), "");
    }

    #[test]
    fn mismatch_copies_raw_character() {
        let table = table(&[('a', 0.5), ('b', 0.25), ('c', 0.25)], &EngineOptions::default());
        let decoder = HuffmanDecoder::new(&table);
        // "1" at the very end starts b and c but completes neither
        assert_eq!(decoder.decode("0x01"), "axa1");
        assert_eq!(decoder.decode("ñ0"), "ña");
        assert_eq!(
            decoder.decode_strict("0x0"),
            Err(DecodeError::Mismatch { position: 1 })
        );
        assert_eq!(
            decoder.decode_strict("0ñ1"),
            Err(DecodeError::Mismatch { position: 1 })
        );
    }

    #[test]
    fn empty_code_never_matches() {
        let options = EngineOptions {
            single_leaf_code: None,
            ..EngineOptions::default()
        };
        let table = table(&[('z', 1.0)], &options);
        assert_eq!(table.get('z'), Some(""));
        let decoder = HuffmanDecoder::new(&table);
        assert_eq!(decoder.next_symbol("0"), None);
        assert_eq!(decoder.decode("01"), "01");
    }
}
