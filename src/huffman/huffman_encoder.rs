use super::CodeTable;
use crate::errors::EncodeError;
use alloc::string::String;

pub struct HuffmanEncoder<'table> {
    table: &'table CodeTable,
}

impl<'t> HuffmanEncoder<'t> {
    pub fn new(table: &'t CodeTable) -> HuffmanEncoder<'t> {
        HuffmanEncoder { table }
    }

    /// Concatenates the codes of all symbols in `message`, without separators.
    pub fn encode(&self, message: &str) -> Result<String, EncodeError> {
        let mut encoded = String::new();
        for (position, symbol) in message.chars().enumerate() {
            let code = self
                .table
                .get(symbol)
                .ok_or(EncodeError::UnknownSymbol { symbol, position })?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::HuffmanEncoder;
    use crate::errors::EncodeError;
    use crate::frequency::FrequencyTable;
    use crate::huffman::{CodeTable, EngineOptions, HuffmanTree};

    fn table(entries: &[(char, f64)]) -> CodeTable {
        let frequencies: FrequencyTable = entries.iter().copied().collect();
        CodeTable::from_tree(&HuffmanTree::build(&frequencies, &EngineOptions::default()).unwrap())
    }

    #[test]
    fn concatenates_codes() {
        let table = table(&[('a', 0.5), ('b', 0.25), ('c', 0.25)]);
        let encoder = HuffmanEncoder::new(&table);
        assert_eq!(encoder.encode("abca").unwrap(), "010110");
        assert_eq!(encoder.encode("").unwrap(), "");
    }

    #[test]
    fn unknown_symbol() {
        let table = table(&[('a', 0.75), ('b', 0.25)]);
        let encoder = HuffmanEncoder::new(&table);
        assert_eq!(
            encoder.encode("abz"),
            Err(EncodeError::UnknownSymbol {
                symbol: 'z',
                position: 2
            })
        );
    }
}
