//! Errors returned by the stages of the Huffman pipeline.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("Can't build a huffman tree without any symbols")]
    EmptyAlphabet,
    #[error("Frequency of symbol {symbol:?} must be a finite, non-negative number. Is: {weight}")]
    InvalidWeight { symbol: char, weight: f64 },
    #[error("Weight scale must be a finite, non-negative number. Is: {scale}")]
    InvalidScale { scale: f64 },
    #[error("Code of a single symbol alphabet must be '0' or '1'. Is: {code:?}")]
    InvalidSingleLeafCode { code: char },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("Symbol {symbol:?} at position {position} has no entry in the code table")]
    UnknownSymbol { symbol: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("No code in the table matches the bitstring at position {position}")]
    Mismatch { position: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum HuffmanError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
