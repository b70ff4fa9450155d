use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("NULL SQL query")]
    InvalidInput,
    #[error("unexpected end of statement")]
    UnexpectedEndOfInput,
    #[error("invalid numeric format '{fragment}' at position {position}")]
    InvalidNumericFormat { fragment: String, position: usize },
}
