use thiserror::Error;

use crate::sql::ScanError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("invalid field type: {0}")]
    InvalidFieldType(i32),
    #[error("invalid CLOB descriptor")]
    InvalidDescriptor,
    #[error("invalid position '{0}' in CLOB")]
    InvalidPosition(u64),
    #[error("invalid position and substring length")]
    InvalidSubstringLength,
    #[error("invalid length specified: {0}")]
    InvalidLength(u64),
    #[error("corrupt blob block at {offset:#x}: {reason}")]
    CorruptBlock { offset: u64, reason: String },
    #[error("reading CLOB data")]
    LoadData(#[source] Box<Error>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
