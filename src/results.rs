use std::fmt;

use crate::error::Error;

/// Column type as exposed to SQL clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Varchar,
    Date,
    Integer,
    Double,
    Numeric,
    Boolean,
    Clob,
    Blob,
    Time,
    Timestamp,
    Binary,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Varchar => "VARCHAR",
            Self::Date => "DATE",
            Self::Integer => "INTEGER",
            Self::Double => "DOUBLE",
            Self::Numeric => "NUMERIC",
            Self::Boolean => "BOOLEAN",
            Self::Clob => "CLOB",
            Self::Blob => "BLOB",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Binary => "BINARY",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParadoxFieldType {
    Alpha,
    Date,
    Integer,
    Long,
    Currency,
    Number,
    Logical,
    Memo,
    Blob,
    FormattedMemo,
    Ole,
    Graphic,
    Time,
    Timestamp,
    AutoIncrement,
    Bcd,
    Bytes,
}

impl ParadoxFieldType {
    pub const ALL: [ParadoxFieldType; 17] = [
        Self::Alpha,
        Self::Date,
        Self::Integer,
        Self::Long,
        Self::Currency,
        Self::Number,
        Self::Logical,
        Self::Memo,
        Self::Blob,
        Self::FormattedMemo,
        Self::Ole,
        Self::Graphic,
        Self::Time,
        Self::Timestamp,
        Self::AutoIncrement,
        Self::Bcd,
        Self::Bytes,
    ];

    /// Type byte stored in the table header.
    pub fn code(&self) -> u8 {
        match self {
            Self::Alpha => 0x01,
            Self::Date => 0x02,
            Self::Integer => 0x03,
            Self::Long => 0x04,
            Self::Currency => 0x05,
            Self::Number => 0x06,
            Self::Logical => 0x09,
            Self::Memo => 0x0C,
            Self::Blob => 0x0D,
            Self::FormattedMemo => 0x0E,
            Self::Ole => 0x0F,
            Self::Graphic => 0x10,
            Self::Time => 0x14,
            Self::Timestamp => 0x15,
            Self::AutoIncrement => 0x16,
            Self::Bcd => 0x17,
            Self::Bytes => 0x18,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            Self::Alpha => SqlType::Varchar,
            Self::Date => SqlType::Date,
            Self::Integer | Self::Long | Self::AutoIncrement => SqlType::Integer,
            Self::Currency | Self::Number => SqlType::Double,
            Self::Logical => SqlType::Boolean,
            Self::Memo => SqlType::Clob,
            Self::Blob | Self::FormattedMemo | Self::Ole | Self::Graphic => SqlType::Blob,
            Self::Time => SqlType::Time,
            Self::Timestamp => SqlType::Timestamp,
            Self::Bcd => SqlType::Numeric,
            Self::Bytes => SqlType::Binary,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "ALPHA",
            Self::Date => "DATE",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::Currency => "CURRENCY",
            Self::Number => "NUMBER",
            Self::Logical => "LOGICAL",
            Self::Memo => "MEMO",
            Self::Blob => "BLOB",
            Self::FormattedMemo => "FORMATTED_MEMO",
            Self::Ole => "OLE",
            Self::Graphic => "GRAPHIC",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Bcd => "BCD",
            Self::Bytes => "BYTES",
        }
    }

    pub fn from_code(code: i32) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|t| i32::from(t.code()) == code)
            .ok_or(Error::InvalidFieldType(code))
    }

    pub fn sql_type_for(code: i32) -> Result<SqlType, Error> {
        Self::from_code(code).map(|t| t.sql_type())
    }
}
