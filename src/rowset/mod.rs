pub mod clob;

pub use clob::{ClobDescriptor, ParadoxClob};
