pub mod blob;
pub mod config;
pub mod error;
pub mod procedures;
pub mod results;
pub mod rowset;
pub mod sql;
mod utils;

pub use error::{Error, Result};
