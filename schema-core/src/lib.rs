pub mod catalog;
pub mod config;
pub mod constants;
pub mod diff;
pub mod error;
pub mod progress;
pub mod script;
pub mod server;

pub use error::{Result, SchemaError};
