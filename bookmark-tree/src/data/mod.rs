//! Tree model and configuration loading.
//!
//! - [`node`] - [`Tree`] and [`Node`], the in-memory shape of a config
//! - [`load`] - reading TOML/JSON files into a [`serde_json::Value`]

/// Configuration file reading.
pub mod load;

/// Tree and node types.
pub mod node;

pub use load::{load_value, parse_str};
pub use node::{Node, Tree};
