//! # bookmark-tree
//!
//! Data model and traversals for nested bookmark configurations.
//!
//! A bookmark configuration is a mapping whose `tree_*` entries hold a
//! hierarchy of categories and links. This crate loads such a file, walks
//! it in a single well-defined order and produces the two views a start
//! page needs: a flat, indexed list of bookmarks for searching and the
//! nested column markup for browsing.
//!
//! ## Features
//!
//! - YAML, TOML and JSON configuration files, with file order preserved
//! - Two leaf shapes: a plain URL, or a `[url, display]` pair
//! - One traversal ([`walk::walk`]) shared by every consumer, so the search
//!   index and the rendered columns always agree on order and paths
//! - Malformed entries are kept in the model and skipped by the views
//!
//! ## Quick Start
//!
//! ```rust
//! use bookmark_tree::{Tree, flatten, render};
//!
//! let value = serde_json::json!({
//!     "theme": "void",
//!     "tree_a": { "Work": { "Mail": "https://mail.example.com" } }
//! });
//! let tree = Tree::from_value(&value).unwrap();
//!
//! let bookmarks = flatten(&tree);
//! assert_eq!(bookmarks[0].name, "Work/Mail");
//!
//! let html = render(&tree);
//! assert!(html.contains(r#"data-path="Work/Mail""#));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Tree model and configuration loading
//! - [`walk`] - Shared traversal order and the [`walk::Visitor`] trait
//! - [`flatten`] - Flat bookmark list for client-side search
//! - [`render`] - Nested HTML columns
//! - [`error`] - Error types

#[macro_use]
extern crate log;

/// Tree model and configuration loading.
pub mod data;

/// Error types and result definitions for tree loading.
pub mod error;

/// Flat bookmark list for client-side search.
pub mod flatten;

/// Nested HTML column rendering.
pub mod render;

/// Shared traversal order used by every view of the tree.
pub mod walk;

pub use data::{Node, Tree, load_value, parse_str};
pub use error::{Result, TreeError};
pub use flatten::{Bookmark, flatten};
pub use render::render;
pub use walk::{Leaf, TreePath, Visitor, malformed_entries, walk};
