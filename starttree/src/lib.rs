//! # starttree
//!
//! Generates a static bookmarks start page from a nested configuration file.
//!
//! `starttree` reads `~/.config/StartTree/config.yaml`, turns its `tree_*`
//! sections into browsable columns plus a searchable bookmark list, and writes
//! a ready-to-open page into `~/.cache/StartTree`.
//!
//! ## Features
//!
//! - **Tree columns**: every `tree_*` section becomes one column of nested lists
//! - **Search index**: all bookmarks flattened with their full path for fuzzy search
//! - **Themes**: named stylesheets from the themes directory, or the pywal palette
//! - **Templates**: HTML/CSS skeletons with marker lines as insertion points
//!
//! ## Modules
//!
//! - [`ctx`] - Path configuration and application context
//! - [`keys`] - Plain-text outline of the bookmark hierarchy
//! - [`page`] - Page assembly, template model and output normalization
//! - [`style`] - Theme and font-size resolution
//! - [`utils`] - File helpers
//!
//! ## Example
//!
//! ```rust,no_run
//! use starttree::ctx::AppContext;
//!
//! let ctx = AppContext::from_home(None, None).unwrap();
//! ctx.generate().unwrap();
//! ```

/// Path configuration and application context.
pub mod ctx;

/// Plain-text outline of the bookmark hierarchy.
pub mod keys;

/// Page assembly.
///
/// Fills the HTML and CSS skeletons with the rendered tree, the bookmark
/// list and the style settings, then writes the results.
pub mod page;

/// Theme and font-size resolution.
pub mod style;

/// File helpers with path-carrying errors.
pub mod utils;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub use bookmark_tree;
