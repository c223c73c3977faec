//! Shared traversal order.
//!
//! [`walk`] is the only function that decides in which order the tree is
//! visited: roots in ascending key order (see [`Tree::roots`]), then
//! depth-first through [`Tree::entries`] in source order. The flattener, the
//! renderer and every other consumer implement [`Visitor`], so the search
//! index and the rendered columns can never disagree about order or paths.

use std::fmt;

use serde_json::Value;

use crate::data::{Node, Tree};

/// Key path from a tree root down to an entry.
///
/// The root's own key is not part of the path. Displayed as the segments
/// joined with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str) {
        self.segments.push(key.to_string());
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Last segment, i.e. the key of the current entry.
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Nesting depth below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// A bookmark leaf as seen by a [`Visitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'a> {
    /// Entry key; the last path segment.
    pub key: &'a str,
    /// Target URL.
    pub url: &'a str,
    /// Display override from a `[url, display]` pair.
    pub display: Option<&'a str>,
}

impl<'a> Leaf<'a> {
    /// Text to show for this leaf: the override if present, else the key.
    pub fn text(&self) -> &'a str {
        self.display.unwrap_or(self.key)
    }
}

/// Callbacks invoked by [`walk`].
///
/// Every `path` argument already includes the key of the entry being
/// visited. All hooks default to doing nothing.
pub trait Visitor {
    /// Called before the first entry of a root.
    fn enter_root(&mut self, _key: &str, _root: &Tree) {}

    /// Called after the last entry of a root.
    fn leave_root(&mut self, _key: &str, _root: &Tree) {}

    /// Called before the entries of a category.
    fn enter_category(&mut self, _path: &TreePath, _category: &Tree) {}

    /// Called after the entries of a category.
    fn leave_category(&mut self, _path: &TreePath, _category: &Tree) {}

    /// Called for every bookmark leaf.
    fn visit_leaf(&mut self, _path: &TreePath, _leaf: Leaf<'_>) {}

    /// Called for entries that are neither a leaf nor a category.
    fn visit_other(&mut self, _path: &TreePath, _value: &Value) {}
}

/// Walk every bookmark root of `tree` with `visitor`.
pub fn walk<V: Visitor + ?Sized>(tree: &Tree, visitor: &mut V) {
    let mut path = TreePath::new();
    for (key, root) in tree.roots() {
        visitor.enter_root(key, root);
        walk_level(root, &mut path, visitor);
        visitor.leave_root(key, root);
    }
}

fn walk_level<V: Visitor + ?Sized>(level: &Tree, path: &mut TreePath, visitor: &mut V) {
    for (key, node) in level.entries() {
        path.push(key);
        match node {
            Node::Link(url) => visitor.visit_leaf(
                path,
                Leaf {
                    key,
                    url: url.as_str(),
                    display: None,
                },
            ),
            Node::Titled { url, display } => visitor.visit_leaf(
                path,
                Leaf {
                    key,
                    url: url.as_str(),
                    display: Some(display.as_str()),
                },
            ),
            Node::Category(category) => {
                visitor.enter_category(path, category);
                walk_level(category, path, visitor);
                visitor.leave_category(path, category);
            }
            Node::Other(value) => visitor.visit_other(path, value),
        }
        path.pop();
    }
}

struct MalformedCollector {
    paths: Vec<String>,
}

impl Visitor for MalformedCollector {
    fn visit_other(&mut self, path: &TreePath, _value: &Value) {
        self.paths.push(path.to_string());
    }
}

/// Paths of entries inside bookmark roots that are skipped as malformed.
///
/// Skipping is not an error; callers decide whether to report these.
pub fn malformed_entries(tree: &Tree) -> Vec<String> {
    let mut collector = MalformedCollector { paths: Vec::new() };
    walk(tree, &mut collector);
    collector.paths
}
