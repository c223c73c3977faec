use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, TreeError};

/// Prefix segment that marks a top-level key as a bookmark tree.
pub const TREE_ROOT_PREFIX: &str = "tree";

/// One value in the configuration hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A plain URL. The entry key doubles as the display text.
    Link(String),
    /// A `[url, display]` pair. `display` overrides the key for
    /// presentation only; paths are still built from the key.
    Titled { url: String, display: String },
    /// A nested category.
    Category(Tree),
    /// Any other value: top-level style scalars, or a malformed leaf such as
    /// a list of the wrong length. Never flattened or rendered.
    Other(Value),
}

impl Node {
    /// Convert a single JSON value into a node.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(url) => Node::Link(url.clone()),
            Value::Array(items) => match items.as_slice() {
                [Value::String(url), Value::String(display)] => Node::Titled {
                    url: url.clone(),
                    display: display.clone(),
                },
                _ => Node::Other(value.clone()),
            },
            Value::Object(map) => Node::Category(Tree::from_map(map)),
            _ => Node::Other(value.clone()),
        }
    }

    /// Returns the nested tree if this node is a category.
    pub fn as_category(&self) -> Option<&Tree> {
        match self {
            Node::Category(tree) => Some(tree),
            _ => None,
        }
    }
}

/// An ordered mapping from key to [`Node`].
///
/// Entries keep the order of the source file. The whole configuration is a
/// `Tree` too; its `tree_*` entries are the bookmark roots and everything
/// else at that level (e.g. `theme`, `font_size`) is ignored by the views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    entries: IndexMap<String, Node>,
}

impl Tree {
    /// Build a tree from a loaded configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotAMapping`] if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(TreeError::NotAMapping(other.to_string())),
        }
    }

    fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(key, value)| (key.clone(), Node::from_value(value)))
            .collect();
        Self { entries }
    }

    /// Entries of this level in source order.
    ///
    /// This is the only ordering used below the root level, by every pass.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bookmark roots of a top-level tree, in ascending key order.
    ///
    /// Only keys accepted by [`is_tree_root`] whose value is a category are
    /// returned.
    pub fn roots(&self) -> Vec<(&str, &Tree)> {
        let mut roots: Vec<_> = self
            .entries()
            .filter(|(key, _)| is_tree_root(key))
            .filter_map(|(key, node)| node.as_category().map(|tree| (key, tree)))
            .collect();
        roots.sort_by(|a, b| a.0.cmp(b.0));
        roots
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a top-level key names a bookmark tree.
///
/// The key is split on `_` and its first segment must be exactly `tree`:
/// `tree`, `tree_a` and `tree_work_links` qualify, `trees` and `my_tree` do not.
pub fn is_tree_root(key: &str) -> bool {
    key.split('_').next() == Some(TREE_ROOT_PREFIX)
}
