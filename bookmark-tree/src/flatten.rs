use serde::{Deserialize, Serialize};

use crate::{
    data::Tree,
    walk::{Leaf, TreePath, Visitor, walk},
};

/// A single bookmark in the flat search list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Slash-joined key path from the root (root key excluded).
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Display text: the pair override, or the entry key.
    pub display: String,
    /// Position in the flattened list.
    pub index: usize,
}

#[derive(Default)]
struct Flattener {
    bookmarks: Vec<Bookmark>,
}

impl Visitor for Flattener {
    fn visit_leaf(&mut self, path: &TreePath, leaf: Leaf<'_>) {
        self.bookmarks.push(Bookmark {
            name: path.to_string(),
            url: leaf.url.to_string(),
            display: leaf.text().to_string(),
            index: 0,
        });
    }
}

/// Flatten every bookmark root of `tree` into an indexed list.
///
/// Non-root top-level keys and malformed entries contribute nothing.
/// Indices are `0..n` in emission order, so the same tree always yields the
/// same list.
pub fn flatten(tree: &Tree) -> Vec<Bookmark> {
    let mut flattener = Flattener::default();
    walk(tree, &mut flattener);

    let mut bookmarks = flattener.bookmarks;
    for (index, bookmark) in bookmarks.iter_mut().enumerate() {
        bookmark.index = index;
    }
    bookmarks
}
