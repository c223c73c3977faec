//! Plain-text outline of the bookmark hierarchy.
//!
//! ```text
//! tree_a
//!   Work
//!     Mail
//!   Dev
//!     Repo (My Repo)
//! ```

use bookmark_tree::{Leaf, Tree, TreePath, Visitor, walk};

const INDENT: &str = "  ";

#[derive(Default)]
struct KeyOutline {
    out: String,
}

impl KeyOutline {
    fn line(&mut self, depth: usize, text: &str) {
        self.out.push_str(&INDENT.repeat(depth));
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Visitor for KeyOutline {
    fn enter_root(&mut self, key: &str, _root: &Tree) {
        self.line(0, key);
    }

    fn enter_category(&mut self, path: &TreePath, _category: &Tree) {
        self.line(path.depth(), path.key().unwrap_or_default());
    }

    fn visit_leaf(&mut self, path: &TreePath, leaf: Leaf<'_>) {
        match leaf.display {
            Some(display) => self.line(path.depth(), &format!("{} ({display})", leaf.key)),
            None => self.line(path.depth(), leaf.key),
        }
    }
}

/// One line per root, category and bookmark, indented by depth.
pub fn outline(tree: &Tree) -> String {
    let mut outline = KeyOutline::default();
    walk(tree, &mut outline);
    outline.out
}
