//! Nested HTML columns.
//!
//! Every bookmark root becomes one column:
//!
//! ```html
//! <div class="tree-column" data-root="tree_a">
//!   <ul class="tree">
//!     <li class="category" data-path="Work">
//!       <span class="category-name">Work</span>
//!       <ul>
//!         <li class="leaf"><a href="https://mail.example.com" data-path="Work/Mail" data-index="0">Mail</a></li>
//!       </ul>
//!     </li>
//!   </ul>
//! </div>
//! ```
//!
//! `data-path` carries the same key path as [`Bookmark::name`] and
//! `data-index` the same position as [`Bookmark::index`], so the search
//! script can find and highlight the element behind a search result.
//!
//! [`Bookmark::name`]: crate::flatten::Bookmark::name
//! [`Bookmark::index`]: crate::flatten::Bookmark::index

use std::fmt::Write as _;

use crate::{
    data::Tree,
    walk::{Leaf, TreePath, Visitor, walk},
};

const INDENT: &str = "  ";

#[derive(Default)]
struct Renderer {
    out: String,
    depth: usize,
    next_index: usize,
}

impl Renderer {
    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn open(&mut self, content: &str) {
        self.line(content);
        self.depth += 1;
    }

    fn close(&mut self, content: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(content);
    }
}

impl Visitor for Renderer {
    fn enter_root(&mut self, key: &str, _root: &Tree) {
        self.open(&format!(
            r#"<div class="tree-column" data-root="{}">"#,
            escape(key)
        ));
        self.open(r#"<ul class="tree">"#);
    }

    fn leave_root(&mut self, _key: &str, _root: &Tree) {
        self.close("</ul>");
        self.close("</div>");
    }

    fn enter_category(&mut self, path: &TreePath, category: &Tree) {
        let key = path.key().unwrap_or_default();
        self.open(&format!(
            r#"<li class="category" data-path="{}">"#,
            escape(&path.to_string())
        ));
        self.line(&format!(
            r#"<span class="category-name">{}</span>"#,
            escape(key)
        ));
        if category.is_empty() {
            self.line("<ul></ul>");
        } else {
            self.open("<ul>");
        }
    }

    fn leave_category(&mut self, _path: &TreePath, category: &Tree) {
        if !category.is_empty() {
            self.close("</ul>");
        }
        self.close("</li>");
    }

    fn visit_leaf(&mut self, path: &TreePath, leaf: Leaf<'_>) {
        let mut anchor = format!(
            r#"<a href="{}" data-path="{}""#,
            escape(leaf.url),
            escape(&path.to_string())
        );
        if let Some(display) = leaf.display {
            let _ = write!(anchor, r#" data-display="{}""#, escape(display));
        }
        let _ = write!(
            anchor,
            r#" data-index="{}">{}</a>"#,
            self.next_index,
            escape(leaf.text())
        );
        self.next_index += 1;
        self.line(&format!(r#"<li class="leaf">{anchor}</li>"#));
    }
}

/// Render every bookmark root of `tree` as a column of nested lists.
///
/// Columns follow the same order as [`flatten`](crate::flatten::flatten).
/// Returns an empty string when the tree has no bookmark roots.
pub fn render(tree: &Tree) -> String {
    let mut renderer = Renderer::default();
    walk(tree, &mut renderer);
    renderer.out
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> Tree {
        Tree::from_value(&value).unwrap()
    }

    /// Collects `data-path` values of leaf anchors in document order.
    fn leaf_paths(html: &str) -> Vec<String> {
        html.lines()
            .filter(|l| l.trim_start().starts_with(r#"<li class="leaf">"#))
            .filter_map(|l| {
                let start = l.find(r#"data-path=""#)? + r#"data-path=""#.len();
                let end = start + l[start..].find('"')?;
                Some(l[start..end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_render_single_leaf() {
        let html = render(&tree(json!({
            "tree_a": { "Work": { "Mail": "https://mail.example.com" } }
        })));
        let expected = r#"<div class="tree-column" data-root="tree_a">
  <ul class="tree">
    <li class="category" data-path="Work">
      <span class="category-name">Work</span>
      <ul>
        <li class="leaf"><a href="https://mail.example.com" data-path="Work/Mail" data-index="0">Mail</a></li>
      </ul>
    </li>
  </ul>
</div>
"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn test_render_pair_leaf() {
        let html = render(&tree(json!({
            "tree_a": { "Repo": ["https://git.example.com/x", "My Repo"] }
        })));
        assert!(html.contains(
            r#"<a href="https://git.example.com/x" data-path="Repo" data-display="My Repo" data-index="0">My Repo</a>"#
        ));
    }

    #[test]
    fn test_render_empty_category() {
        let html = render(&tree(json!({ "tree_a": { "Empty": {} } })));
        assert!(html.contains(r#"<li class="category" data-path="Empty">"#));
        assert!(html.contains("<ul></ul>"));
        assert!(!html.contains(r#"class="leaf""#));
    }

    #[test]
    fn test_non_root_keys_render_nothing() {
        let html = render(&tree(json!({
            "theme": "pywal",
            "font_size": 16,
            "bookmarks": { "A": "https://a.example" }
        })));
        assert_eq!(html, "");

        let html = render(&tree(json!({
            "theme": "pywal",
            "tree_a": { "A": "https://a.example" }
        })));
        assert_eq!(html.matches("tree-column").count(), 1);
        assert!(!html.contains("pywal"));
    }

    #[test]
    fn test_columns_follow_root_order() {
        let html = render(&tree(json!({
            "tree_b": { "B": "https://b.example" },
            "tree_a": { "A": "https://a.example" }
        })));
        let a = html.find(r#"data-root="tree_a""#).unwrap();
        let b = html.find(r#"data-root="tree_b""#).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_leaf_paths_match_flatten() {
        let t = tree(json!({
            "tree_work": {
                "Mail": "https://mail.example",
                "Dev": {
                    "Repo": ["https://git.example/x", "My Repo"],
                    "CI": { "Builds": "https://ci.example" },
                    "Broken": ["only-one"]
                },
                "Empty": {}
            },
            "tree_home": { "News": "https://news.example" },
            "font_size": 18
        }));
        let html = render(&t);
        let names: Vec<_> = flatten(&t).into_iter().map(|b| b.name).collect();
        assert_eq!(leaf_paths(&html), names);
        assert_eq!(render(&t), html);
    }

    #[test]
    fn test_escaping() {
        let html = render(&tree(json!({
            "tree_a": { "Q&A": ["https://x.example/?a=1&b=\"2\"", "<b>Q&A</b>"] }
        })));
        assert!(html.contains(r#"href="https://x.example/?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r#"data-path="Q&amp;A""#));
        assert!(html.contains(">&lt;b&gt;Q&amp;A&lt;/b&gt;</a>"));
    }
}
