use std::{fs, path::Path};

use serde_json::Value;

use crate::error::{Result, TreeError};

/// Read a configuration file into a JSON value.
///
/// The format is chosen by extension (`yaml`/`yml`, `toml` or `json`).
/// Mapping order follows the file.
///
/// # Errors
///
/// Returns [`TreeError::Io`] when the file cannot be read, and a parse or
/// format error from [`parse_str`] otherwise.
pub fn load_value(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    debug!("loading {} as {ext:?}", path.display());
    parse_str(&content, ext)
}

/// Parse configuration content of the given format into a JSON value.
///
/// Empty content yields an empty mapping.
pub fn parse_str(content: &str, ext: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    let value = match ext {
        "yaml" | "yml" => serde_yaml::from_str(content)?,
        "json" => serde_json::from_str(content)?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(content)?;
            toml_to_json(v)
        }
        _ => return Err(TreeError::UnsupportedFormat(ext.to_string())),
    };
    Ok(value)
}

/// Converts TOML to JSON by value.
///
/// Datetimes become plain strings, so they end up as malformed entries
/// instead of serde's private datetime wrapper object.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{Node, Tree},
        flatten::flatten,
        render::render,
        walk::malformed_entries,
    };

    const TOML_CONFIG: &str = r#"
theme = "pywal"
font_size = 16

[tree_a.Dev]
Repo = ["https://git.example.com/x", "My Repo"]
Docs = "https://docs.example.com"

[tree_a."Daily Reads"]
News = "https://news.example.com"
"#;

    #[test]
    fn test_parse_toml() {
        let value = parse_str(TOML_CONFIG, "toml").unwrap();
        assert_eq!(value["font_size"], 16);
        assert_eq!(value["theme"], "pywal");

        let tree = Tree::from_value(&value).unwrap();
        let (key, root) = tree.roots()[0];
        assert_eq!(key, "tree_a");

        let keys: Vec<_> = root.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Dev", "Daily Reads"]);

        let dev = root.get("Dev").and_then(Node::as_category).unwrap();
        assert_eq!(
            dev.get("Repo"),
            Some(&Node::Titled {
                url: "https://git.example.com/x".into(),
                display: "My Repo".into()
            })
        );
    }

    #[test]
    fn test_toml_datetime_is_malformed() {
        let value = parse_str(
            "[tree_a]\nOk = \"https://ok.example\"\nWhen = 2024-01-01\nLater = \"https://later.example\"\n",
            "toml",
        )
        .unwrap();
        assert_eq!(value["tree_a"]["When"], "2024-01-01");

        let tree = Tree::from_value(&value).unwrap();
        let bookmarks = flatten(&tree);
        assert_eq!(
            bookmarks
                .iter()
                .map(|b| (b.name.as_str(), b.index))
                .collect::<Vec<_>>(),
            vec![("Ok", 0), ("Later", 1)]
        );
        assert_eq!(malformed_entries(&tree), vec!["When"]);
        assert!(!render(&tree).contains("When"));
    }

    #[test]
    fn test_toml_scalars() {
        let value = parse_str("font_size = 16\nratio = 1.5\nflag = true\n", "toml").unwrap();
        assert_eq!(value["font_size"], 16);
        assert_eq!(value["ratio"], 1.5);
        assert_eq!(value["flag"], true);
    }

    const YAML_CONFIG: &str = r#"
theme: pywal
font_size: 16
tree_b:
  Solo: https://solo.example.com
tree_a:
  Work:
    Mail: https://mail.example.com
  Dev:
    Repo: [https://git.example.com/x, My Repo]
    Broken: [https://only-url.example.com]
  Empty: {}
"#;

    #[test]
    fn test_parse_yaml() {
        let value = parse_str(YAML_CONFIG, "yaml").unwrap();
        assert_eq!(value["theme"], "pywal");
        assert_eq!(value["font_size"], 16);

        let tree = Tree::from_value(&value).unwrap();
        let keys: Vec<_> = tree.roots()[0].1.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Work", "Dev", "Empty"]);

        let bookmarks = flatten(&tree);
        assert_eq!(
            bookmarks
                .iter()
                .map(|b| (b.name.as_str(), b.url.as_str(), b.display.as_str(), b.index))
                .collect::<Vec<_>>(),
            vec![
                ("Work/Mail", "https://mail.example.com", "Mail", 0),
                ("Dev/Repo", "https://git.example.com/x", "My Repo", 1),
                ("Solo", "https://solo.example.com", "Solo", 2),
            ]
        );
        assert_eq!(malformed_entries(&tree), vec!["Dev/Broken"]);
        assert!(render(&tree).contains(r#"<li class="category" data-path="Empty">"#));

        // yml 扩展名同样按 YAML 解析
        assert_eq!(parse_str(YAML_CONFIG, "yml").unwrap(), value);
        assert!(matches!(parse_str("tree_a: [", "yaml"), Err(TreeError::Yaml(_))));
    }

    #[test]
    fn test_parse_json() {
        let value = parse_str(
            r#"{"tree_a": {"Work": {"Mail": "https://mail.example.com"}}}"#,
            "json",
        )
        .unwrap();
        let tree = Tree::from_value(&value).unwrap();
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_empty_content() {
        let value = parse_str("  \n", "toml").unwrap();
        assert!(Tree::from_value(&value).unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_str("a = b", "ini"),
            Err(TreeError::UnsupportedFormat(ext)) if ext == "ini"
        ));
        assert!(matches!(parse_str("[tree_a", "toml"), Err(TreeError::Toml(_))));
        assert!(matches!(parse_str("{", "json"), Err(TreeError::Json(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("config.yaml");
        fs::write(&yaml, YAML_CONFIG).unwrap();
        assert_eq!(load_value(&yaml).unwrap()["font_size"], 16);

        let path = dir.path().join("config.toml");
        fs::write(&path, TOML_CONFIG).unwrap();
        let value = load_value(&path).unwrap();
        assert_eq!(value["theme"], "pywal");

        let missing = dir.path().join("missing.toml");
        match load_value(&missing) {
            Err(TreeError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
