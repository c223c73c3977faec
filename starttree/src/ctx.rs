//! Application context and path configuration.
//!
//! This module provides the [`AppContext`] type which holds every location
//! starttree reads from or writes to, and loads the user configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bookmark_tree::{Tree, load_value};
use serde_json::Value;

use crate::style::StyleConfig;

/// Application directory name under `~/.config` and `~/.cache`.
pub const APP_DIR: &str = "StartTree";

/// Configuration file names looked up inside the config directory, in order.
///
/// The first one that exists is used; `config.yaml` when none does.
pub const CONFIG_FILES: [&str; 4] = ["config.yaml", "config.yml", "config.toml", "config.json"];

/// Path configuration grouping all path-related fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// Configuration file holding the bookmark trees and style keys.
    pub config: PathBuf,
    /// Output directory; also holds the `skeletons/` and `themes/` inputs.
    pub cache_dir: PathBuf,
    /// Palette generated by pywal, used when `theme = "pywal"`.
    pub wal_colors: PathBuf,
}

impl PathConfig {
    /// Default layout below a home directory.
    pub fn from_home(home: &Path) -> Self {
        Self {
            config: find_config(&home.join(".config").join(APP_DIR)),
            cache_dir: home.join(".cache").join(APP_DIR),
            wal_colors: home.join(".cache").join("wal").join("colors.css"),
        }
    }

    /// Directory holding `index.html`, `style.css` and `search.bundle.js` skeletons.
    pub fn skeletons_dir(&self) -> PathBuf {
        self.cache_dir.join("skeletons")
    }

    /// Directory holding named `<theme>.css` files.
    pub fn themes_dir(&self) -> PathBuf {
        self.cache_dir.join("themes")
    }

    /// Directory receiving `style.css` and `colors.css`.
    pub fn styles_dir(&self) -> PathBuf {
        self.cache_dir.join("styles")
    }
}

/// First existing entry of [`CONFIG_FILES`] in `dir`.
fn find_config(dir: &Path) -> PathBuf {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(CONFIG_FILES[0]))
}

/// Everything read from the configuration file.
#[derive(Debug, Clone)]
pub struct StartConfig {
    /// Whole configuration as a tree; its `tree_*` entries are the bookmark roots.
    pub tree: Tree,
    /// Style settings from the top-level scalar keys.
    pub style: StyleConfig,
}

impl StartConfig {
    /// Builds the tree and style settings from one loaded value.
    pub fn from_value(value: &Value) -> anyhow::Result<Self> {
        let tree = Tree::from_value(value)?;
        let style = StyleConfig::from_value(value)?;
        Ok(Self { tree, style })
    }
}

/// The main application context.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Input and output locations.
    pub paths: PathConfig,
}

impl AppContext {
    pub fn new(paths: PathConfig) -> Self {
        Self { paths }
    }

    /// Creates a context rooted at the user's home directory.
    ///
    /// # Arguments
    ///
    /// * `config` - Overrides the configuration file path.
    /// * `cache_dir` - Overrides the cache (output) directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn from_home(config: Option<PathBuf>, cache_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let home = dirs::home_dir().ok_or(anyhow!("can not determine home directory"))?;
        let mut paths = PathConfig::from_home(&home);
        if let Some(config) = config {
            paths.config = config;
        }
        if let Some(cache_dir) = cache_dir {
            paths.cache_dir = cache_dir;
        }
        Ok(Self::new(paths))
    }

    /// Loads and parses the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be parsed, or holds
    /// wrongly typed style keys.
    pub fn load_config(&self) -> anyhow::Result<StartConfig> {
        let path = &self.paths.config;
        info!("Using config {}", path.display());
        let value = load_value(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        StartConfig::from_value(&value)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}
