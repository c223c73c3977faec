//! Theme and font-size resolution.
//!
//! Style settings live as top-level scalars next to the bookmark trees:
//!
//! ```yaml
//! theme: gruvbox   # <cache>/themes/gruvbox.css, or "pywal"
//! font_size: 18    # px
//! ```

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    ctx::PathConfig,
    page::template::{Slot, Template},
};

/// Font size used when the config has none.
pub const DEFAULT_FONT_SIZE: u32 = 20;

/// Theme used when the config has none.
pub const DEFAULT_THEME: &str = "void";

/// Reserved theme name selecting the pywal palette.
pub const PYWAL_THEME: &str = "pywal";

/// Import line prepended to the generated stylesheet.
pub const COLORS_IMPORT: &str = "@import url('./colors.css');";

/// Style settings read from the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    /// Base font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
        }
    }
}

impl StyleConfig {
    /// Extracts the style keys from the whole configuration value.
    ///
    /// Keys other than `font_size` and `theme` are ignored.
    pub fn from_value(value: &Value) -> anyhow::Result<Self> {
        StyleConfig::deserialize(value).context("invalid style settings")
    }
}

/// Color theme selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Theme {
    /// Palette generated by pywal.
    Pywal,
    /// A stylesheet from the themes directory.
    Named(String),
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Named(DEFAULT_THEME.to_string())
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        if name == PYWAL_THEME {
            Theme::Pywal
        } else {
            Theme::Named(name)
        }
    }
}

impl Theme {
    /// Stylesheet that gets copied to `styles/colors.css`.
    pub fn source(&self, paths: &PathConfig) -> PathBuf {
        match self {
            Theme::Pywal => paths.wal_colors.clone(),
            Theme::Named(name) => paths.themes_dir().join(format!("{name}.css")),
        }
    }
}

/// Fills the stylesheet skeleton.
///
/// The result imports `colors.css` first, then reproduces `template` with
/// the font-size marker replaced by a `font-size` declaration.
pub fn assemble_css(template: &str, font_size: u32) -> String {
    let body = Template::parse(template).fill(|slot| match slot {
        Slot::FontSize => Some(format!("font-size: {font_size}px;")),
        _ => None,
    });
    format!("{COLORS_IMPORT}\n{body}")
}
