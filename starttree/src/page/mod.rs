//! Page assembly.
//!
//! Inputs (below the cache directory):
//!
//! - `skeletons/index.html` with `<!-- Tree Columns -->`,
//!   `<!-- Bookmarks Data -->` and `<!-- Search Script -->` marker lines
//! - `skeletons/style.css` with a `/* font-size */` marker line
//! - `skeletons/search.bundle.js`, the prebuilt search script
//! - the theme stylesheet, see [`Theme::source`]
//!
//! Outputs: `index.html`, `search.bundle.js`, `styles/style.css` and
//! `styles/colors.css`.

use std::path::PathBuf;

use anyhow::Context;
use bookmark_tree::{Bookmark, flatten, malformed_entries, render};
use colored::Colorize;

use crate::{
    ctx::AppContext,
    style::{StyleConfig, Theme, assemble_css},
    utils,
};

use self::template::{Slot, Template};

/// Skeleton templates with named insertion points.
pub mod template;

/// Whitespace normalization of assembled output.
pub mod tidy;

/// File name of the bundled search script, in `skeletons/` and in the output.
pub const SEARCH_BUNDLE: &str = "search.bundle.js";

/// Final page contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub html: String,
    pub css: String,
}

/// Script block embedding the bookmark list and starting the search UI.
///
/// # Errors
///
/// Returns an error if the bookmarks cannot be serialized.
pub fn bookmarks_script(bookmarks: &[Bookmark]) -> anyhow::Result<String> {
    // keep a `</script>` inside a URL or name from closing the block
    let json = serde_json::to_string(bookmarks)?.replace("</", "<\\/");
    Ok(format!(
        "<script>\n\
         const bookmarks = {json};\n\
         window.addEventListener('DOMContentLoaded', function() {{\n\
         \x20 initializeSearch(bookmarks);\n\
         }});\n\
         </script>\n"
    ))
}

/// Script tag loading the bundled search script.
pub fn search_script() -> String {
    format!("<script src=\"./{SEARCH_BUNDLE}\"></script>")
}

/// Fills the HTML skeleton and normalizes the result.
pub fn assemble_html(
    template: &str,
    tree_html: &str,
    bookmarks: &[Bookmark],
) -> anyhow::Result<String> {
    let template = Template::parse(template);
    for slot in [Slot::TreeColumns, Slot::BookmarksData, Slot::SearchScript] {
        if !template.has_slot(slot) {
            warn!("index.html skeleton has no {} line", slot.marker());
        }
    }

    let data = bookmarks_script(bookmarks)?;
    let html = template.fill(|slot| match slot {
        Slot::TreeColumns => Some(tree_html.to_string()),
        Slot::BookmarksData => Some(data.clone()),
        Slot::SearchScript => Some(search_script()),
        Slot::FontSize => None,
    });
    Ok(tidy::normalize(&html))
}

/// Builds the final HTML and CSS from their skeletons.
///
/// Pure: nothing is read or written.
pub fn assemble(
    html_template: &str,
    css_template: &str,
    tree_html: &str,
    bookmarks: &[Bookmark],
    style: &StyleConfig,
) -> anyhow::Result<Assembled> {
    Ok(Assembled {
        html: assemble_html(html_template, tree_html, bookmarks)?,
        css: assemble_css(css_template, style.font_size),
    })
}

/// Inputs read before any output is written.
struct PageInputs {
    html_template: String,
    css_template: String,
    theme: PathBuf,
    bundle: PathBuf,
}

impl AppContext {
    fn read_page_inputs(&self, theme: &Theme) -> anyhow::Result<PageInputs> {
        let skeletons = self.paths.skeletons_dir();
        let html_template = utils::read_to_string(&skeletons.join("index.html"))?;
        let css_template = utils::read_to_string(&skeletons.join("style.css"))?;

        let theme = theme.source(&self.paths);
        utils::ensure_file(&theme, "theme stylesheet")?;

        let bundle = skeletons.join(SEARCH_BUNDLE);
        utils::ensure_file(&bundle, "search script")?;

        Ok(PageInputs {
            html_template,
            css_template,
            theme,
            bundle,
        })
    }

    /// Regenerates the whole start page.
    ///
    /// The configuration and every input are read first, so a missing file
    /// aborts the run before any output is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, an input is
    /// missing, or an output cannot be written.
    pub fn generate(&self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        for path in malformed_entries(&config.tree) {
            warn!("Skipping malformed bookmark entry: {path}");
        }

        let inputs = self.read_page_inputs(&config.style.theme)?;

        let bookmarks = flatten(&config.tree);
        let tree_html = render(&config.tree);
        debug!(
            "{} bookmarks in {} columns",
            bookmarks.len(),
            config.tree.roots().len()
        );

        let page = assemble(
            &inputs.html_template,
            &inputs.css_template,
            &tree_html,
            &bookmarks,
            &config.style,
        )?;

        println!("{}", "Generating style.css...".bold().purple());
        let styles = self.paths.styles_dir();
        std::fs::create_dir_all(&styles)
            .with_context(|| format!("Failed to create {}", styles.display()))?;
        utils::copy_file(&inputs.theme, &styles.join("colors.css"))?;
        utils::write_file(&styles.join("style.css"), &page.css)?;

        println!("{}", "Generating index.html...".bold().purple());
        let cache = &self.paths.cache_dir;
        utils::copy_file(&inputs.bundle, &cache.join(SEARCH_BUNDLE))?;
        utils::write_file(&cache.join("index.html"), &page.html)?;

        println!("{}", "Done!".bold().green());
        Ok(())
    }
}
