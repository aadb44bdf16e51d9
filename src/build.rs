//! Static export of the public page.
//!
//! Renders the site with the saved content (no menu, no editor, nothing
//! in the cart) and writes it to `<output>/index.html`, minified unless
//! disabled in config.

use crate::{
    app::UiState,
    config::AppConfig,
    content::ContentStore,
    editor::AdminState,
    log,
    render::render_page,
    storage::FileStorage,
};
use anyhow::{Context, Result};
use std::fs;

/// Render the page to `<output>/index.html`.
pub fn build_site(config: &AppConfig) -> Result<()> {
    let store = ContentStore::new(Box::new(FileStorage::new(&config.storage.path)));
    let content = store.load();

    let html = render_page(&content, &UiState::default(), &AdminState::default());
    let html = if config.build.minify {
        minify_page(html.as_bytes())
    } else {
        html.into_bytes()
    };

    fs::create_dir_all(&config.build.output)
        .with_context(|| format!("Failed to create `{}`", config.build.output.display()))?;
    let index = config.build.output.join("index.html");
    fs::write(&index, html).with_context(|| format!("Failed to write `{}`", index.display()))?;

    log!("build"; "{}", index.display());
    Ok(())
}

/// Minify HTML output (removes whitespace).
fn minify_page(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}
