//! Browser bindings for the inkdown renderer.
//!
//! The article pages call these from page scripts after fetching content
//! from the data service; the returned HTML string is inserted into the
//! page's content region by the caller.

use wasm_bindgen::prelude::*;

use inkdown_core::Renderer;

/// Convert article Markdown to HTML with escaping enabled.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(markdown: &str) -> String {
    inkdown_core::render(markdown)
}

/// Convert article Markdown to HTML with raw pass-through.
///
/// Only for content from trusted authors: source HTML lands in the output
/// unescaped.
#[wasm_bindgen(js_name = renderMarkdownRaw)]
pub fn render_markdown_raw(markdown: &str) -> String {
    Renderer::new().with_raw_html().render(markdown)
}
