//! # inkdown
//!
//! Markdown-to-HTML renderer for article content.
//!
//! Supports a restricted dialect: headings 1-3, bold, italic, inline and
//! fenced code, links, images, unordered/ordered lists, blockquotes,
//! horizontal rules, and paragraphs with line breaks. Rendering is total:
//! any input yields an HTML string, and malformed markup passes through
//! as literal text instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = inkdown_core::render("# Hello\n\nThis is a **paragraph**.");
//!
//! assert_eq!(html, "<h1>Hello</h1>\n<p>This is a <strong>paragraph</strong>.</p>");
//! ```
//!
//! ## Escaping
//!
//! Source text is HTML-escaped by default. Sites that trust their authors
//! can opt into raw pass-through:
//!
//! ```rust
//! use inkdown_core::Renderer;
//!
//! let escaped = Renderer::new().render("<b>hi</b>");
//! assert_eq!(escaped, "<p>&lt;b&gt;hi&lt;/b&gt;</p>");
//!
//! let raw = Renderer::new().with_raw_html().render("<b>hi</b>");
//! assert_eq!(raw, "<p><b>hi</b></p>");
//! ```
//!
//! ## Inspecting the tree
//!
//! The block tree is public for tooling that wants structure rather than
//! markup:
//!
//! ```rust
//! use inkdown_core::{parse, Block};
//!
//! let doc = parse("# Title\n\nBody.");
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
//! ```

pub mod ast;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod parser;

pub use ast::{Block, Document, Inline, ListKind};
pub use html::{escape_html, Renderer};
pub use parser::parse;

/// Convert an article body to HTML with default options (escaping on).
#[inline]
pub fn render(markdown: &str) -> String {
    Renderer::new().render(markdown)
}
