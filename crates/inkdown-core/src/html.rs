//! HTML backend walking the block tree.
//!
//! Output rules match the article site's conventions: blocks are joined
//! with single newlines, links open in a new browsing context, list
//! containers are emitted on one line. Source text is HTML-escaped by
//! default; [`Renderer::with_raw_html`] restores pass-through for trusted
//! authors.

use crate::ast::{Block, Document, Inline, ListKind};
use crate::parser;

/// Markdown-to-HTML renderer.
///
/// Stateless between calls; a single instance may be shared freely.
///
/// # Example
///
/// ```rust
/// use inkdown_core::Renderer;
///
/// let renderer = Renderer::new();
/// let html = renderer.render("# Title");
/// assert_eq!(html, "<h1>Title</h1>");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    escape_html: bool,
}

impl Renderer {
    /// Create a renderer with escaping enabled.
    #[inline]
    pub fn new() -> Self {
        Self { escape_html: true }
    }

    /// Pass source HTML through unescaped.
    ///
    /// Only for content from trusted authors; with this set, raw markup in
    /// the input lands in the output verbatim.
    #[inline]
    pub fn with_raw_html(mut self) -> Self {
        self.escape_html = false;
        self
    }

    /// Convert an article body to HTML.
    ///
    /// Total over all string inputs; malformed markup degrades to literal
    /// text, never an error.
    pub fn render(&self, markdown: &str) -> String {
        self.render_document(&parser::parse(markdown))
    }

    /// Emit HTML for an already-parsed document.
    pub fn render_document(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(256);
        for (i, block) in doc.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.write_block(&mut out, block);
        }
        out
    }

    fn write_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                let (open, close) = match level {
                    1 => ("<h1>", "</h1>"),
                    2 => ("<h2>", "</h2>"),
                    _ => ("<h3>", "</h3>"),
                };
                out.push_str(open);
                self.write_inlines(out, content);
                out.push_str(close);
            }
            Block::Paragraph { content } => {
                out.push_str("<p>");
                self.write_inlines(out, content);
                out.push_str("</p>");
            }
            Block::List { kind, items } => {
                let (open, close) = match kind {
                    ListKind::Unordered => ("<ul>", "</ul>"),
                    ListKind::Ordered => ("<ol>", "</ol>"),
                };
                out.push_str(open);
                for item in items {
                    out.push_str("<li>");
                    self.write_inlines(out, item);
                    out.push_str("</li>");
                }
                out.push_str(close);
            }
            Block::CodeBlock { lang, content } => {
                out.push_str("<pre><code");
                if !lang.is_empty() {
                    out.push_str(" class=\"language-");
                    self.push_text(out, lang);
                    out.push('"');
                }
                out.push('>');
                self.push_text(out, content);
                out.push_str("</code></pre>");
            }
            Block::Quote { content } => {
                out.push_str("<blockquote>");
                self.write_inlines(out, content);
                out.push_str("</blockquote>");
            }
            Block::Rule => out.push_str("<hr>"),
        }
    }

    fn write_inlines(&self, out: &mut String, inlines: &[Inline]) {
        for inline in inlines {
            self.write_inline(out, inline);
        }
    }

    fn write_inline(&self, out: &mut String, inline: &Inline) {
        match inline {
            Inline::Text(text) => self.push_text(out, text),
            Inline::Strong(content) => {
                out.push_str("<strong>");
                self.write_inlines(out, content);
                out.push_str("</strong>");
            }
            Inline::Emphasis(content) => {
                out.push_str("<em>");
                self.write_inlines(out, content);
                out.push_str("</em>");
            }
            Inline::Code(content) => {
                out.push_str("<code>");
                self.push_text(out, content);
                out.push_str("</code>");
            }
            Inline::Link { label, url } => {
                out.push_str("<a href=\"");
                self.push_text(out, url);
                out.push_str("\" target=\"_blank\">");
                self.write_inlines(out, label);
                out.push_str("</a>");
            }
            Inline::Image { alt, url } => {
                out.push_str("<img src=\"");
                self.push_text(out, url);
                out.push_str("\" alt=\"");
                self.push_text(out, alt);
                out.push_str("\">");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }

    #[inline]
    fn push_text(&self, out: &mut String, text: &str) {
        if self.escape_html {
            push_escaped(out, text);
        } else {
            out.push_str(text);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape the HTML-significant characters of a string.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    push_escaped(&mut result, s);
    result
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}
