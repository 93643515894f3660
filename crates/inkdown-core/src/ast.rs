//! Tree types for the article Markdown dialect.
//!
//! The tree is deliberately flat: the dialect has no nested lists, no
//! nested blockquotes, and list items carry inline content only. Text
//! payloads use `Cow<'a, str>` so single-line content borrows straight
//! from the input.

/// Borrowed or owned string payload.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A parsed article body.
///
/// Produced by [`crate::parse`] and consumed by the HTML backend. The
/// document is a plain block sequence; there is no metadata, profile, or
/// directive layer in this dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Content blocks in source order.
    pub blocks: Vec<Block<'a>>,
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`1.` `2.` `3.`).
    Ordered,
    /// Bulleted list (`-` or `*`).
    Unordered,
}

/// Block-level nodes.
///
/// Every variant maps to exactly one HTML container; none of them is
/// wrapped in paragraph markup by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Section heading, levels 1-3 only.
    Heading {
        level: u8,
        content: Vec<Inline<'a>>,
    },
    /// Text paragraph; single newlines inside it become line breaks.
    Paragraph { content: Vec<Inline<'a>> },
    /// A contiguous run of same-kind list items.
    List {
        kind: ListKind,
        items: Vec<Vec<Inline<'a>>>,
    },
    /// Fenced code block; content is verbatim, no inline pass inside.
    CodeBlock {
        lang: CowStr<'a>,
        content: CowStr<'a>,
    },
    /// A single `>` line. Consecutive quote lines stay separate blocks.
    Quote { content: Vec<Inline<'a>> },
    /// Horizontal rule (a line of three or more hyphens).
    Rule,
}

/// Inline-level nodes within a block's text content.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    /// Plain text run.
    Text(CowStr<'a>),
    /// `**strong**`; inner content gets its own inline pass.
    Strong(Vec<Inline<'a>>),
    /// `*emphasis*`; inner content gets its own inline pass.
    Emphasis(Vec<Inline<'a>>),
    /// `` `code span` ``; content is literal.
    Code(CowStr<'a>),
    /// `[label](url)`; the label is inline-parsed, the url is literal.
    Link {
        label: Vec<Inline<'a>>,
        url: CowStr<'a>,
    },
    /// `![alt](url)`; alt is literal and may be empty.
    Image {
        alt: CowStr<'a>,
        url: CowStr<'a>,
    },
    /// A source newline inside a paragraph.
    LineBreak,
}
