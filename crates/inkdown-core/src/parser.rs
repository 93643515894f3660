//! Block-level scanner producing the document tree.
//!
//! One pass over the lines: each line either starts a block on its own
//! (heading, quote, rule), opens a multi-line region (fenced code), or
//! joins a run (list items, paragraph lines). List runs are tracked
//! explicitly while scanning, so two list blocks separated by other
//! content produce two separate containers and a kind change closes the
//! current one.

use std::borrow::Cow;

use crate::ast::{Block, Document, ListKind};
use crate::inline::parse_inlines;
use crate::lexer::{Lexer, Line};

/// Parse an article body into a block tree.
///
/// Total over all inputs: unrecognized or malformed lines fall through to
/// paragraph text.
pub fn parse(input: &str) -> Document<'_> {
    let mut parser = BlockParser {
        input,
        lexer: Lexer::new(input),
    };

    let mut blocks = Vec::with_capacity(16);
    loop {
        parser.lexer.skip_blank_lines();
        match parser.parse_block() {
            Some(block) => blocks.push(block),
            None => break,
        }
    }

    Document { blocks }
}

struct BlockParser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> BlockParser<'a> {
    fn parse_block(&mut self) -> Option<Block<'a>> {
        let line = *self.lexer.peek_line()?;
        let text = line.text;

        if let Some(level) = heading_level(text) {
            self.lexer.next_line();
            let content = text[level as usize..].trim_start();
            return Some(Block::Heading {
                level,
                content: parse_inlines(content),
            });
        }

        if let Some(rest) = text.strip_prefix('>') {
            self.lexer.next_line();
            return Some(Block::Quote {
                content: parse_inlines(rest.trim_start()),
            });
        }

        if is_rule(text) {
            self.lexer.next_line();
            return Some(Block::Rule);
        }

        if is_fence(text) {
            self.lexer.next_line();
            return Some(self.parse_code_block(text));
        }

        if let Some(kind) = list_kind(text) {
            return Some(self.parse_list(kind));
        }

        Some(self.parse_paragraph())
    }

    /// Collect lines until the closing fence, or end of input for an
    /// unclosed fence. Content is taken verbatim.
    fn parse_code_block(&mut self, opening: &'a str) -> Block<'a> {
        let lang = opening
            .trim_start()
            .strip_prefix("```")
            .unwrap_or("")
            .trim();

        let mut content = String::new();
        let mut first = true;
        while let Some(line) = self.lexer.next_line() {
            if line.trimmed() == "```" {
                break;
            }
            if !first {
                content.push('\n');
            }
            content.push_str(line.text);
            first = false;
        }

        Block::CodeBlock {
            lang: Cow::Borrowed(lang),
            content: Cow::Owned(content),
        }
    }

    /// Collect a contiguous run of same-kind list items.
    fn parse_list(&mut self, kind: ListKind) -> Block<'a> {
        let mut items = Vec::with_capacity(8);

        loop {
            let text = match self.lexer.peek_line() {
                Some(line) => line.text,
                None => break,
            };
            if list_kind(text) != Some(kind) {
                break;
            }
            self.lexer.next_line();
            items.push(parse_inlines(item_text(text, kind)));
        }

        Block::List { kind, items }
    }

    /// Accumulate lines until a blank line or the start of another block.
    /// The paragraph text is a contiguous slice of the input, so inline
    /// content borrows instead of reassembling lines.
    fn parse_paragraph(&mut self) -> Block<'a> {
        let mut start: Option<usize> = None;
        let mut end = 0;

        loop {
            let line = match self.lexer.peek_line() {
                Some(line) => *line,
                None => break,
            };
            if line.is_blank() || starts_block(line.text) {
                break;
            }
            self.lexer.next_line();
            if start.is_none() {
                start = Some(line.start);
            }
            end = line.end();
        }

        let text = match start {
            Some(s) => &self.input[s..end],
            None => "",
        };

        Block::Paragraph {
            content: parse_inlines(text),
        }
    }
}

/// Heading level for a `#`-prefixed line, if it is a valid heading.
///
/// Only levels 1-3 exist in the dialect and the marker must be followed
/// by a space; `####` lines and `#NoSpace` stay paragraph text.
fn heading_level(text: &str) -> Option<u8> {
    let bytes = text.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if (1..=3).contains(&level) && bytes.get(level) == Some(&b' ') {
        Some(level as u8)
    } else {
        None
    }
}

/// A horizontal rule is a line of three or more hyphens and nothing else.
fn is_rule(text: &str) -> bool {
    let trimmed = text.trim_end();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

fn is_fence(text: &str) -> bool {
    text.trim_start().starts_with("```")
}

/// Classify a line as a list item, allowing leading indentation.
/// The marker must be followed by whitespace, so `---` and `*emphasis*`
/// never read as items.
fn list_kind(text: &str) -> Option<ListKind> {
    let bytes = text.trim_start().as_bytes();
    match bytes.first() {
        Some(b'-') | Some(b'*') => match bytes.get(1) {
            Some(b' ') | Some(b'\t') => Some(ListKind::Unordered),
            _ => None,
        },
        Some(b) if b.is_ascii_digit() => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(digits) == Some(&b'.')
                && matches!(bytes.get(digits + 1), Some(b' ') | Some(b'\t'))
            {
                Some(ListKind::Ordered)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Item text with the marker and its whitespace stripped.
fn item_text(text: &str, kind: ListKind) -> &str {
    let trimmed = text.trim_start();
    let after_marker = match kind {
        ListKind::Unordered => &trimmed[1..],
        ListKind::Ordered => {
            let digits = trimmed
                .as_bytes()
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            &trimmed[digits + 1..]
        }
    };
    after_marker.trim_start()
}

/// Check whether a line would start a non-paragraph block, ending the
/// current paragraph. Shares the classifiers with `parse_block` so the
/// two can never disagree.
fn starts_block(text: &str) -> bool {
    heading_level(text).is_some()
        || text.starts_with('>')
        || is_rule(text)
        || is_fence(text)
        || list_kind(text).is_some()
}
