//! Inline pass over a block's text content.
//!
//! Scans left to right with `memchr`-accelerated delimiter search and no
//! backtracking. A delimiter that fails to close is left in the text as-is;
//! the pass never errors. Dispatch order encodes the dialect's precedence:
//! at a `*` position strong is tried before emphasis, and a `!` consumes
//! its bracket before the link rule could see it.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use crate::ast::Inline;

/// Parse the inline elements of a text run.
///
/// Strong and emphasis never cross a newline; code spans, links, and
/// images may. Newlines themselves become [`Inline::LineBreak`].
#[inline]
pub fn parse_inlines(text: &str) -> Vec<Inline<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    InlineParser::new(text).parse()
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(8);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            let next_special = self.find_next_special();
            if next_special >= self.bytes.len() {
                break;
            }
            self.pos = next_special;

            let parsed = match self.bytes[self.pos] {
                b'\n' => self.take_line_break(&mut inlines, &mut text_start, 1),
                b'\r' => self.try_crlf_break(&mut inlines, &mut text_start),
                b'`' => self.try_code_span(&mut inlines, &mut text_start),
                b'*' => self.try_asterisk(&mut inlines, &mut text_start),
                b'[' => self.try_link(&mut inlines, &mut text_start),
                b'!' => self.try_image(&mut inlines, &mut text_start),
                _ => false,
            };

            if !parsed {
                self.pos += 1;
            }
        }

        if text_start < self.bytes.len() {
            inlines.push(self.text_node(text_start, self.bytes.len()));
        }

        inlines
    }

    #[inline(always)]
    fn find_next_special(&self) -> usize {
        let remaining = &self.bytes[self.pos..];

        // Two SIMD-accelerated scans cover all six special bytes.
        let common = memchr3(b'*', b'`', b'[', remaining);
        let rare = memchr3(b'!', b'\n', b'\r', remaining);

        match (common, rare) {
            (Some(a), Some(b)) => self.pos + a.min(b),
            (Some(a), None) => self.pos + a,
            (None, Some(b)) => self.pos + b,
            (None, None) => self.bytes.len(),
        }
    }

    #[inline(always)]
    fn text_node(&self, start: usize, end: usize) -> Inline<'a> {
        Inline::Text(Cow::Borrowed(&self.text[start..end]))
    }

    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) {
        if *text_start < self.pos {
            inlines.push(self.text_node(*text_start, self.pos));
        }
        *text_start = self.pos;
    }

    /// Byte offset of the next newline at or after `from`, as a search
    /// limit for delimiters that must not cross lines.
    #[inline(always)]
    fn line_limit(&self, from: usize) -> usize {
        match memchr(b'\n', &self.bytes[from..]) {
            Some(off) => from + off,
            None => self.bytes.len(),
        }
    }

    #[inline]
    fn take_line_break(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
        width: usize,
    ) -> bool {
        self.flush_text(inlines, text_start);
        inlines.push(Inline::LineBreak);
        self.pos += width;
        *text_start = self.pos;
        true
    }

    #[inline]
    fn try_crlf_break(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        if self.bytes.get(self.pos + 1) == Some(&b'\n') {
            self.take_line_break(inlines, text_start, 2)
        } else {
            false
        }
    }

    #[inline]
    fn try_code_span(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;

        if let Some(close_offset) = memchr(b'`', &self.bytes[start + 1..]) {
            let close = start + 1 + close_offset;
            // Empty spans stay literal.
            if close == start + 1 {
                return false;
            }

            self.flush_text(inlines, text_start);
            inlines.push(Inline::Code(Cow::Borrowed(&self.text[start + 1..close])));
            self.pos = close + 1;
            *text_start = self.pos;
            true
        } else {
            false
        }
    }

    #[inline]
    fn try_asterisk(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        if self.bytes.get(self.pos + 1) == Some(&b'*') {
            self.try_strong(inlines, text_start)
        } else {
            self.try_emphasis(inlines, text_start)
        }
    }

    #[inline]
    fn try_strong(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let content_start = start + 2;

        if content_start >= self.bytes.len() {
            return false;
        }

        let limit = self.line_limit(content_start);
        let mut search = content_start;

        while let Some(offset) = memchr(b'*', &self.bytes[search..limit]) {
            let close = search + offset;

            if close + 1 < limit && self.bytes[close + 1] == b'*' && close > content_start {
                self.flush_text(inlines, text_start);

                let inner = parse_inlines(&self.text[content_start..close]);
                inlines.push(Inline::Strong(inner));

                self.pos = close + 2;
                *text_start = self.pos;
                return true;
            }
            search = close + 1;
        }

        false
    }

    #[inline]
    fn try_emphasis(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let content_start = start + 1;

        if content_start >= self.bytes.len() {
            return false;
        }

        let limit = self.line_limit(content_start);

        if let Some(offset) = memchr(b'*', &self.bytes[content_start..limit]) {
            let close = content_start + offset;
            // Dispatch guarantees the byte after the opener is not `*`,
            // so the nearest closer always has content before it.
            self.flush_text(inlines, text_start);

            let inner = parse_inlines(&self.text[content_start..close]);
            inlines.push(Inline::Emphasis(inner));

            self.pos = close + 1;
            *text_start = self.pos;
            true
        } else {
            false
        }
    }

    /// Parse `(url)` starting at `open`, returning the url range.
    #[inline]
    fn parse_url(&self, open: usize) -> Option<(usize, usize)> {
        if self.bytes.get(open) != Some(&b'(') {
            return None;
        }
        let url_start = open + 1;
        let close = url_start + memchr(b')', &self.bytes[url_start..])?;
        if close == url_start {
            return None;
        }
        Some((url_start, close))
    }

    #[inline]
    fn try_link(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;

        let Some(bracket_offset) = memchr(b']', &self.bytes[start + 1..]) else {
            return false;
        };
        let bracket_close = start + 1 + bracket_offset;
        if bracket_close == start + 1 {
            return false;
        }

        let Some((url_start, url_end)) = self.parse_url(bracket_close + 1) else {
            return false;
        };

        self.flush_text(inlines, text_start);

        let label = parse_inlines(&self.text[start + 1..bracket_close]);
        inlines.push(Inline::Link {
            label,
            url: Cow::Borrowed(&self.text[url_start..url_end]),
        });

        self.pos = url_end + 1;
        *text_start = self.pos;
        true
    }

    #[inline]
    fn try_image(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;

        if self.bytes.get(start + 1) != Some(&b'[') {
            return false;
        }

        let alt_start = start + 2;
        let Some(bracket_offset) = memchr(b']', &self.bytes[alt_start..]) else {
            return false;
        };
        let bracket_close = alt_start + bracket_offset;

        let Some((url_start, url_end)) = self.parse_url(bracket_close + 1) else {
            return false;
        };

        self.flush_text(inlines, text_start);

        inlines.push(Inline::Image {
            alt: Cow::Borrowed(&self.text[alt_start..bracket_close]),
            url: Cow::Borrowed(&self.text[url_start..url_end]),
        });

        self.pos = url_end + 1;
        *text_start = self.pos;
        true
    }
}
