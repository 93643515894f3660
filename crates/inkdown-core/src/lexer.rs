//! Line scanner over the input text.
//!
//! The scanner hands lines to the block parser one at a time with a
//! peek/consume API. Newline detection uses `memchr` (SIMD on supported
//! platforms) and lines borrow directly from the input. Each line carries
//! its starting byte offset so the block parser can slice multi-line
//! regions (paragraphs) back out of the input without reassembling them.

use memchr::memchr;

/// A single line of input, without its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (trailing `\n` and `\r` stripped).
    pub text: &'a str,
    /// Byte offset of the line start in the original input.
    pub start: usize,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Line text with surrounding whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Byte offset one past the last text byte (excludes the newline).
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Line scanner for the block parser.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
    /// Peeked line for lookahead.
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner over the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            peeked: None,
        }
    }

    /// Peek at the next line without consuming it.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Skip blank lines, returning how many were skipped.
    #[inline]
    pub fn skip_blank_lines(&mut self) -> usize {
        let mut count = 0;
        while let Some(line) = self.peek_line() {
            if !line.is_blank() {
                break;
            }
            self.next_line();
            count += 1;
        }
        count
    }

    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // CRLF: drop the carriage return from the line text.
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        Some(Line {
            text: &self.input[start..text_end],
            start,
        })
    }
}
