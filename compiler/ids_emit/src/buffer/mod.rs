//! Erasable code buffer.
//!
//! An append-only text store with one write cursor (the end of the text)
//! plus the ability to cut an arbitrary span back out. Offsets handed out by
//! [`CodeBuffer::offset`] are byte offsets; they stay valid until an erase
//! at or before them.

use std::ops::Range;

use crate::literal::{push_escaped_unit, Delimiter, LITERAL_UNIT_MAX_LEN};

/// Initial capacity (4K).
const INITIAL_CAPACITY: usize = 1 << 12;

/// How indentation levels turn into whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentStyle {
    /// Visible columns per indentation level.
    pub step: usize,
    /// Columns covered by one tab. Zero means "never use tabs".
    pub tab_size: usize,
}

impl IndentStyle {
    /// Spaces only, `step` columns per level.
    pub const fn spaces(step: usize) -> Self {
        Self { step, tab_size: 0 }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            step: 4,
            tab_size: 8,
        }
    }
}

/// Line terminator written by [`CodeBuffer::newline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }

    /// Pick the terminator already used by `source`.
    pub fn detect(source: &str) -> Self {
        if source.contains("\r\n") {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        }
    }
}

/// Text sink for generated code.
#[derive(Clone, Debug)]
pub struct CodeBuffer {
    text: String,
    indent: IndentStyle,
    terminator: LineTerminator,
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBuffer {
    /// Create an empty buffer with the default indentation style.
    pub fn new() -> Self {
        Self::with_style(IndentStyle::default(), LineTerminator::default())
    }

    /// Create an empty buffer with explicit formatting settings.
    pub fn with_style(indent: IndentStyle, terminator: LineTerminator) -> Self {
        Self {
            text: String::with_capacity(INITIAL_CAPACITY),
            indent,
            terminator,
        }
    }

    pub fn indent_style(&self) -> IndentStyle {
        self.indent
    }

    pub fn line_terminator(&self) -> LineTerminator {
        self.terminator
    }

    /// Current write position.
    pub fn offset(&self) -> usize {
        self.text.len()
    }

    /// Allocated storage, in bytes.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Last character written, if any.
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Reset the cursor to the start. Storage is kept.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Make room for `area` more bytes.
    ///
    /// Storage doubles, or grows to fit exactly when doubling is not enough.
    fn ensure_area(&mut self, area: usize) {
        let end = self.text.len() + area;
        let capacity = self.text.capacity();
        if end > capacity {
            let new_capacity = (capacity * 2).max(end);
            self.text.reserve_exact(new_capacity - self.text.len());
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.ensure_area(c.len_utf8());
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.ensure_area(s.len());
        self.text.push_str(s);
    }

    /// Append a run of UTF-16 code units. Unpaired surrogates become U+FFFD.
    pub fn push_units(&mut self, units: &[u16]) {
        // A unit decodes to at most three UTF-8 bytes.
        self.ensure_area(units.len() * 3);
        self.text.extend(
            char::decode_utf16(units.iter().copied())
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    }

    /// Append an integer in decimal.
    pub fn push_int(&mut self, value: usize) {
        self.push_str(&value.to_string());
    }

    /// Append `unit` as a quoted character literal.
    pub fn quote_char(&mut self, unit: u16) {
        self.ensure_area(2 + LITERAL_UNIT_MAX_LEN);
        self.text.push('\'');
        push_escaped_unit(&mut self.text, unit, Delimiter::Char);
        self.text.push('\'');
    }

    /// Append `s` as a quoted string literal.
    pub fn quote_str(&mut self, s: &str) {
        self.ensure_area(2 + LITERAL_UNIT_MAX_LEN * s.len());
        self.text.push('"');
        for unit in s.encode_utf16() {
            push_escaped_unit(&mut self.text, unit, Delimiter::Str);
        }
        self.text.push('"');
    }

    /// Append a UTF-16 key as a quoted string literal.
    pub fn quote_units(&mut self, units: &[u16]) {
        self.ensure_area(2 + LITERAL_UNIT_MAX_LEN * units.len());
        self.text.push('"');
        for &unit in units {
            push_escaped_unit(&mut self.text, unit, Delimiter::Str);
        }
        self.text.push('"');
    }

    /// Emit indentation for `level`: tabs first, then the remainder in spaces.
    pub fn indent(&mut self, level: usize) {
        let visible = self.indent.step * level;
        let (tabs, spaces) = if self.indent.tab_size == 0 {
            (0, visible)
        } else {
            (visible / self.indent.tab_size, visible % self.indent.tab_size)
        };
        self.ensure_area(tabs + spaces);
        self.text.extend(std::iter::repeat('\t').take(tabs));
        self.text.extend(std::iter::repeat(' ').take(spaces));
    }

    pub fn newline(&mut self) {
        self.push_str(self.terminator.as_str());
    }

    /// Indent, append `text`, end the line.
    pub fn line(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.push_str(text);
        self.newline();
    }

    /// Cut `span` out of the buffer, shifting the remainder left.
    ///
    /// Offsets recorded at or after `span.start` are invalid afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `span` is out of bounds or does not fall on character
    /// boundaries. Spans built from [`CodeBuffer::offset`] always do.
    pub fn erase(&mut self, span: Range<usize>) {
        self.text.replace_range(span, "");
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Materialize the contents, consuming the buffer.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for CodeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
