//! Literal escaping.
//!
//! Generated code compares input characters against quoted literals and
//! assigns quoted key strings to the guess variable. Both go through
//! [`push_escaped_unit`], which works on UTF-16 code units because that is
//! the unit the target languages index strings by.
//!
//! # Rules
//!
//! | Unit                         | Output            |
//! |------------------------------|-------------------|
//! | `\b` `\t` `\n` `\f` `\r`     | two-char escape   |
//! | active delimiter, backslash  | backslash + unit  |
//! | printable ASCII `0x20..=0x7E`| verbatim          |
//! | anything else                | `\uXXXX`          |
//!
//! Units outside the Basic Multilingual Plane arrive as surrogate pairs and
//! are therefore written as two `\u` escapes, which is how C# and Java spell
//! them anyway.

/// Longest output for a single unit: `\u` plus four hex digits.
pub const LITERAL_UNIT_MAX_LEN: usize = 6;

/// Which quote delimits the literal being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Character literal, `'x'`.
    Char,
    /// String literal, `"xyz"`.
    Str,
}

impl Delimiter {
    /// The quote byte for this delimiter.
    pub const fn quote(self) -> u8 {
        match self {
            Delimiter::Char => b'\'',
            Delimiter::Str => b'"',
        }
    }
}

/// Append the escaped form of one UTF-16 code unit to `out`.
pub fn push_escaped_unit(out: &mut String, unit: u16, delimiter: Delimiter) {
    let quote = u16::from(delimiter.quote());
    let escape = match unit {
        0x08 => Some(b'b'),
        0x09 => Some(b't'),
        0x0A => Some(b'n'),
        0x0C => Some(b'f'),
        0x0D => Some(b'r'),
        0x5C => Some(b'\\'),
        u if u == quote => Some(delimiter.quote()),
        _ => None,
    };

    if let Some(letter) = escape {
        out.push('\\');
        out.push(char::from(letter));
        return;
    }

    if let Ok(byte) = u8::try_from(unit) {
        if (0x20..=0x7E).contains(&byte) {
            out.push(char::from(byte));
            return;
        }
    }

    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        out.push(hex_digit((unit >> shift) & 0xF));
    }
}

/// Uppercase hex digit for a nibble.
fn hex_digit(nibble: u16) -> char {
    char::from_digit(u32::from(nibble), 16).map_or('0', |c| c.to_ascii_uppercase())
}
