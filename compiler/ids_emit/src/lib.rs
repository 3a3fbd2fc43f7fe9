//! Code buffer for the ID switch generator.
//!
//! Every character of generated dispatch code is written through a
//! [`CodeBuffer`]. Besides plain appends, the buffer knows how to:
//!
//! - quote character and string literals with C-family escaping
//!   ([`literal`]),
//! - emit indentation as a run of tabs followed by spaces ([`IndentStyle`]),
//! - erase an already written span, shifting the tail left.
//!
//! Erasing is what lets the generator speculatively declare a variable and
//! drop the declaration once it knows the variable went unused.
//!
//! # Modules
//!
//! - [`buffer`]: the buffer itself
//! - [`literal`]: escaping rules for quoted literals

pub mod buffer;
pub mod literal;

pub use buffer::{CodeBuffer, IndentStyle, LineTerminator};
pub use literal::{Delimiter, LITERAL_UNIT_MAX_LEN};
