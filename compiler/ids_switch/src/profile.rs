//! Destination-language spelling.
//!
//! The synthesis algorithm is language-neutral; everything that differs
//! between C-family targets (how to read a length or a character, how to
//! leave the labeled scope, type names, variable names) lives in a
//! [`SyntaxProfile`].

use ids_emit::CodeBuffer;

/// How generated code reads the character at a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharAccess {
    /// `s[3]`
    Index,
    /// `s.charAt(3)`, with the method name stored here.
    Method(String),
}

/// How a confirmed match leaves the labeled scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeExit {
    /// `goto EL0;` with an `EL0:` label placed after the scope.
    GotoEndLabel,
    /// `break L0;` out of the labeled block.
    BreakScope,
}

/// Names and spellings used in generated code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Preset name, for diagnostics.
    pub name: String,
    /// Variable holding the runtime input string.
    pub input: String,
    /// Variable receiving the destination.
    pub result: String,
    /// Variable holding a speculatively matched key.
    pub guess: String,
    /// Scratch variable for a character compared against several literals.
    pub scratch: String,
    /// Suffix appended to `input` for the cached length variable.
    pub length_suffix: String,
    /// Label of the outer block.
    pub scope_label: String,
    /// Label after the outer block (only with [`ScopeExit::GotoEndLabel`]).
    pub end_label: String,
    /// Label put on the first `switch` of a branch.
    pub switch_label: String,
    pub string_type: String,
    pub int_type: String,
    pub null: String,
    /// Appended to `input` to read its length, e.g. `.Length`.
    pub length_access: String,
    pub char_access: CharAccess,
    /// String equality method used to confirm a guess.
    pub equals_method: String,
    pub exit: ScopeExit,
}

impl SyntaxProfile {
    /// Names accepted by [`SyntaxProfile::by_name`].
    pub const PRESETS: &'static [&'static str] = &["csharp", "java"];

    /// C#, exiting through `goto`.
    pub fn csharp() -> Self {
        Self {
            name: "csharp".to_string(),
            input: "s".to_string(),
            result: "id".to_string(),
            guess: "X".to_string(),
            scratch: "c".to_string(),
            length_suffix: "_length".to_string(),
            scope_label: "L0".to_string(),
            end_label: "EL0".to_string(),
            switch_label: "L".to_string(),
            string_type: "string".to_string(),
            int_type: "int".to_string(),
            null: "null".to_string(),
            length_access: ".Length".to_string(),
            char_access: CharAccess::Index,
            equals_method: "Equals".to_string(),
            exit: ScopeExit::GotoEndLabel,
        }
    }

    /// Java, exiting through a labeled `break`.
    pub fn java() -> Self {
        Self {
            name: "java".to_string(),
            string_type: "String".to_string(),
            length_access: ".length()".to_string(),
            char_access: CharAccess::Method("charAt".to_string()),
            equals_method: "equals".to_string(),
            exit: ScopeExit::BreakScope,
            ..Self::csharp()
        }
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "csharp" | "cs" => Some(Self::csharp()),
            "java" => Some(Self::java()),
            _ => None,
        }
    }

    /// Write the runtime length of the input, e.g. `s.Length`.
    pub(crate) fn write_length(&self, out: &mut CodeBuffer) {
        out.push_str(&self.input);
        out.push_str(&self.length_access);
    }

    /// Write the cached length variable name, e.g. `s_length`.
    pub(crate) fn write_length_var(&self, out: &mut CodeBuffer) {
        out.push_str(&self.input);
        out.push_str(&self.length_suffix);
    }

    /// Write the input character at `column`.
    pub(crate) fn write_char_at(&self, out: &mut CodeBuffer, column: usize) {
        out.push_str(&self.input);
        match &self.char_access {
            CharAccess::Index => {
                out.push_char('[');
                out.push_int(column);
                out.push_char(']');
            }
            CharAccess::Method(method) => {
                out.push_char('.');
                out.push_str(method);
                out.push_char('(');
                out.push_int(column);
                out.push_char(')');
            }
        }
    }

    /// Write the statement leaving the scope after a confirmed match.
    pub(crate) fn write_exit(&self, out: &mut CodeBuffer) {
        match self.exit {
            ScopeExit::GotoEndLabel => {
                out.push_str("goto ");
                out.push_str(&self.end_label);
            }
            ScopeExit::BreakScope => {
                out.push_str("break ");
                out.push_str(&self.scope_label);
            }
        }
        out.push_char(';');
    }
}

impl Default for SyntaxProfile {
    fn default() -> Self {
        Self::csharp()
    }
}
