//! Synthesis heuristics.

/// Tunables for tree shape and layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Up to this many branches are emitted as an `if`/`else if` chain;
    /// more become a `switch`.
    pub use_if_threshold: usize,
    /// A lone entry with at most this many unchecked characters is confirmed
    /// with inline character tests; longer tails use the guess variable.
    pub char_tail_test_threshold: usize,
    /// Indentation level of the outermost generated line.
    pub base_indent: usize,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            use_if_threshold: 3,
            char_tail_test_threshold: 2,
            base_indent: 2,
        }
    }
}
