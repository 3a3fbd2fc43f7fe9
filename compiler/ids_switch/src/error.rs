//! Synthesis errors.

/// Error when a switch table cannot be synthesized.
///
/// The only failure is a violated precondition on the input table; callers
/// that want a friendlier diagnostic should validate keys upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchError {
    /// Two entries share the same key.
    DuplicateKey { key: String },
}

impl std::fmt::Display for SwitchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchError::DuplicateKey { key } => {
                write!(f, "duplicate key {key:?} in switch table")
            }
        }
    }
}

impl std::error::Error for SwitchError {}
