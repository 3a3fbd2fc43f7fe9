//! String dispatch synthesis.
//!
//! Turns a closed set of `(key, destination)` pairs into nested `if`/`switch`
//! code that maps a runtime string to its destination, or to a default, with
//! few character comparisons.
//!
//! # Architecture
//!
//! Synthesis runs in two steps:
//!
//! 1. **Build** ([`build::build`]): sort the table by length, reject duplicate
//!    keys, then recursively split each length group on the character column
//!    with the most distinct values. The result is a [`DispatchTree`].
//! 2. **Render** ([`render::render`]): walk the tree and write code into a
//!    [`CodeBuffer`], spelled according to a [`SyntaxProfile`].
//!
//! Because duplicates are rejected during the build step, a failing call
//! never writes anything to the buffer.
//!
//! A [`DispatchTree`] can also be evaluated directly with
//! [`DispatchTree::dispatch`], which follows exactly the control flow of the
//! rendered code. Tests use it as the oracle for generated code.
//!
//! # Speculative guesses
//!
//! Once a group is narrowed to a single entry with more than
//! [`SwitchConfig::char_tail_test_threshold`] unchecked characters, the
//! generated code assigns the destination without checking the rest and
//! records the candidate key in a guess variable. A single full string
//! comparison after the tree confirms or rejects the guess.

pub mod build;
mod columns;
pub mod config;
pub mod entry;
pub mod error;
pub mod profile;
pub mod render;
pub mod sort;
mod stack;
pub mod tree;

pub use config::SwitchConfig;
pub use entry::{Candidate, Entry, EntryId};
pub use error::SwitchError;
pub use profile::{CharAccess, ScopeExit, SyntaxProfile};
pub use sort::{rank_sort, SortKey};
pub use tree::{BranchStyle, CharArm, DispatchTree, LengthArm, Node};

use ids_emit::CodeBuffer;

/// Generator bound to one syntax profile and one set of heuristics.
#[derive(Clone, Debug)]
pub struct SwitchGenerator {
    profile: SyntaxProfile,
    config: SwitchConfig,
}

impl SwitchGenerator {
    /// Create a generator with default heuristics.
    pub fn new(profile: SyntaxProfile) -> Self {
        Self {
            profile,
            config: SwitchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SwitchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn profile(&self) -> &SyntaxProfile {
        &self.profile
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Build the decision tree without rendering it.
    pub fn plan(&self, entries: &[Entry], default: &str) -> Result<DispatchTree, SwitchError> {
        build::build(entries, default, &self.config)
    }

    /// Synthesize dispatch code for `entries` into `out`.
    ///
    /// An empty table writes nothing. On error `out` is left untouched.
    pub fn generate(
        &self,
        entries: &[Entry],
        default: &str,
        out: &mut CodeBuffer,
    ) -> Result<(), SwitchError> {
        let tree = self.plan(entries, default)?;
        render::render(&tree, &self.profile, &self.config, out);
        Ok(())
    }
}
