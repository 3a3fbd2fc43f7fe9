//! Dispatch decision trees.
//!
//! A [`DispatchTree`] is the output of the build step: a length partition at
//! the root, then nested column splits, then one leaf per key. Rendering
//! turns it into code; [`DispatchTree::dispatch`] runs it in-process with the
//! same semantics as that code.

use crate::entry::{Candidate, EntryId};

/// How a set of branches is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchStyle {
    /// `if (...) {...} else if (...) {...}`
    IfChain,
    /// `switch (...) { case ...: }`
    Switch,
}

impl BranchStyle {
    /// Chains for up to `threshold` branches, switches beyond.
    pub fn for_count(branches: usize, threshold: usize) -> Self {
        if branches <= threshold {
            BranchStyle::IfChain
        } else {
            BranchStyle::Switch
        }
    }
}

/// All keys of one length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthArm {
    pub length: usize,
    pub node: Node,
}

/// All keys of a group sharing the code unit at the parent's column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharArm {
    pub unit: u16,
    pub node: Node,
}

/// One step of the decision tree below the length partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Branch on the input unit at `column`, arms in ascending unit order.
    Split {
        column: usize,
        style: BranchStyle,
        arms: Vec<CharArm>,
    },
    /// Every column already checked: the entry is identified.
    ///
    /// Rendered code jumps straight out of the scope, so nothing follows it.
    Exact { entry: EntryId },
    /// Check the remaining `columns` inline, then jump out on success.
    TailTest { entry: EntryId, columns: Vec<usize> },
    /// Assign the entry without checking the remaining columns and record
    /// its key as the guess.
    Guess { entry: EntryId },
}

impl Node {
    /// Whether rendered code for this node never falls through.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Exact { .. })
    }
}

/// Result of walking one length arm.
enum Walk {
    /// A confirmed match; control leaves the scope.
    Matched(EntryId),
    /// A speculative match, pending the guess check.
    Guessed(EntryId),
    /// Fell out of the tree without a match.
    Missed,
}

/// A synthesized dispatch tree plus the table it indexes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTree {
    pub(crate) default: String,
    pub(crate) table: Vec<Candidate>,
    pub(crate) lengths: Vec<LengthArm>,
    pub(crate) length_style: BranchStyle,
}

impl DispatchTree {
    /// The destination used when nothing matches.
    pub fn default_destination(&self) -> &str {
        &self.default
    }

    pub fn table(&self) -> &[Candidate] {
        &self.table
    }

    pub fn candidate(&self, id: EntryId) -> &Candidate {
        &self.table[id.index()]
    }

    /// Length groups in ascending length order.
    pub fn lengths(&self) -> &[LengthArm] {
        &self.lengths
    }

    pub fn length_style(&self) -> BranchStyle {
        self.length_style
    }

    /// True for a tree built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Map `input` to its destination, exactly as the generated code would.
    pub fn dispatch(&self, input: &str) -> &str {
        let units: Vec<u16> = input.encode_utf16().collect();
        self.dispatch_units(&units)
    }

    /// [`dispatch`](Self::dispatch) over UTF-16 code units.
    pub fn dispatch_units(&self, input: &[u16]) -> &str {
        let Some(arm) = self.lengths.iter().find(|arm| arm.length == input.len()) else {
            return &self.default;
        };

        match self.walk(&arm.node, input) {
            Walk::Matched(entry) => self.candidate(entry).destination(),
            Walk::Guessed(entry) => {
                let guess = self.candidate(entry);
                if guess.units() == input {
                    guess.destination()
                } else {
                    &self.default
                }
            }
            Walk::Missed => &self.default,
        }
    }

    /// Follow `node` for an input of the arm's length.
    fn walk(&self, mut node: &Node, input: &[u16]) -> Walk {
        loop {
            match node {
                Node::Split { column, arms, .. } => {
                    let unit = input[*column];
                    match arms.iter().find(|arm| arm.unit == unit) {
                        Some(arm) => node = &arm.node,
                        None => return Walk::Missed,
                    }
                }
                Node::Exact { entry } => return Walk::Matched(*entry),
                Node::TailTest { entry, columns } => {
                    let expected = self.candidate(*entry).units();
                    return if columns.iter().all(|&c| input[c] == expected[c]) {
                        Walk::Matched(*entry)
                    } else {
                        Walk::Missed
                    };
                }
                Node::Guess { entry } => return Walk::Guessed(*entry),
            }
        }
    }
}
