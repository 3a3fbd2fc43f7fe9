//! Decision tree construction.
//!
//! # Algorithm
//!
//! 1. **Length partition**: rank the table by (length, ordinal). Equal keys
//!    are now adjacent, so duplicates are a single linear scan. Each run of
//!    equal length becomes a [`LengthArm`].
//! 2. **Column split** (recursive, per group with `L` unchecked columns):
//!    - one entry left → a leaf: [`Node::Exact`] when `L == 0`,
//!      [`Node::TailTest`] when `L` is within the tail-test threshold,
//!      [`Node::Guess`] otherwise;
//!    - otherwise pick the live column with the most distinct units, taking
//!      the first column that separates the whole group outright. Remove it
//!      from the live set, split the group into runs of equal unit, recurse
//!      with `L - 1`, then restore the column.
//!
//! The first-separating-column rule is greedy and order dependent. It is kept
//! as-is because it fixes the shape of the generated code.

use std::ops::Range;

use tracing::{debug, trace};

use crate::columns::LiveColumns;
use crate::config::SwitchConfig;
use crate::entry::{Candidate, Entry, EntryId};
use crate::error::SwitchError;
use crate::sort::{rank_sort, SortKey};
use crate::stack::ensure_sufficient_stack;
use crate::tree::{BranchStyle, CharArm, DispatchTree, LengthArm, Node};

/// Build the dispatch tree for `entries`.
///
/// Fails with [`SwitchError::DuplicateKey`] before doing any other work if
/// two entries share a key.
pub fn build(
    entries: &[Entry],
    default: &str,
    config: &SwitchConfig,
) -> Result<DispatchTree, SwitchError> {
    let table: Vec<Candidate> = entries.iter().map(Candidate::from).collect();
    let mut order: Vec<EntryId> = (0..table.len()).map(EntryId::new).collect();

    rank_sort(&mut order, &table, SortKey::LengthThenLexical);
    check_all_distinct(&order, &table)?;

    let lengths = {
        let mut builder = TreeBuilder {
            config,
            table: &table,
            order,
            columns: LiveColumns::default(),
        };
        builder.length_arms()
    };
    let length_style = BranchStyle::for_count(lengths.len(), config.use_if_threshold);

    debug!(
        entries = table.len(),
        lengths = lengths.len(),
        ?length_style,
        "built dispatch tree"
    );

    Ok(DispatchTree {
        default: default.to_owned(),
        table,
        lengths,
        length_style,
    })
}

/// Reject adjacent equal keys in a length-then-lexical ranked order.
fn check_all_distinct(order: &[EntryId], table: &[Candidate]) -> Result<(), SwitchError> {
    for pair in order.windows(2) {
        let prev = &table[pair[0].index()];
        let current = &table[pair[1].index()];
        if prev.units() == current.units() {
            return Err(SwitchError::DuplicateKey { key: prev.key() });
        }
    }
    Ok(())
}

/// Recursion state for one build call.
struct TreeBuilder<'a> {
    config: &'a SwitchConfig,
    table: &'a [Candidate],
    /// Entry ids, re-ranked in place as groups are split.
    order: Vec<EntryId>,
    /// Columns of the current group not yet discriminated.
    columns: LiveColumns,
}

impl TreeBuilder<'_> {
    fn length_arms(&mut self) -> Vec<LengthArm> {
        let table = self.table;
        let runs = runs_by(&self.order, 0..self.order.len(), |id| {
            table[id.index()].len()
        });

        let mut arms = Vec::with_capacity(runs.len());
        for (length, range) in runs {
            self.columns.reset(length);
            let node = self.split(range, length);
            arms.push(LengthArm { length, node });
        }
        arms
    }

    /// Build the node for `order[range]`, a group with `remaining` live
    /// columns.
    fn split(&mut self, range: Range<usize>, remaining: usize) -> Node {
        debug_assert_eq!(self.columns.len(), remaining);

        if range.len() == 1 {
            let entry = self.order[range.start];
            return if remaining == 0 {
                Node::Exact { entry }
            } else if remaining <= self.config.char_tail_test_threshold {
                Node::TailTest {
                    entry,
                    columns: self.columns.as_slice().to_vec(),
                }
            } else {
                Node::Guess { entry }
            };
        }

        // Distinct keys of equal length always differ in some live column.
        debug_assert!(remaining > 0);

        let (index, distinct) = self.pick_column(range.clone());
        let column = self.columns.take(index);
        let style = BranchStyle::for_count(distinct, self.config.use_if_threshold);
        trace!(column, distinct, group = range.len(), ?style, "split");

        let table = self.table;
        let runs = runs_by(&self.order, range, |id| table[id.index()].units()[column]);

        let mut arms = Vec::with_capacity(runs.len());
        for (unit, run) in runs {
            let node = ensure_sufficient_stack(|| self.split(run, remaining - 1));
            arms.push(CharArm { unit, node });
        }

        self.columns.restore(index, column);
        Node::Split {
            column,
            style,
            arms,
        }
    }

    /// Choose the live column to split `order[range]` on.
    ///
    /// Returns the column's index in the live set and its distinct unit
    /// count. On return the group is ranked by that column.
    fn pick_column(&mut self, range: Range<usize>) -> (usize, usize) {
        let table = self.table;
        let group = range.len();
        let live = self.columns.len();
        let mut best_index = 0;
        let mut best_count = 0;

        for index in 0..live {
            let column = self.columns.get(index);
            let slice = &mut self.order[range.clone()];
            rank_sort(slice, table, SortKey::Column(column));
            let count = count_runs(slice, |id| table[id.index()].units()[column]);
            if count == group {
                return (index, count);
            }
            if count > best_count {
                best_count = count;
                best_index = index;
            }
        }

        if best_index != live - 1 {
            let column = self.columns.get(best_index);
            rank_sort(&mut self.order[range], table, SortKey::Column(column));
        }
        (best_index, best_count)
    }
}

/// Split `order[range]` into maximal runs of equal `key`.
fn runs_by<K: PartialEq + Copy>(
    order: &[EntryId],
    range: Range<usize>,
    key: impl Fn(EntryId) -> K,
) -> Vec<(K, Range<usize>)> {
    let mut runs = Vec::new();
    let mut start = range.start;
    while start < range.end {
        let k = key(order[start]);
        let mut end = start + 1;
        while end < range.end && key(order[end]) == k {
            end += 1;
        }
        runs.push((k, start..end));
        start = end;
    }
    runs
}

/// Number of maximal runs of equal `key` in `order`.
fn count_runs<K: PartialEq>(order: &[EntryId], key: impl Fn(EntryId) -> K) -> usize {
    let mut count = 0;
    let mut current = None;
    for &id in order {
        let k = key(id);
        if current.as_ref() != Some(&k) {
            count += 1;
            current = Some(k);
        }
    }
    count
}
