//! Ranked sort over entry indices.
//!
//! The builder sorts runs of [`EntryId`]s in place, keyed either by
//! (length, ordinal) for the length partition and duplicate detection, or by
//! the code unit at one column when splitting a group. Only the grouping of
//! equal keys matters, so an unstable sort is fine.

use std::cmp::Ordering;

use crate::entry::{Candidate, EntryId};

/// What to rank entries by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Length ascending, then ordinal code-unit order.
    ///
    /// The ordinal tiebreak exists so that equal keys end up adjacent.
    LengthThenLexical,
    /// Code unit at the given column. Every ranked key must be longer
    /// than the column.
    Column(usize),
}

impl SortKey {
    pub fn compare(self, a: &[u16], b: &[u16]) -> Ordering {
        match self {
            SortKey::LengthThenLexical => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            SortKey::Column(column) => a[column].cmp(&b[column]),
        }
    }
}

/// Sort `order` in place by `key`, looking units up in `table`.
pub fn rank_sort(order: &mut [EntryId], table: &[Candidate], key: SortKey) {
    order.sort_unstable_by(|a, b| key.compare(table[a.index()].units(), table[b.index()].units()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    fn table(keys: &[&str]) -> Vec<Candidate> {
        keys.iter()
            .map(|k| Candidate::from(&Entry::new(*k, "x")))
            .collect()
    }

    fn sorted_keys(keys: &[&str], key: SortKey) -> Vec<String> {
        let table = table(keys);
        let mut order: Vec<EntryId> = (0..table.len()).map(EntryId::new).collect();
        rank_sort(&mut order, &table, key);
        order.iter().map(|id| table[id.index()].key()).collect()
    }

    #[test]
    fn length_then_lexical() {
        assert_eq!(
            sorted_keys(&["abc", "b", "ab", "a", "aa"], SortKey::LengthThenLexical),
            vec!["a", "b", "aa", "ab", "abc"]
        );
    }

    #[test]
    fn length_then_lexical_groups_duplicates() {
        let sorted = sorted_keys(&["foo", "bar", "foo"], SortKey::LengthThenLexical);
        assert_eq!(sorted, vec!["bar", "foo", "foo"]);
    }

    #[test]
    fn ordinal_order_is_by_code_unit() {
        // 'Z' (0x5A) sorts before 'a' (0x61)
        assert_eq!(
            sorted_keys(&["a", "Z"], SortKey::LengthThenLexical),
            vec!["Z", "a"]
        );
    }

    #[test]
    fn by_column_groups_equal_units() {
        let sorted = sorted_keys(&["xb", "ya", "zb", "wa"], SortKey::Column(1));
        let seconds: Vec<char> = sorted.iter().filter_map(|k| k.chars().nth(1)).collect();
        assert_eq!(seconds, vec!['a', 'a', 'b', 'b']);
    }

    #[test]
    fn empty_and_single_ranges() {
        assert!(sorted_keys(&[], SortKey::LengthThenLexical).is_empty());
        assert_eq!(sorted_keys(&["q"], SortKey::Column(0)), vec!["q"]);
    }
}
