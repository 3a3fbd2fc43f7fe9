//! Live column set.
//!
//! The columns of a length group not yet used to discriminate it. Taking a
//! column swaps it with the last live one and pops it; restoring reverses
//! that exactly, so siblings see the set in its original order.

use smallvec::SmallVec;

#[derive(Debug, Default)]
pub(crate) struct LiveColumns {
    columns: SmallVec<[usize; 16]>,
}

impl LiveColumns {
    /// Make every column of a `length`-unit key live, in ascending order.
    pub(crate) fn reset(&mut self, length: usize) {
        self.columns.clear();
        self.columns.extend(0..length);
    }

    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn get(&self, index: usize) -> usize {
        self.columns[index]
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.columns
    }

    /// Remove the column at `index`; the last live column takes its slot.
    pub(crate) fn take(&mut self, index: usize) -> usize {
        self.columns.swap_remove(index)
    }

    /// Undo a [`take`](Self::take) of `column` from `index`.
    pub(crate) fn restore(&mut self, index: usize, column: usize) {
        self.columns.push(column);
        let last = self.columns.len() - 1;
        self.columns.swap(index, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_ascending() {
        let mut live = LiveColumns::default();
        live.reset(4);
        assert_eq!(live.as_slice(), &[0, 1, 2, 3]);
        live.reset(0);
        assert_eq!(live.len(), 0);
    }

    #[test]
    fn take_moves_last_into_slot() {
        let mut live = LiveColumns::default();
        live.reset(4);
        assert_eq!(live.take(1), 1);
        assert_eq!(live.as_slice(), &[0, 3, 2]);
        assert_eq!(live.get(1), 3);
    }

    #[test]
    fn restore_undoes_take() {
        let mut live = LiveColumns::default();
        live.reset(5);
        let outer = live.take(0);
        let inner = live.take(2);
        live.restore(2, inner);
        assert_eq!(live.as_slice(), &[4, 1, 2, 3]);
        live.restore(0, outer);
        assert_eq!(live.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn take_last_column() {
        let mut live = LiveColumns::default();
        live.reset(3);
        assert_eq!(live.take(2), 2);
        assert_eq!(live.as_slice(), &[0, 1]);
        live.restore(2, 2);
        assert_eq!(live.as_slice(), &[0, 1, 2]);
    }
}
