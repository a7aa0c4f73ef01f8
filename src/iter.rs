//! Iterators for `QuadTable`.

use crate::key::BinKey;
use crate::slot::{BinState, SlotArray};
use crate::table::QuadTable;

/// An iterator over the live keys of a `QuadTable`, in bin order.
///
/// Tombstoned and never-used bins are skipped; keys are yielded by value
/// (they are `Copy`).
pub struct Iter<'a, K> {
    slots: &'a SlotArray<K>,
    bin: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(slots: &'a SlotArray<K>) -> Self {
        Self { slots, bin: 0 }
    }
}

impl<K: BinKey> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while self.bin < self.slots.capacity() {
            let bin = self.bin;
            self.bin += 1;
            if self.slots.state(bin) == BinState::Occupied {
                return Some(self.slots.key(bin));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.capacity() - self.bin))
    }
}

impl<'a, K: BinKey> IntoIterator for &'a QuadTable<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_skips_dead_bins() {
        let mut table: QuadTable<i32> = QuadTable::with_exponent(3);

        for key in [1, 3, 5] {
            table.insert(key).unwrap();
        }
        table.remove(3);

        let keys: Vec<i32> = table.iter().collect();
        assert_eq!(keys, vec![1, 5]);
    }

    #[test]
    fn test_iter_empty_table() {
        let table: QuadTable<i32> = QuadTable::with_exponent(3);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let mut table: QuadTable<i32> = QuadTable::with_exponent(4);
        table.insert(2).unwrap();
        table.insert(7).unwrap();

        let mut keys: Vec<i32> = (&table).into_iter().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![2, 7]);
    }

    #[test]
    fn test_iter_count_matches_len() {
        let mut table: QuadTable<i64> = QuadTable::with_exponent(5);
        for key in 0..20 {
            table.insert(key * 3).unwrap();
        }
        table.remove(9);
        table.remove(12);

        assert_eq!(table.iter().count(), table.len());
    }
}
