//! Slot storage: parallel key and status arrays.
//!
//! - One key cell and one lifecycle tag per bin, co-indexed
//! - Both arrays are allocated together at construction and dropped
//!   together; they always have identical length
//! - Key content is meaningful only while the bin is `Occupied`

/// Lifecycle tag of a single bin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinState {
    /// Never held a key since construction (or the last `clear`).
    Unoccupied,
    /// Holds a live key.
    Occupied,
    /// Held a key that was since erased (tombstone). Counts toward the
    /// load factor until an insert reclaims the bin.
    Erased,
}

/// Fixed-length dual array owned exclusively by the table.
pub(crate) struct SlotArray<K> {
    keys: Box<[K]>,
    states: Box<[BinState]>,
}

impl<K: Copy + Default> SlotArray<K> {
    /// Allocate `capacity` bins, all unoccupied, keys default-initialized.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            keys: vec![K::default(); capacity].into_boxed_slice(),
            states: vec![BinState::Unoccupied; capacity].into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn state(&self, bin: usize) -> BinState {
        self.states[bin]
    }

    /// Raw key cell content, whatever the bin's state.
    #[inline]
    pub(crate) fn key(&self, bin: usize) -> K {
        self.keys[bin]
    }

    /// Write a key and mark the bin occupied.
    #[inline]
    pub(crate) fn write(&mut self, bin: usize, key: K) {
        debug_assert_ne!(self.states[bin], BinState::Occupied, "overwriting a live bin");
        self.keys[bin] = key;
        self.states[bin] = BinState::Occupied;
    }

    /// Tombstone an occupied bin. The stale key cell is left in place;
    /// non-occupied content is unspecified and never read as live.
    #[inline]
    pub(crate) fn mark_erased(&mut self, bin: usize) {
        debug_assert_eq!(self.states[bin], BinState::Occupied, "erasing a bin with no live key");
        self.states[bin] = BinState::Erased;
    }
}
