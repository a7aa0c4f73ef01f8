//! Fixed-capacity probing table with tombstone accounting.

use std::fmt;

use crate::error::TableError;
use crate::iter::Iter;
use crate::key::BinKey;
use crate::probe::ProbeSequence;
use crate::slot::{BinState, SlotArray};

/// Default capacity exponent (capacity 32).
pub const DEFAULT_EXPONENT: u32 = 5;

/// A fixed-capacity set of integer-convertible keys using open addressing.
///
/// The table owns a power-of-two slot array and a parallel status array.
/// Capacity is fixed at construction; when every bin holds a live key a
/// further insert fails with [`TableError::Overflow`] instead of growing.
/// Removed keys leave tombstones that keep counting toward
/// [`load_factor`](QuadTable::load_factor) until an insert reclaims them.
///
/// Single-threaded by contract: no interior synchronization is provided.
pub struct QuadTable<K> {
    slots: SlotArray<K>,
    live: usize,
    erased: usize,
}

impl<K: BinKey> QuadTable<K> {
    /// Create a table with the default capacity of 32 bins.
    pub fn new() -> Self {
        Self::with_exponent(DEFAULT_EXPONENT)
    }

    /// Create a table with capacity `2^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `exponent >= usize::BITS`.
    pub fn with_exponent(exponent: u32) -> Self {
        assert!(
            exponent < usize::BITS,
            "capacity exponent {exponent} does not fit in usize"
        );
        Self {
            slots: SlotArray::new(1usize << exponent),
            live: 0,
            erased: 0,
        }
    }

    /// Number of live keys in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the table holds no live keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// The fixed number of bins.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of tombstoned bins awaiting reclamation.
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.erased
    }

    /// Fraction of the probe space consumed by live keys *and* tombstones.
    ///
    /// Tombstones degrade future probes exactly like live entries, so they
    /// count as load even though they do not count toward `len`.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        (self.live + self.erased) as f64 / self.capacity() as f64
    }

    /// Home bin for a key: its integer value reduced modulo the capacity,
    /// with negative remainders shifted up into `[0, capacity)`.
    ///
    /// This is the sole indexing function; every probe starts here.
    #[inline]
    pub fn home_bin(&self, key: K) -> usize {
        key.as_int().rem_euclid(self.capacity() as i64) as usize
    }

    #[inline]
    fn probe(&self, key: K) -> ProbeSequence {
        ProbeSequence::new(self.home_bin(key), self.capacity())
    }

    /// Membership test.
    ///
    /// Scans the key's probe sequence; a key only counts as present when
    /// its bin is occupied, never when the cell content merely matches
    /// behind a tombstone.
    pub fn contains(&self, key: K) -> bool {
        self.probe(key)
            .any(|bin| self.slots.state(bin) == BinState::Occupied && self.slots.key(bin) == key)
    }

    /// Raw content of the slot at `index`, regardless of its state.
    ///
    /// Diagnostics accessor: for unoccupied or tombstoned bins the result
    /// is an unspecified (default or stale) value, not an error. Fails
    /// with [`TableError::OutOfRange`] when `index >= capacity`.
    pub fn bin(&self, index: usize) -> Result<K, TableError> {
        if index >= self.capacity() {
            return Err(TableError::OutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(self.slots.key(index))
    }

    /// Insert a key, rejecting duplicates.
    ///
    /// Returns `Ok(true)` if the key was inserted, `Ok(false)` if it was
    /// already present (the table is left untouched, counts included),
    /// and [`TableError::Overflow`] when every bin already holds a live
    /// key. Erased bins are reclaimed in probe order.
    pub fn insert(&mut self, key: K) -> Result<bool, TableError> {
        if self.live == self.capacity() {
            return Err(TableError::Overflow);
        }

        // Single pass: remember the first reclaimable bin, keep scanning
        // for a live duplicate further along the sequence. Bins never go
        // Occupied -> Unoccupied mid-life, so no duplicate can sit past a
        // never-used bin and the scan may stop there.
        let mut free: Option<usize> = None;
        for bin in self.probe(key) {
            match self.slots.state(bin) {
                BinState::Occupied => {
                    if self.slots.key(bin) == key {
                        return Ok(false);
                    }
                }
                BinState::Erased => {
                    if free.is_none() {
                        free = Some(bin);
                    }
                }
                BinState::Unoccupied => {
                    if free.is_none() {
                        free = Some(bin);
                    }
                    break;
                }
            }
        }

        let bin = free.ok_or(TableError::Overflow)?;
        if self.slots.state(bin) == BinState::Erased {
            self.erased -= 1;
        }
        self.slots.write(bin, key);
        self.live += 1;
        Ok(true)
    }

    /// Remove a key, leaving a tombstone in its bin.
    ///
    /// Returns `true` if the key was present. At most one bin can match
    /// (set semantics), so at most one bin is tombstoned.
    pub fn remove(&mut self, key: K) -> bool {
        for bin in self.probe(key) {
            if self.slots.state(bin) == BinState::Occupied && self.slots.key(bin) == key {
                self.slots.mark_erased(bin);
                self.live -= 1;
                self.erased += 1;
                return true;
            }
        }
        false
    }

    /// Drop every key and tombstone. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots = SlotArray::new(self.capacity());
        self.live = 0;
        self.erased = 0;
    }

    /// Iterate over the live keys in bin order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.slots)
    }
}

impl<K: BinKey> Default for QuadTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// One token per bin in index order: `-` for unoccupied, `x` for a
/// tombstone, the key's decimal form for a live bin. Inspection only.
impl<K: BinKey + fmt::Display> fmt::Display for QuadTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bin in 0..self.capacity() {
            if bin > 0 {
                f.write_str(" ")?;
            }
            match self.slots.state(bin) {
                BinState::Unoccupied => f.write_str("-")?,
                BinState::Erased => f.write_str("x")?,
                BinState::Occupied => write!(f, "{}", self.slots.key(bin))?,
            }
        }
        Ok(())
    }
}
