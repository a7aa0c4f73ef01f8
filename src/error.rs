//! Error taxonomy for table operations.

use thiserror::Error;

/// Failures surfaced by [`QuadTable`](crate::table::QuadTable) operations.
///
/// Both variants are reported synchronously and leave the table
/// unmodified; there is no retry or partial-failure path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// No bin can accept a new distinct key. The table never grows, so
    /// the caller has to reject the insert or rebuild into a larger table.
    #[error("table overflow: no bin available for a new key")]
    Overflow,

    /// A raw slot index fell outside `[0, capacity)`.
    #[error("bin index {index} out of range for capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },
}
