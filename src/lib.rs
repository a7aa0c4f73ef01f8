//! A fixed-capacity hash set over integer-convertible keys.
//!
//! `quadtable` stores keys in a power-of-two slot array with open
//! addressing and collision resolution by probing:
//!
//! - Capacity is chosen at construction and never changes (no rehashing)
//! - Each bin carries a three-state lifecycle tag
//!   (unoccupied / occupied / erased), so deletions leave tombstones
//!   that count toward the load factor until an insert reclaims them
//! - Set semantics: inserting a key already present is a no-op
//! - Every operation is bounded by a single pass over the probe
//!   sequence, which visits each bin exactly once
//!
//! ```
//! use quadtable::table::QuadTable;
//!
//! let mut table = QuadTable::<i32>::with_exponent(3); // capacity 8
//!
//! assert_eq!(table.insert(7), Ok(true));
//! assert_eq!(table.insert(7), Ok(false)); // duplicate rejected
//! assert!(table.contains(7));
//!
//! assert!(table.remove(7));
//! assert!(!table.contains(7));
//! ```

pub mod error;
pub mod iter;
pub mod key;
pub mod probe;
pub mod slot;
pub mod table;

pub use error::TableError;
pub use key::BinKey;
pub use slot::BinState;
pub use table::{QuadTable, DEFAULT_EXPONENT};
