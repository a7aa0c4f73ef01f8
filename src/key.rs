//! Key capability: equality plus conversion to a signed integer.

/// A key storable in a [`QuadTable`](crate::table::QuadTable).
///
/// The table indexes keys by their signed-integer representation reduced
/// modulo the capacity, so the conversion below *is* the hash function.
/// `Default` exists so the slot buffer can be default-initialized; the
/// default value of a bin is never read as a live key.
pub trait BinKey: Copy + Eq + Default {
    /// Signed-integer representation used by the hash function.
    fn as_int(self) -> i64;
}

macro_rules! impl_bin_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl BinKey for $t {
                #[inline]
                fn as_int(self) -> i64 {
                    // widths past 64 bits wrap, like an integral cast
                    self as i64
                }
            }
        )*
    };
}

impl_bin_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
