//! Core trait and constants for msdsort.
//!
//! This module defines:
//! - [`RadixKey`]: the key abstraction both algorithms partition by.
//! - [`BINS`]: the number of buckets per byte of key.

use std::cmp::Ordering;

/// Number of distinct byte values, and thus buckets per recursion level.
pub const BINS: usize = 256;

/// A fixed-width integer key, viewed as a big-endian sequence of bytes.
///
/// Both the sorter and the selector partition keys one byte at a time, most
/// significant byte first. [`WIDTH`](RadixKey::WIDTH) is the byte width of the
/// key type and [`radix_byte`](RadixKey::radix_byte) extracts the byte at a
/// given depth, so neither algorithm hardcodes a 32-bit layout.
///
/// All primitive integers implement this trait. Signed integers are viewed
/// through their raw two's-complement bytes, so negative keys order *after*
/// non-negative ones (raw-byte order, not numeric order).
///
/// # Examples
///
/// ```
/// use msdsort::core::RadixKey;
///
/// // 0x0000018F
/// let key = 399u32;
///
/// assert_eq!(u32::WIDTH, 4);
/// assert_eq!(key.radix_byte(0), 0x00);
/// assert_eq!(key.radix_byte(2), 0x01);
/// assert_eq!(key.radix_byte(3), 0x8F);
/// ```
pub trait RadixKey: Copy {
    /// Byte width of the key type.
    const WIDTH: usize;

    /// The key's byte at `depth`, 0 being the most significant.
    ///
    /// `depth` must be below [`WIDTH`](RadixKey::WIDTH); the algorithms'
    /// recursion bounds guarantee this internally.
    fn radix_byte(self, depth: usize) -> u8;

    /// Compares two keys by their byte sequence, most significant byte first.
    ///
    /// For same-width keys this is the order both algorithms partition by
    /// (the unsigned numeric order for unsigned keys).
    #[inline(always)]
    fn radix_cmp(self, other: Self) -> Ordering {
        for depth in 0..Self::WIDTH {
            match self.radix_byte(depth).cmp(&other.radix_byte(depth)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// Signed types go through their unsigned twin so the shift is logical, not
// arithmetic. radix_cmp is overridden with a single integer compare, which
// agrees with the byte-wise default for these types.
macro_rules! impl_radix_key {
    ($($ty:ty => $uint:ty),* $(,)?) => {$(
        impl RadixKey for $ty {
            const WIDTH: usize = size_of::<$ty>();

            #[inline(always)]
            fn radix_byte(self, depth: usize) -> u8 {
                debug_assert!(depth < Self::WIDTH);
                ((self as $uint) >> (8 * (Self::WIDTH - 1 - depth))) as u8
            }

            #[inline(always)]
            fn radix_cmp(self, other: Self) -> Ordering {
                (self as $uint).cmp(&(other as $uint))
            }
        }
    )*};
}

impl_radix_key!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
