//! # Msdsort
//!
//! `msdsort` is a small sorting and selection library built on most-significant-digit
//! (MSD) radix partitioning over the raw bytes of fixed-width integers.
//!
//! It provides two independent operations that share nothing but the byte
//! decomposition of the key:
//!
//! - [`msd_sort`]: a full ascending sort, recursively bucketing keys into 256
//!   bins by successive bytes, most significant first.
//! - [`top_k`]: selection of the K largest keys *without* sorting the rest,
//!   descending into a bin only when whole-bin counts cannot settle the K
//!   boundary.
//!
//! ## Key Features
//!
//! - **Comparison-free partitioning**: keys are placed by byte value, never
//!   compared pairwise, giving O(W &middot; N) worst-case sorting for W-byte keys.
//! - **Count-guided selection**: [`top_k`] counts bin occupancy and only
//!   refines the single bin that straddles the K boundary, so when K &#8810; N
//!   most of the input is touched once.
//! - **Width-generic keys**: the [`RadixKey`] trait derives byte width and
//!   byte extraction from the key type; all primitive integers are supported
//!   out of the box.
//! - **Bounded recursion**: depth never exceeds the key's byte width (4 for
//!   32-bit keys), and every recursion frame owns its own bin storage.
//!
//! ## Usage
//!
//! ### Sorting
//!
//! ```rust
//! use msdsort::msd_sort_mut;
//!
//! let mut data = vec![399u32, 18, 512, 42, 123];
//! msd_sort_mut(&mut data);
//!
//! assert_eq!(data, vec![18, 42, 123, 399, 512]);
//! ```
//!
//! ### Top-K selection
//!
//! ```rust
//! use msdsort::top_k;
//!
//! let data = vec![399u32, 18, 512, 42, 123, 999, 777];
//!
//! // The three largest, sorted descending.
//! assert_eq!(top_k(&data, 3), vec![999, 777, 512]);
//! ```
//!
//! ## Ordering caveat
//!
//! Keys are ordered by their raw big-endian byte sequence. For unsigned
//! integers this is the numeric order; for signed integers the two's-complement
//! sign bit makes negative keys order *after* non-negative ones. Restoring
//! numeric order for negative keys is explicitly out of scope.
//!
//! ## Performance Characteristics
//!
//! - **Sort**: O(W &middot; N) worst case; recursion stops early wherever a bin
//!   resolves to a single key.
//! - **Top-K**: one O(N) counting pass at the first byte, then counting passes
//!   over straddling bins only; sub-sort-cost whenever the top keys separate
//!   within a few byte levels.
//! - **Memory**: the sorter allocates per-level bin vectors totalling N keys;
//!   the selector allocates one 256-entry count table per level plus the
//!   straddling bin's keys.

pub mod algo;
pub mod core;
pub use algo::{msd_sort, msd_sort_mut, top_k};
pub use core::RadixKey;

pub mod prelude {
    pub use crate::algo::{msd_sort, msd_sort_mut, top_k};
    pub use crate::core::RadixKey;
}
