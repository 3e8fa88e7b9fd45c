//! Sorting and selection algorithms (MSD radix sort and count-guided top-K).
//!
//! Both algorithms walk the bytes of the key most significant first,
//! partitioning into 256 bins per level:
//! - [`msd_sort`] visits bins in ascending byte order and recurses into every
//!   bin that still needs resolution, producing a fully sorted output.
//! - [`top_k`] only *counts* bin sizes, visits bins in descending byte order,
//!   and recurses into the single bin that straddles the K boundary, so most
//!   of the input is never partitioned beyond the first byte.
//!
//! The main entry points are [`msd_sort`], [`msd_sort_mut`] and [`top_k`].

use crate::core::{BINS, RadixKey};
use cuneiform::cuneiform;
use std::array;

/// Sorts a slice of fixed-width integer keys, returning a new vector in
/// ascending raw-byte order.
///
/// The input is not modified. The sort is stable: keys with equal byte
/// sequences keep their relative input order (for same-width integer keys,
/// byte equality implies value equality, so this is only observable through
/// the invariant itself).
///
/// Runs in O(W * N) worst case for W-byte keys, with one pass per byte level
/// actually needed to distinguish the keys present.
///
/// # Examples
///
/// ```
/// use msdsort::msd_sort;
///
/// let data = vec![399u32, 18, 512, 42];
///
/// assert_eq!(msd_sort(&data), vec![18, 42, 399, 512]);
/// ```
pub fn msd_sort<K: RadixKey>(data: &[K]) -> Vec<K> {
    sort_by_byte(data.to_vec(), 0)
}

/// Sorts a mutable slice in-place.
///
/// Convenience wrapper for [`msd_sort`] which writes the sorted sequence back
/// over the input slice.
///
/// # Examples
///
/// ```
/// use msdsort::msd_sort_mut;
///
/// let mut data = vec![399u32, 18, 512, 42];
/// msd_sort_mut(&mut data);
///
/// assert_eq!(data, vec![18, 42, 399, 512]);
/// ```
pub fn msd_sort_mut<K: RadixKey>(data: &mut [K]) {
    let sorted = sort_by_byte(data.to_vec(), 0);
    data.copy_from_slice(&sorted);
}

/// One MSD partitioning level of the sorter.
///
/// Distributes keys into 256 bins by the byte at `depth`, preserving
/// encounter order within each bin, then concatenates the bins in ascending
/// byte order, recursing at `depth + 1` into bins that hold more than one key
/// while bytes remain. Each frame owns its bin array exclusively.
fn sort_by_byte<K: RadixKey>(data: Vec<K>, depth: usize) -> Vec<K> {
    if data.len() <= 1 || depth >= K::WIDTH {
        return data;
    }

    let len = data.len();
    let mut bins: [Vec<K>; BINS] = array::from_fn(|_| Vec::new());
    for key in data {
        bins[key.radix_byte(depth) as usize].push(key);
    }

    let mut sorted = Vec::with_capacity(len);
    for bin in bins {
        if bin.len() > 1 && depth + 1 < K::WIDTH {
            sorted.extend(sort_by_byte(bin, depth + 1));
        } else {
            sorted.extend(bin);
        }
    }
    sorted
}

/// Selects the `k` largest keys (by raw-byte order) without sorting the rest.
///
/// Returns a vector of length `min(k, data.len())`, sorted descending, so the
/// overall largest key comes first. Every returned key is >= every key left
/// out; ties whose byte sequences are identical are admitted in encounter
/// order at the boundary.
///
/// `k` larger than the input length simply returns every key, and `k == 0`
/// returns an empty vector. (`k` is a `usize`, so the negative and over-wide
/// values the contract would otherwise have to reject cannot be expressed.)
///
/// Expected cost is one counting pass per level over the straddling bin's
/// keys only, well below a full sort when `k` is small relative to the input.
///
/// # Examples
///
/// ```
/// use msdsort::top_k;
///
/// let data = vec![399u32, 18, 512, 42, 999];
///
/// assert_eq!(top_k(&data, 2), vec![999, 512]);
/// assert_eq!(top_k(&data, 0), vec![]);
/// ```
pub fn top_k<K: RadixKey>(data: &[K], k: usize) -> Vec<K> {
    let mut picked = Vec::with_capacity(k.min(data.len()));
    select_by_byte(data, 0, k, &mut picked);

    // Construction order is only descending *between* resolved bins; within a
    // bin appended whole it is encounter order. Fix up the <= k keys so the
    // contract is simply "sorted descending".
    picked.sort_unstable_by(|a, b| b.radix_cmp(*a));
    picked
}

// Cache-aligned count table for one selector frame.
#[cuneiform]
struct BinCounts {
    data: [usize; BINS],
}

/// One MSD partitioning level of the selector.
///
/// Counts keys per byte value at `depth`, then scans bins from byte 255 down:
/// a bin that fits entirely under the remaining need is appended whole (in
/// encounter order), while the single bin that straddles the boundary is
/// extracted and refined by the next byte. Returns as soon as `picked`
/// reaches `k`.
fn select_by_byte<K: RadixKey>(data: &[K], depth: usize, k: usize, picked: &mut Vec<K>) {
    if data.is_empty() || picked.len() >= k || depth >= K::WIDTH {
        return;
    }

    let mut counts = BinCounts { data: [0; BINS] };
    let counts = &mut counts.data;
    for key in data {
        counts[key.radix_byte(depth) as usize] += 1;
    }

    for bin in (0..BINS).rev() {
        if counts[bin] == 0 {
            continue;
        }
        let byte = bin as u8;
        let members = || data.iter().copied().filter(move |key| key.radix_byte(depth) == byte);

        if picked.len() + counts[bin] <= k {
            // Whole bin fits under the K boundary.
            picked.extend(members());
        } else if depth + 1 >= K::WIDTH {
            // Straddling bin whose keys are byte-identical through every
            // byte: indistinguishable ties, admitted in encounter order.
            let need = k - picked.len();
            picked.extend(members().take(need));
        } else {
            // Bin straddles the boundary: refine it by the next byte.
            let bucket: Vec<K> = members().collect();
            select_by_byte(&bucket, depth + 1, k, picked);
        }

        if picked.len() >= k {
            return;
        }
    }
}
