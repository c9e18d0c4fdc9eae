// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

//! Unstable sort for random-access ranges (samplesort / IPS⁴o): sample,
//! classify into buckets via an implicit splitter tree, then recurse per
//! bucket.
//!
//! `[start, end)` is sorted wrt the fused `(cmp, proj)` predicate;
//! relative order of equivalent elements is not preserved.

#[doc(hidden)]
pub mod base_case;
#[doc(hidden)]
pub mod classifier;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod sequential;

pub use config::SampleSortConfig;

use log::trace;
use rand::Rng;

use crate::projection::{fuse, identity};
use crate::{OutputRange, RandomAccessRange};

/// Sorts `[first, last)` wrt `fuse(cmp, proj)`.
///
/// # Precondition
///   - `[first, last)` represents valid positions in rng.
///
/// # Postcondition
///   - `[first, last)` is sorted under `fuse(cmp, proj)`. Relative order
///     of equivalent elements is NOT preserved.
///   - Complexity: O(n.log(n)) expected comparisons.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let mut arr = [5, 3, 1, 4, 2];
/// algo::sort_random_access(&mut arr, arr.start(), arr.end(), |x: &i32, y: &i32| x < y, |x: &i32| *x);
/// assert_eq!(arr, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_random_access<Range, Compare, Projection, K>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    cmp: Compare,
    proj: Projection,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
{
    sort_random_access_seeded(rng, first, last, cmp, proj, &mut rand::rng())
}

/// Same as [`sort_random_access`] but draws samplesort's splitter sample
/// from the caller-supplied RNG instead of a fresh thread-local one.
/// Exists so tests (and any caller that needs reproducible runs) can pin
/// down a seed; ordinary callers should use [`sort_random_access`].
pub fn sort_random_access_seeded<Range, Compare, Projection, K, R>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    cmp: Compare,
    proj: Projection,
    sampler: &mut R,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
    R: Rng,
{
    let fused = fuse(cmp, proj);
    let config = SampleSortConfig::default();
    trace!(
        "sort_random_access: n={}",
        rng.distance(first.clone(), last.clone())
    );
    let mut scratch = sequential::Scratch::new(config.max_buckets);
    sequential::sequential(rng, first, last, &fused, &config, sampler, &mut scratch);
}

/// Sorts `[first, last)` wrt comparator `cmp`, with an identity
/// projection.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let mut arr = [5, 3, 1, 4, 2];
/// algo::sort_random_access_by(&mut arr, arr.start(), arr.end(), |x: &i32, y: &i32| x < y);
/// assert_eq!(arr, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_random_access_by<Range, Compare>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    cmp: Compare,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Compare: Fn(&Range::Element, &Range::Element) -> bool,
    Range::Element: Clone,
{
    sort_random_access(rng, first, last, cmp, identity)
}

/// Sorts `[first, last)` by `Ord`.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let mut arr = [5, 3, 1, 4, 2];
/// algo::sort_random_access_default(&mut arr, arr.start(), arr.end());
/// assert_eq!(arr, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_random_access_default<Range>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Range::Element: Ord + Clone,
{
    sort_random_access_by(rng, first, last, |a: &Range::Element, b: &Range::Element| {
        a < b
    })
}
