// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

//! Unstable sort for bidirectional ranges: a cheap presortedness probe
//! via melsort, falling back to median partitioning with melsort retried
//! on each half, recursing only when melsort's list budget is
//! exhausted.

#[doc(hidden)]
pub mod melsort;

use log::{debug, trace};

use crate::algo;
use crate::error::SortError;
use crate::list::NodePool;
use crate::projection::{fuse, Fused};
use crate::util::{put_at, take_at};
use crate::{BidirectionalRange, OutputRange};

/// Sorts `[first, last)` wrt `fuse(cmp, proj)`.
///
/// # Precondition
///   - `[first, last)` represents valid positions in rng.
///
/// # Postcondition
///   - `[first, last)` is sorted under `fuse(cmp, proj)`. No stability
///     guarantee.
///   - Memory: one pool of `distance(first, last)` nodes plus a scratch
///     vector of positions of the same size.
///
/// # Errors
/// Returns [`SortError::PoolAllocation`] if the node pool slabsort needs
/// for melsort could not be allocated. `[first, last)` is left untouched
/// in that case.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let mut arr = [5, 3, 1, 4, 2];
/// algo::sort_bidirectional(&mut arr, arr.start(), arr.end(), |x: &i32, y: &i32| x < y, |x: &i32| *x).unwrap();
/// assert_eq!(arr, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_bidirectional<Range, Compare, Projection, K>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    cmp: Compare,
    proj: Projection,
) -> Result<(), SortError>
where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
{
    let n = rng.distance(first.clone(), last.clone());
    if n < 2 {
        return Ok(());
    }
    let fused = fuse(cmp, proj);
    trace!("sort_bidirectional: allocating node pool of {n} nodes");
    let mut pool: NodePool<Range::Position> =
        NodePool::try_new(n).map_err(|source| SortError::PoolAllocation {
            requested: n,
            source,
        })?;

    let probe_budget = 2 * (64 - (n as u64).leading_zeros() as usize).max(1);
    match melsort::melsort(rng, first.clone(), last.clone(), &fused, &mut pool, probe_budget) {
        Some(order) => apply_position_order(rng, first, last, order),
        None => {
            debug!("sort_bidirectional: presortedness probe failed, budget={probe_budget}, n={n}");
            slabsort_impl(rng, first, last, n, 2, 2, &mut pool, &fused);
        }
    }
    Ok(())
}

/// Sorts `[first, last)` wrt comparator `cmp`, with an identity
/// projection.
pub fn sort_bidirectional_by<Range, Compare>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    cmp: Compare,
) -> Result<(), SortError>
where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Compare: Fn(&Range::Element, &Range::Element) -> bool,
    Range::Element: Clone,
{
    sort_bidirectional(rng, first, last, cmp, crate::projection::identity)
}

/// Sorts `[first, last)` by `Ord`.
pub fn sort_bidirectional_default<Range>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
) -> Result<(), SortError>
where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Range::Element: Ord + Clone,
{
    sort_bidirectional_by(rng, first, last, |a: &Range::Element, b: &Range::Element| {
        a < b
    })
}

fn apply_position_order<Range>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    order: Vec<Range::Position>,
) where
    Range: BidirectionalRange + OutputRange + ?Sized,
{
    let mut values: Vec<Range::Element> = Vec::with_capacity(order.len());
    for p in &order {
        // SAFETY: `order` is a permutation of every position in
        // `[first, last)`; the write loop below refills each of those
        // same slots exactly once.
        values.push(unsafe { take_at(rng, p) });
    }
    let mut write = first;
    for value in values {
        unsafe { put_at(rng, &write, value) };
        write = rng.after(write);
    }
    debug_assert_eq!(write, last);
}

fn slabsort_impl<Range, Compare, Projection, K>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    n: usize,
    p0: usize,
    p: usize,
    pool: &mut NodePool<Range::Position>,
    fused: &Fused<Compare, Projection>,
) where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
{
    if n < 2 {
        return;
    }

    let mut positions: Vec<Range::Position> = Vec::with_capacity(n);
    let mut cur = first.clone();
    while cur != last {
        positions.push(cur.clone());
        cur = rng.after(cur);
    }
    let mid = n / 2;
    positions.select_nth_unstable_by(mid, |a, b| {
        if fused.call(rng.at(a), rng.at(b)) {
            std::cmp::Ordering::Less
        } else if fused.call(rng.at(b), rng.at(a)) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    });
    let pivot_key = fused.project(rng.at(&positions[mid]));

    let split = algo::stable_partition(rng, first.clone(), last.clone(), |e: &Range::Element| {
        fused.compare_keys(&fused.project(e), &pivot_key)
    });

    let left_size = rng.distance(first.clone(), split.clone());
    let right_size = rng.distance(split.clone(), last.clone());

    if p > 2 {
        slabsort_impl(rng, first, split.clone(), left_size, p0, p / 2, pool, fused);
        slabsort_impl(rng, split, last, right_size, p0, p / 2, pool, fused);
    } else {
        attempt_half(rng, first, split.clone(), left_size, p0, pool, fused);
        attempt_half(rng, split, last, right_size, p0, pool, fused);
    }
}

fn attempt_half<Range, Compare, Projection, K>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    n: usize,
    p0: usize,
    pool: &mut NodePool<Range::Position>,
    fused: &Fused<Compare, Projection>,
) where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
{
    if n < 2 {
        return;
    }
    match melsort::melsort(rng, first.clone(), last.clone(), fused, pool, p0) {
        Some(order) => apply_position_order(rng, first, last, order),
        None => {
            let next_budget = p0.saturating_mul(p0);
            debug!("sort_bidirectional: melsort failed on subrange of size {n}, budget {p0} -> {next_budget}");
            slabsort_impl(rng, first, last, n, next_budget, next_budget, pool, fused);
        }
    }
}
