// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

use rand::Rng;

use crate::algo;
use crate::projection::Fused;
use crate::util::{put_at, take_at};
use crate::{OutputRange, RandomAccessRange, SemiOutputRange};

use super::base_case::insertion_sort;
use super::classifier::Classifier;
use super::config::SampleSortConfig;

/// Reusable scratch state for one top-level [`super::sort_random_access`]
/// call: the per-bucket buffers and the boundary-position buffer every
/// recursive classification step needs. Allocated once by the caller and
/// threaded through the whole recursion instead of allocating a fresh
/// `Vec<Vec<Element>>` at every recursive invocation -- recursion is
/// depth-first and each level fully drains its buckets before recursing
/// further, so reusing the same buffers across levels is safe and only
/// ever grows their capacity, never reallocates the outer `Vec` itself
/// once it reaches `max_buckets`.
pub struct Scratch<Element, Position> {
    buckets: Vec<Vec<Element>>,
    boundaries: Vec<Position>,
}

impl<Element, Position> Scratch<Element, Position> {
    pub fn new(max_buckets: usize) -> Self {
        Self {
            buckets: (0..max_buckets).map(|_| Vec::new()).collect(),
            boundaries: Vec::new(),
        }
    }

    fn buckets_mut(&mut self, bucket_count: usize) -> &mut [Vec<Element>] {
        while self.buckets.len() < bucket_count {
            self.buckets.push(Vec::new());
        }
        for bucket in &mut self.buckets[..bucket_count] {
            bucket.clear();
        }
        &mut self.buckets[..bucket_count]
    }
}

fn log_buckets(n: usize, max_buckets: usize) -> u32 {
    if n < 2 {
        return 0;
    }
    let max_log = (usize::BITS - 1 - max_buckets.max(2).leading_zeros()).max(1);
    let by_size = (usize::BITS - 1 - n.leading_zeros()) / 2;
    by_size.clamp(1, max_log)
}

fn oversampling_factor(n: usize) -> usize {
    if n < 2 {
        1
    } else {
        (((usize::BITS - 1 - n.leading_zeros()) as usize) / 4).max(1)
    }
}

/// Fisher-Yates shuffles the first `m` elements of `[first, last)` using
/// draws from the whole range, so the prefix becomes a uniform random
/// sample of the range without a separate reservoir.
fn sample_prefix<Range, R>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    m: usize,
    sampler: &mut R,
) where
    Range: RandomAccessRange + SemiOutputRange + ?Sized,
    R: Rng,
{
    let n = rng.distance(first.clone(), last);
    for i in 0..m.min(n) {
        let j = sampler.random_range(i..n);
        if j != i {
            let pi = rng.after_n(first.clone(), i);
            let pj = rng.after_n(first.clone(), j);
            rng.swap_at(&pi, &pj);
        }
    }
}

/// Recursively sorts `[first, last)` under `fused` by sampling splitters,
/// classifying every element into a bucket, and recursing per bucket.
pub fn sequential<Range, Compare, Projection, K, R>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    fused: &Fused<Compare, Projection>,
    config: &SampleSortConfig,
    sampler: &mut R,
    scratch: &mut Scratch<Range::Element, Range::Position>,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
    R: Rng,
{
    let n = rng.distance(first.clone(), last.clone());
    if n <= 2 * config.base_case_size {
        insertion_sort(rng, first, last, fused);
        return;
    }

    let log_b = log_buckets(n, config.max_buckets);
    let b = (1usize << log_b).max(2);
    let s = oversampling_factor(n);
    let m = (s * b).saturating_sub(1).min(n.saturating_sub(1)).max(1);

    sample_prefix(rng, first.clone(), last.clone(), m, sampler);
    let sample_end = rng.after_n(first.clone(), m);
    sequential(rng, first.clone(), sample_end.clone(), fused, config, sampler, scratch);

    let mut splitters: Vec<K> = Vec::new();
    {
        let mut pos = first.clone();
        let mut i = 0usize;
        while pos != sample_end {
            if (i + 1) % s == 0 {
                splitters.push(fused.project(rng.at(&pos)));
            }
            pos = rng.after(pos);
            i += 1;
        }
    }
    splitters.dedup_by(|a, b| !fused.compare_keys(b, a) && !fused.compare_keys(a, b));

    // A single surviving splitter cannot be trusted to make progress: our
    // classifier sends keys equal to the splitter into the same bucket as
    // keys strictly less than it (see `Classifier::classify`), so if the
    // splitter happens to equal the maximum key actually present in
    // `[first, last)`, naive classification would put everything in one
    // bucket and recurse forever. A true three-way split around the
    // splitter's key always makes progress instead.
    if splitters.len() <= 1 {
        partition_around_single_key(rng, first, last, fused, config, sampler, scratch);
        return;
    }

    let classifier = Classifier::new(splitters);
    let bucket_count = classifier.bucket_count();

    let buckets = scratch.buckets_mut(bucket_count);
    {
        let less = |a: &K, b: &K| fused.compare_keys(a, b);
        let mut pos = first.clone();
        while pos != last {
            let key = fused.project(rng.at(&pos));
            let bucket = classifier.classify(&key, &less);
            // SAFETY: the slot at `pos` is never read again before the
            // write-back loop below refills every slot exactly once, in
            // the same left-to-right order elements were taken out.
            let value = unsafe { take_at(rng, &pos) };
            buckets[bucket].push(value);
            pos = rng.after(pos);
        }
    }

    scratch.boundaries.clear();
    scratch.boundaries.push(first.clone());
    {
        let mut pos = first.clone();
        for bucket in &scratch.buckets[..bucket_count] {
            for _ in 0..bucket.len() {
                pos = rng.after(pos);
            }
            scratch.boundaries.push(pos.clone());
        }
    }

    {
        let mut write = first.clone();
        for bucket in scratch.buckets[..bucket_count].iter_mut() {
            for value in bucket.drain(..) {
                // SAFETY: every slot in `[first, last)` was vacated by
                // the classification loop above and is refilled exactly
                // once here, in the same order.
                unsafe { put_at(rng, &write, value) };
                write = rng.after(write);
            }
        }
    }

    for i in 0..bucket_count {
        let bstart = scratch.boundaries[i].clone();
        let bend = scratch.boundaries[i + 1].clone();
        let bucket_len = rng.distance(bstart.clone(), bend.clone());
        if bucket_len > 2 * config.base_case_size {
            sequential(rng, bstart, bend, fused, config, sampler, scratch);
        } else if bucket_len > 1 {
            insertion_sort(rng, bstart, bend, fused);
        }
    }
}

/// Degenerate-sample fallback: the splitter sample contained only one
/// distinct key. Three-way partitions around it instead of building a
/// one-bucket classifier that would make no progress.
fn partition_around_single_key<Range, Compare, Projection, K, R>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    fused: &Fused<Compare, Projection>,
    config: &SampleSortConfig,
    sampler: &mut R,
    scratch: &mut Scratch<Range::Element, Range::Position>,
) where
    Range: RandomAccessRange + OutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
    K: Clone,
    R: Rng,
{
    let pivot = fused.project(rng.at(&first));
    let less_mid = algo::stable_partition(rng, first.clone(), last.clone(), |e: &Range::Element| {
        fused.compare_keys(&fused.project(e), &pivot)
    });
    let equal_end = algo::stable_partition(rng, less_mid.clone(), last.clone(), |e: &Range::Element| {
        !fused.compare_keys(&pivot, &fused.project(e))
    });

    let less_len = rng.distance(first.clone(), less_mid.clone());
    let greater_len = rng.distance(equal_end.clone(), last.clone());

    if less_len > 2 * config.base_case_size {
        sequential(rng, first, less_mid, fused, config, sampler, scratch);
    } else if less_len > 1 {
        insertion_sort(rng, first, less_mid, fused);
    }
    if greater_len > 2 * config.base_case_size {
        sequential(rng, equal_end, last, fused, config, sampler, scratch);
    } else if greater_len > 1 {
        insertion_sort(rng, equal_end, last, fused);
    }
}
