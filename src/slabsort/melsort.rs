// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

use crate::algo;
use crate::list::{IntrusiveList, NodePool};
use crate::projection::{fuse, Fused};
use crate::BidirectionalRange;

/// Runs melsort over `[first, last)`: grows a bounded number of
/// "encroaching lists" -- each internally sorted and extendable from
/// either end in O(1) -- then merges them.
///
/// A list's head is its running minimum and its tail its running
/// maximum, both O(1) to read, which is what lets each new element be
/// placed (or start a new list) without ever touching more than one
/// list's boundary.
///
/// This port keeps list nodes holding `Range::Position` handles for the
/// algorithm's entire lifetime rather than switching a node's payload
/// from "position" to "moved-out value" partway through (the scheme the
/// component this models uses to avoid allocating twice): the final
/// merged list is flattened into a position vector here, and the caller
/// performs the actual element moves in one pass over that order. This
/// sidesteps needing an enum-tagged node payload for a one-time switch,
/// at no extra asymptotic cost.
///
/// Returns the positions of `[first, last)` in sorted order if the
/// search finished within `budget` lists, or `None` if the budget would
/// have been exceeded -- in which case the source range was never
/// touched, only positions were read.
pub fn melsort<Range, Compare, Projection, K>(
    rng: &Range,
    first: Range::Position,
    last: Range::Position,
    fused: &Fused<Compare, Projection>,
    pool: &mut NodePool<Range::Position>,
    budget: usize,
) -> Option<Vec<Range::Position>>
where
    Range: BidirectionalRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
{
    if first == last {
        return Some(Vec::new());
    }
    if budget == 0 {
        return None;
    }

    let less = |a: &Range::Position, b: &Range::Position| fused.call(rng.at(a), rng.at(b));

    let mut lists: Vec<IntrusiveList<Range::Position>> = Vec::new();
    let mut seed_list = IntrusiveList::new();
    seed_list.push_back(pool, first.clone());
    lists.push(seed_list);

    let mut cur = rng.after(first);
    let mut exhausted_budget = false;

    while cur != last {
        let x = cur.clone();
        let n = lists.len();
        let last_list_back = lists[n - 1].back().unwrap();
        let tail = pool.value(last_list_back).clone();

        if !less(&x, &tail) {
            // x belongs to the tails (bigger elements): search every list but
            // the last (already known to qualify) by its tail, in reverse
            // order since tails run nonincreasing across `lists`.
            let idx = algo::partition_point(&lists, 0, n - 1, |l: &IntrusiveList<Range::Position>| {
                less(&x, pool.value(l.back().unwrap()))
            });
            lists[idx].push_back(pool, x);
        } else {
            let last_list_front = lists[n - 1].front().unwrap();
            let head = pool.value(last_list_front).clone();
            if !less(&head, &x) {
                // x belongs to the heads (smaller elements): heads run
                // nondecreasing across `lists`, so search with the ordinary
                // comparator direction.
                let idx = algo::partition_point(&lists, 0, n - 1, |l: &IntrusiveList<Range::Position>| {
                    less(pool.value(l.front().unwrap()), &x)
                });
                lists[idx].push_front(pool, x);
            } else {
                // x fits none of the existing lists' ranges: open a new one.
                let mut l = IntrusiveList::new();
                l.push_back(pool, x);
                lists.push(l);
            }
        }
        if lists.len() >= budget {
            exhausted_budget = true;
            break;
        }
        cur = rng.after(cur);
    }

    if exhausted_budget {
        for l in lists.iter_mut() {
            l.clear(pool);
        }
        return None;
    }

    let pos_fused = fuse(less, |p: &Range::Position| p.clone());
    while lists.len() > 1 {
        let mut merged = Vec::with_capacity(lists.len().div_ceil(2));
        let mut it = lists.into_iter();
        loop {
            match (it.next(), it.next()) {
                (Some(mut a), Some(mut b)) => {
                    a.merge_sorted(pool, &mut b, &pos_fused);
                    merged.push(a);
                }
                (Some(a), None) => merged.push(a),
                (None, _) => break,
            }
        }
        lists = merged;
    }

    let mut final_list = lists.into_iter().next().unwrap_or_default();
    let mut out = Vec::new();
    let mut node = final_list.front();
    while let Some(idx) = node {
        out.push(final_list.value(pool, idx).clone());
        node = final_list.next(pool, idx);
    }
    final_list.clear(pool);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::fuse as fuse_fn;
    use crate::InputRange;

    #[test]
    fn sorts_within_budget() {
        let arr = [5, 3, 1, 4, 2];
        let fused = fuse_fn(|a: &i32, b: &i32| a < b, |x: &i32| *x);
        let mut pool: NodePool<usize> = NodePool::new(arr.len());
        let order = melsort(&arr, arr.start(), arr.end(), &fused, &mut pool, 5).unwrap();
        let sorted: Vec<i32> = order.iter().map(|&p| arr[p]).collect();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn fails_cleanly_when_budget_too_small() {
        let arr = [9, 1, 8, 2, 7, 3, 6, 4];
        let fused = fuse_fn(|a: &i32, b: &i32| a < b, |x: &i32| *x);
        let mut pool: NodePool<usize> = NodePool::new(arr.len());
        let result = melsort(&arr, arr.start(), arr.end(), &fused, &mut pool, 1);
        assert!(result.is_none());
        assert_eq!(pool.occupied(), 0);
    }

    #[test]
    fn succeeds_on_already_sorted_input_with_small_budget() {
        let arr: Vec<i32> = (0..50).collect();
        let fused = fuse_fn(|a: &i32, b: &i32| a < b, |x: &i32| *x);
        let mut pool: NodePool<usize> = NodePool::new(arr.len());
        let order = melsort(&arr, arr.start(), arr.end(), &fused, &mut pool, 2).unwrap();
        let sorted: Vec<i32> = order.iter().map(|&p| arr[p]).collect();
        assert_eq!(sorted, arr);
    }
}
