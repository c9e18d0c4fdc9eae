// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

use crate::util::{put_at, take_at};
use crate::{BidirectionalRange, ForwardRange, InputRange, OutputRange, SemiOutputRange};

use super::rotate;

/// Returns true if range is partitioned wrt pred, otherwise false.
///
/// # Precondition
///   - `[start, end)` reperesents valid position in rng.
///
/// # Postcondition
///   - Returns true if rng at `[start, end)` is partitioned wrt pred. i.e.,
///     There should be NO position `i` and `j` in `[start, end)` such that
///     i comes before j and
///     `pred(rng.at(&i)) == false && pred(rng.at(&j)) == true`.
///   - Otherwise, returns false.
///   - Complexity: O(n). At most n applications of pred.
///
/// Where n is number of elements in `[start, end)`.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let arr = [1, 3, 5, 2, 4];
/// assert!(algo::is_partitioned(&arr, arr.start(), arr.end(), |x| x % 2 == 1));
/// ```
pub fn is_partitioned<Range, Predicate>(
    rng: &Range,
    mut start: Range::Position,
    end: Range::Position,
    pred: Predicate,
) -> bool
where
    Range: InputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    while start != end {
        if !pred(rng.at(&start)) {
            break;
        }
        start = rng.after(start);
    }

    while start != end {
        if pred(rng.at(&start)) {
            return false;
        }
        start = rng.after(start);
    }

    true
}

/// Returns the first position in `[start, end)` for which pred is false,
/// given that `[start, end)` is already partitioned wrt pred.
///
/// # Precondition
///   - `[start, end)` reperesents valid position in rng.
///   - `[start, end)` is partitioned wrt pred.
///
/// # Postcondition
///   - Returns position of first element in `[start, end)` for which pred is
///     false. Returns end if no such element exists.
///   - Complexity: O(log n) applications of pred. If rng is not a
///     RandomAccessRange, then number of position increment is O(n).
///
/// Where n is number of elements in `[start, end)`.
pub fn partition_point<Range, Predicate>(
    rng: &Range,
    mut start: Range::Position,
    end: Range::Position,
    pred: Predicate,
) -> Range::Position
where
    Range: ForwardRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    let mut len = rng.distance(start.clone(), end);
    while len > 0 {
        let half = len / 2;
        let mut mid = start.clone();
        for _ in 0..half {
            mid = rng.after(mid);
        }
        if pred(rng.at(&mid)) {
            start = rng.after(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    start
}

/// Attempts the buffer-assisted single pass: streams every predicate-true
/// element to the front of `[first, last)` in place, and every
/// predicate-false element into a side buffer sized exactly once for the
/// whole range, then copies the buffer back after the compacted trues.
///
/// Returns `None` without touching `rng` if the one allocation attempt for
/// the scratch buffer fails, so the caller can fall back to the in-place
/// recursive path.
fn try_stable_partition_buffered<Range, Predicate>(
    rng: &mut Range,
    mut cur: Range::Position,
    last: Range::Position,
    n: usize,
    predicate: &Predicate,
) -> Option<Range::Position>
where
    Range: ForwardRange + OutputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    let mut buffer: Vec<Range::Element> = Vec::new();
    buffer.try_reserve_exact(n).ok()?;

    let mut write = cur.clone();
    while cur != last {
        if predicate(rng.at(&cur)) {
            if write != cur {
                // SAFETY: `cur`'s value is moved straight into `write`'s
                // slot below, so it is read and overwritten exactly once.
                let value = unsafe { take_at(rng, &cur) };
                unsafe { put_at(rng, &write, value) };
            }
            write = rng.after(write);
        } else {
            // SAFETY: buffer owns the value from here on; the slot at
            // `cur` is refilled from this same buffer in the loop below.
            buffer.push(unsafe { take_at(rng, &cur) });
        }
        cur = rng.after(cur);
    }

    let mid = write.clone();
    for value in buffer {
        // SAFETY: every slot from `mid` to `last` was vacated by the loop
        // above (either moved into an earlier `write` slot or into this
        // buffer) and each is refilled exactly once, in order.
        unsafe { put_at(rng, &write, value) };
        write = rng.after(write);
    }
    Some(mid)
}

fn stable_partition_impl<Range, Predicate>(
    rng: &mut Range,
    mut first: Range::Position,
    mut last: Range::Position,
    mut n: usize,
    predicate: &Predicate,
) -> Range::Position
where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    while n > 0 && predicate(rng.at(&first)) {
        first = rng.after(first);
        n -= 1;
    }
    if n == 0 {
        return first;
    }
    while n > 0 {
        let prev = rng.before(last.clone());
        if predicate(rng.at(&prev)) {
            break;
        }
        last = prev;
        n -= 1;
    }
    if n == 0 {
        return last;
    }

    if let Some(mid) = try_stable_partition_buffered(rng, first.clone(), last.clone(), n, predicate)
    {
        return mid;
    }

    let half = n / 2;
    let mut mid = first.clone();
    for _ in 0..half {
        mid = rng.after(mid);
    }
    let false_front = stable_partition_impl(rng, first, mid.clone(), half, predicate);
    let false_back = stable_partition_impl(rng, mid.clone(), last, n - half, predicate);
    rotate::rotate(rng, false_front, mid, false_back)
}

/// Stably partitions `[first, last)` wrt pred: all elements for which pred
/// is true come before all elements for which it is false, and the
/// relative order within each group is preserved.
///
/// # Precondition
///   - `[first, last)` reperesents valid position in rng.
///
/// # Postcondition
///   - Reorders rng at `[first, last)` such that all elements satisfying
///     pred come before all elements that don't, preserving relative order
///     within each group.
///   - Returns the position of the first element for which pred is false
///     (i.e. the boundary between the two groups).
///   - Complexity: attempts a single allocation sized to the number of
///     elements in `[first, last)`; when it succeeds the whole range is
///     partitioned in one linear pass. When it fails, falls back to a
///     recursive divide-and-rotate scheme taking O(n log n) swaps and no
///     allocation.
///
/// # Example
/// ```rust
/// use slabsort::*;
///
/// let mut arr = [1, 3, 5, 2, 4];
/// algo::stable_partition(&mut arr, arr.start(), arr.end(), |x: &i32| x % 2 == 1);
/// assert_eq!(arr, [1, 3, 5, 2, 4]);
/// ```
pub fn stable_partition<Range, Predicate>(
    rng: &mut Range,
    first: Range::Position,
    last: Range::Position,
    predicate: Predicate,
) -> Range::Position
where
    Range: BidirectionalRange + OutputRange + ?Sized,
    Predicate: Fn(&Range::Element) -> bool,
{
    let n = rng.distance(first.clone(), last.clone());
    stable_partition_impl(rng, first, last, n, &predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputRange;

    #[test]
    fn stable_partition_preserves_order_within_groups() {
        let mut arr = [1, 2, 3, 4, 5, 6, 7, 8];
        let mid = stable_partition(&mut arr, arr.start(), arr.end(), |x: &i32| x % 2 == 0);
        assert_eq!(&arr[..mid], &[2, 4, 6, 8]);
        assert_eq!(&arr[mid..], &[1, 3, 5, 7]);
    }

    #[test]
    fn stable_partition_all_true() {
        let mut arr = [2, 4, 6];
        let mid = stable_partition(&mut arr, arr.start(), arr.end(), |x: &i32| x % 2 == 0);
        assert_eq!(mid, 3);
        assert_eq!(arr, [2, 4, 6]);
    }

    #[test]
    fn stable_partition_all_false() {
        let mut arr = [1, 3, 5];
        let mid = stable_partition(&mut arr, arr.start(), arr.end(), |x: &i32| x % 2 == 0);
        assert_eq!(mid, 0);
        assert_eq!(arr, [1, 3, 5]);
    }

    #[test]
    fn stable_partition_empty_range() {
        let mut arr: [i32; 0] = [];
        let mid = stable_partition(&mut arr, arr.start(), arr.end(), |x: &i32| x % 2 == 0);
        assert_eq!(mid, 0);
    }

    #[test]
    fn stable_partition_small_sizes() {
        for len in 0..8usize {
            let mut v: Vec<i32> = (0..len as i32).collect();
            let expected_true: Vec<i32> = v.iter().copied().filter(|x| x % 3 == 0).collect();
            let expected_false: Vec<i32> = v.iter().copied().filter(|x| x % 3 != 0).collect();
            let mid = stable_partition(&mut v, v.start(), v.end(), |x: &i32| x % 3 == 0);
            assert_eq!(&v[..mid], &expected_true[..]);
            assert_eq!(&v[mid..], &expected_false[..]);
        }
    }

    #[test]
    fn stable_partition_drops_strings_exactly_once() {
        let mut v: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let before: std::collections::HashSet<_> = v.iter().cloned().collect();
        stable_partition(&mut v, v.start(), v.end(), |s: &String| {
            s.parse::<i32>().unwrap() % 2 == 0
        });
        let after: std::collections::HashSet<_> = v.into_iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn partition_point_finds_boundary() {
        let arr = [2, 4, 6, 8, 1, 3, 5];
        let pp = partition_point(&arr, arr.start(), arr.end(), |x: &i32| x % 2 == 0);
        assert_eq!(pp, 4);
    }
}
