// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

use crate::projection::Fused;
use crate::{RandomAccessRange, SemiOutputRange};

/// Swap-based insertion sort, the base case every samplesort partition
/// bottoms out to once its span is at or below
/// `2 * config.base_case_size`.
///
/// Each new element is first probed against the current minimum (at
/// `start`): if it belongs there, the whole sorted prefix is shifted
/// right in one unconditional pass instead of spending a comparison at
/// every step of the backward scan, which is the common case for
/// presorted or reverse-sorted input.
pub fn insertion_sort<Range, Compare, Projection, K>(
    rng: &mut Range,
    start: Range::Position,
    end: Range::Position,
    fused: &Fused<Compare, Projection>,
) where
    Range: RandomAccessRange + SemiOutputRange + ?Sized,
    Compare: Fn(&K, &K) -> bool,
    Projection: Fn(&Range::Element) -> K,
{
    if start == end {
        return;
    }
    let mut i = rng.after(start.clone());
    while i != end {
        let mut j = i.clone();
        if fused.call(rng.at(&i), rng.at(&start)) {
            while j != start {
                let prev = rng.before(j.clone());
                rng.swap_at(&prev, &j);
                j = prev;
            }
        } else {
            while j != start {
                let prev = rng.before(j.clone());
                if !fused.call(rng.at(&j), rng.at(&prev)) {
                    break;
                }
                rng.swap_at(&prev, &j);
                j = prev;
            }
        }
        i = rng.after(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::fuse;
    use crate::InputRange;

    #[test]
    fn sorts_small_array() {
        let mut arr = [5, 3, 1, 4, 2];
        let fused = fuse(|a: &i32, b: &i32| a < b, |x: &i32| *x);
        insertion_sort(&mut arr, arr.start(), arr.end(), &fused);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut arr = [(1, 'a'), (1, 'b'), (0, 'c')];
        let fused = fuse(|a: &i32, b: &i32| a < b, |x: &(i32, char)| x.0);
        insertion_sort(&mut arr, arr.start(), arr.end(), &fused);
        assert_eq!(arr, [(0, 'c'), (1, 'a'), (1, 'b')]);
    }
}
