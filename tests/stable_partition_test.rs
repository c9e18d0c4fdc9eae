// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

#[cfg(test)]
pub mod tests {
    use rng::infix::*;
    use slabsort::*;

    #[test]
    fn stable_partition_positions() {
        let mut arr = [1, 2, 3, 4, 5, 6, 7, 8];
        let start = arr.start();
        let end = arr.end();
        let mid = algo::stable_partition(&mut arr, start, end, |x: &i32| x % 2 == 0);
        assert_eq!(&arr[..mid], &[2, 4, 6, 8]);
        assert_eq!(&arr[mid..], &[1, 3, 5, 7]);
    }

    #[test]
    fn whole_range_rng_form() {
        let mut v = vec![1, 2, 3, 4, 5, 6];
        let mid = rng::stable_partition(&mut v, |x: &i32| x % 2 == 0);
        assert_eq!(&v[..mid], &[2, 4, 6]);
        assert_eq!(&v[mid..], &[1, 3, 5]);
    }

    #[test]
    fn infix_form() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        let mid = v.stable_partition(|c: &char| matches!(c, 'a' | 'c'));
        assert_eq!(&v[..mid], &['a', 'c']);
        assert_eq!(&v[mid..], &['b', 'd']);
    }

    #[test]
    fn preserves_relative_order_of_duplicated_keys() {
        let mut v = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        let mid = rng::stable_partition(&mut v, |x: &(i32, char)| x.0 == 1);
        assert_eq!(&v[..mid], &[(1, 'a'), (1, 'c'), (1, 'e')]);
        assert_eq!(&v[mid..], &[(0, 'b'), (0, 'd')]);
    }
}
