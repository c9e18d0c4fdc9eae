// SPDX-License-Identifier: MIT
// Copyright (c) 2024 Rishabh Dwivedi (rishabhdwivedi17@gmail.com)

#[cfg(test)]
pub mod tests {
    use rng::infix::*;
    use slabsort::*;

    #[test]
    fn sort_random_access_positions() {
        let mut arr = [5, 3, 1, 4, 2];
        let start = arr.start();
        let end = arr.end();
        algo::sort_random_access(&mut arr, start, end, |a: &i32, b: &i32| a < b, |x: &i32| *x);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_random_access_default_is_ord_based() {
        let mut arr = [5, 3, 1, 4, 2];
        let start = arr.start();
        let end = arr.end();
        algo::sort_random_access_default(&mut arr, start, end);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn whole_range_rng_form() {
        let mut v = vec![5, 3, 1, 4, 2];
        rng::sort_random_access_default(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn infix_form() {
        let mut v = vec![5, 3, 1, 4, 2];
        v.sort_random_access_by(|a: &i32, b: &i32| a < b);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_by_projection_on_tuples() {
        let mut v = vec![(3, "c"), (1, "a"), (2, "b")];
        let start = v.start();
        let end = v.end();
        algo::sort_random_access(&mut v, start, end, |a: &i32, b: &i32| a < b, |x: &(i32, &str)| x.0);
        assert_eq!(v, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let mut empty: Vec<i32> = vec![];
        rng::sort_random_access_default(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        rng::sort_random_access_default(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn large_input_matches_std_sort() {
        let input: Vec<i32> = (0..5_000i64).map(|i| ((i * 48_271) % 9_973) as i32).collect();
        let mut got = input.clone();
        rng::sort_random_access_default(&mut got);
        let mut expected = input;
        expected.sort();
        assert_eq!(got, expected);
    }
}
