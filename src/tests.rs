//! Shared helpers for the integration tests. Everything observable is tested
//! through `tests/main.rs`, which instantiates [`instantiate_sort_tests`]
//! once per sort implementation.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::{patterns, Sort};

pub const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 8, 10, 16, 17, 24, 33, 50, 100, 200, 500, 1_024, 2_048,
];

/// Sorts `data` with `S` and checks the result against the standard library
/// sort: same elements, non-decreasing order. Exercises both the `Ord` entry
/// point and the comparator entry point.
pub fn check_sort<S: Sort, T: Ord + Clone + Debug>(data: Vec<T>) {
    let len = data.len();
    let seed = patterns::random_init_seed();

    let mut expected = data.clone();
    expected.sort();

    let mut by_ord = data.clone();
    S::sort(&mut by_ord);
    assert_eq!(
        by_ord,
        expected,
        "{}::sort failed. len: {len}, seed: {seed}",
        S::name()
    );

    let mut by_cmp = data;
    S::sort_by(&mut by_cmp, |a, b| a.cmp(b));
    assert_eq!(
        by_cmp,
        expected,
        "{}::sort_by failed. len: {len}, seed: {seed}",
        S::name()
    );
}

/// Runs [`check_sort`] over every test size for one pattern.
pub fn check_pattern<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_size in TEST_SIZES {
        check_sort::<S, i32>(pattern_fn(test_size));
    }
}

/// Sorting twice must give the same result as sorting once.
pub fn check_idempotent<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut data = patterns::random(test_size);
        S::sort(&mut data);
        let once = data.clone();
        S::sort(&mut data);
        assert_eq!(data, once, "{} is not idempotent", S::name());
    }
}

/// Key plus a payload the comparator never sees, to observe whether equal
/// keys keep their relative order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueWithExtra {
    pub key: i32,
    pub extra: i32,
}

pub fn cmp_key(a: &ValueWithExtra, b: &ValueWithExtra) -> Ordering {
    a.key.cmp(&b.key)
}

/// Checks stability by comparing against the standard library's stable sort
/// on duplicate-heavy keys. Only meaningful for the stable sorts.
pub fn check_stability<S: Sort>() {
    for test_size in TEST_SIZES {
        let key_range = 0..(test_size / 10).max(1) as i32;
        let data: Vec<ValueWithExtra> = patterns::random_uniform(test_size, key_range)
            .into_iter()
            .enumerate()
            .map(|(i, key)| ValueWithExtra {
                key,
                extra: i as i32,
            })
            .collect();

        let mut expected = data.clone();
        expected.sort_by(cmp_key);

        let mut sorted = data;
        S::sort_by(&mut sorted, cmp_key);

        assert_eq!(
            sorted,
            expected,
            "{} is not stable. len: {test_size}, seed: {}",
            S::name(),
            patterns::random_init_seed()
        );
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_pattern_tests {
    ($sort_impl:ty => $($pattern:ident),+ $(,)?) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<pattern_ $pattern>]() {
                    $crate::tests::check_pattern::<$sort_impl>($crate::patterns::$pattern);
                }
            }
        )+
    };
}

/// Instantiates the standard test battery for one sort implementation.
/// Invoke inside a dedicated module, once per sort.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_pattern_tests!(
            $sort_impl => random, ascending, descending, all_equal
        );

        #[test]
        fn basic() {
            $crate::tests::check_sort::<$sort_impl, i32>(vec![]);
            $crate::tests::check_sort::<$sort_impl, i32>(vec![66]);
            $crate::tests::check_sort::<$sort_impl, i32>(vec![2, 3]);
            $crate::tests::check_sort::<$sort_impl, i32>(vec![3, 2]);
            $crate::tests::check_sort::<$sort_impl, i32>(vec![2, 3, 99, 6]);
            $crate::tests::check_sort::<$sort_impl, i32>(vec![15, -1, 3, -1, -3, -1, 7]);
            $crate::tests::check_sort::<$sort_impl, String>(
                ["lumber", "c", "ant", "ant", "zebra"]
                    .map(String::from)
                    .to_vec(),
            );
        }

        #[test]
        fn random_duplicates() {
            $crate::tests::check_pattern::<$sort_impl>(|test_size| {
                $crate::patterns::random_uniform(
                    test_size,
                    0..(test_size / 10).max(1) as i32,
                )
            });
        }

        #[test]
        fn presorted_levels() {
            for presortedness in [0.0, 0.25, 0.5, 0.75, 1.0] {
                $crate::tests::check_pattern::<$sort_impl>(|test_size| {
                    $crate::patterns::presorted(test_size, presortedness)
                });
            }
        }

        #[test]
        fn idempotent() {
            $crate::tests::check_idempotent::<$sort_impl>();
        }
    };
}
