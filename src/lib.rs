//! Testbed for five classic comparison sorts and the benchmark harness used
//! to compare them across input sizes and presortedness levels.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Generates the `SortImpl` wrapper for a sort module. Expects the invoking
/// module to define free functions `sort` and `sort_by`.
#[macro_export]
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod bench;
pub mod patterns;
pub mod report;
pub mod stable;
pub mod tests;
pub mod unstable;

#[doc(hidden)]
pub use paste;
