use std::cmp::Ordering;

sort_impl!("quick_sort");

/// Sorts the slice.
///
/// Unstable, O(n * log(n)) on average. Uses a Lomuto partition with the last
/// element as pivot, so already-sorted and reversed inputs hit the known
/// O(n^2) worst case. That behavior is part of what the harness measures and
/// is kept on purpose.
pub fn sort<T: Ord>(data: &mut [T]) {
    quick_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    quick_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quick_sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Recurse into the shorter partition and loop on the longer one, which
    // bounds the stack depth at O(log(n)) even for the quadratic inputs.
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = partition(v, is_less);

        let (left, rest) = v.split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, is_less);
            v = right;
        } else {
            quick_sort(right, is_less);
            v = left;
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final
/// position; everything before it is less than the pivot.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if is_less(&v[i], &v[pivot]) {
            v.swap(i, store);
            store += 1;
        }
    }

    v.swap(store, pivot);
    store
}
