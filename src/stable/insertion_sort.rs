use std::cmp::Ordering;

sort_impl!("insertion_sort");

/// Sorts the slice. Stable, O(n^2) worst case, O(n) on sorted input.
pub fn sort<T: Ord>(data: &mut [T]) {
    insertion_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    insertion_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Move v[i] leftward past every strictly greater element. Stopping at
        // the first non-greater element keeps equal elements in order.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
