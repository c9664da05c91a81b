use std::cmp::Ordering;

sort_impl!("selection_sort");

/// Sorts the slice. Unstable, O(n^2) regardless of input order.
pub fn sort<T: Ord>(data: &mut [T]) {
    selection_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    selection_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        v.swap(i, min);
    }
}
