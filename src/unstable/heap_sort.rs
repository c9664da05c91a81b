use std::cmp::Ordering;

sort_impl!("heap_sort");

/// Sorts the slice. Unstable, O(n * log(n)) regardless of input order.
pub fn sort<T: Ord>(data: &mut [T]) {
    heap_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    heap_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn heap_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // The heap is a max-heap: children are never greater than their parents.
    fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        loop {
            let left = 2 * node + 1;
            let right = 2 * node + 2;

            // Pick the greater child.
            let child = if right < v.len() && is_less(&v[left], &v[right]) {
                right
            } else {
                left
            };

            if child >= v.len() || !is_less(&v[node], &v[child]) {
                break;
            }

            v.swap(node, child);
            node = child;
        }
    }

    let len = v.len();

    // Build the heap in linear time, leaves are already valid sub-heaps.
    for i in (0..len / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop the maximum into the sorted suffix and restore the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}
