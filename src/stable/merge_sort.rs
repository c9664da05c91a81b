use std::cmp::Ordering;
use std::mem::size_of;
use std::ptr;

sort_impl!("merge_sort");

/// Sorts the slice.
///
/// Stable and O(n * log(n)) regardless of input order; allocates temporary
/// storage half the size of `data`.
pub fn sort<T: Ord>(data: &mut [T]) {
    merge_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    merge_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The merge below only ever copies the shorter run into the buffer, so
    // half the slice length is enough. The buffer's len stays 0, it is used
    // as raw scratch space.
    let mut buf = Vec::with_capacity(len / 2);
    sort_halves(v, buf.as_mut_ptr(), is_less);
}

fn sort_halves<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_halves(&mut v[..mid], buf, is_less);
    sort_halves(&mut v[mid..], buf, is_less);

    // SAFETY: 1 <= mid < len, so both runs are non-empty, and `buf` holds
    // at least len / 2 elements which covers the shorter run. T is not a
    // ZST, checked by the caller.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place, with `buf` as
/// scratch space.
///
/// # Safety
///
/// `mid` must be in bounds with both runs non-empty, `buf` must have room
/// for the shorter run, and `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v = v.as_mut_ptr();

    // SAFETY: mid and len must be in-bounds of v.
    let (v_mid, v_end) = unsafe { (v.add(mid), v.add(len)) };

    // Only the shorter run leaves `v`: it is copied into `buf` and then
    // merged back against the longer run, walking both with one pointer
    // each. `hole` always spans the not-yet-merged part of the copied run.
    // Dropping it writes that range back into the gap left in `v`, so the
    // slice is a permutation of its input again whether the merge finishes
    // normally or unwinds out of a panicking `is_less`. The same drop also
    // handles the case where the longer run runs out first and a tail of
    // the copied run is still pending.
    let mut hole;

    if mid <= len - mid {
        // Left run is the shorter one: stash it and merge front to back.

        // SAFETY: buf holds at least `mid` elements.
        unsafe {
            ptr::copy_nonoverlapping(v, buf, mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(mid),
                dest: v,
            };
        }

        // All three cursors start at the front of their runs.
        let left = &mut hole.start;
        let mut right = v_mid;
        let out = &mut hole.dest;

        while *left < hole.end && right < v_end {
            // Take the smaller element; on ties take from the left run,
            // which is what keeps the sort stable.

            // SAFETY: all three cursors stay inside their runs, checked by
            // the loop condition.
            unsafe {
                let is_l = is_less(&*right, &**left);
                let to_copy = if is_l { right } else { *left };
                ptr::copy_nonoverlapping(to_copy, *out, 1);
                *out = out.add(1);
                right = right.add(is_l as usize);
                *left = left.add(!is_l as usize);
            }
        }
    } else {
        // Right run is the shorter one: stash it and merge back to front.

        // SAFETY: buf holds at least `len - mid` elements.
        unsafe {
            ptr::copy_nonoverlapping(v_mid, buf, len - mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(len - mid),
                dest: v_mid,
            };
        }

        // All three cursors start one past the end of their runs.
        let left = &mut hole.dest;
        let right = &mut hole.end;
        let mut out = v_end;

        while v < *left && buf < *right {
            // Take the larger element; on ties take from the right run,
            // which is what keeps the sort stable.

            // SAFETY: all three cursors stay inside their runs, checked by
            // the loop condition.
            unsafe {
                let is_l = is_less(&*right.sub(1), &*left.sub(1));
                *left = left.sub(is_l as usize);
                *right = right.sub(!is_l as usize);
                let to_copy = if is_l { *left } else { *right };
                out = out.sub(1);
                ptr::copy_nonoverlapping(to_copy, out, 1);
            }
        }
    }
    // `hole` drops here and copies back whatever is left of the stashed run.

    // Copies `start..end` into `dest..` when dropped.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: start/end bound initialized elements of `buf`, dest
            // has room for them, and `T` is not a ZST.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}
