use core::mem::ManuallyDrop;
use core::ptr;

/// Performs one gapped insertion sort pass over `v`.
///
/// After the pass every subsequence `v[k], v[k + gap], v[k + 2 * gap], ...` is sorted.
pub(crate) fn insertion_sort_gapped<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if gap == 0 || gap >= len {
        return;
    }

    let v_base = v.as_mut_ptr();
    for tail in gap..len {
        // SAFETY: gap <= tail < len, so every index visited by insert_tail_gapped is in-bounds.
        unsafe {
            insert_tail_gapped(v_base, tail, gap, is_less);
        }
    }
}

struct CopyOnDrop<T> {
    src: *const T,
    dst: *mut T,
}

impl<T> Drop for CopyOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the held element and `dst` to the current gap, which is valid
        // for a write of one element.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dst, 1);
        }
    }
}

/// Inserts `v_base[tail]` into the already gap-sorted chain `tail - gap, tail - 2 * gap, ...`.
///
/// # Safety
/// `gap >= 1`, `tail >= gap` and `v_base` must be valid and initialized for all indices
/// `0..=tail`.
unsafe fn insert_tail_gapped<T, F>(v_base: *mut T, tail: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // SAFETY: see individual comments.
    unsafe {
        let tail_ptr = v_base.add(tail);
        let mut sift = tail - gap;
        if !is_less(&*tail_ptr, &*v_base.add(sift)) {
            return;
        }

        // SAFETY: after this read tail is never read from again, every later read is from a
        // sift position below it. Thus this is effectively a move, not a copy. Should a panic
        // occur, or we have found the insertion position, gap_guard moves the element back into
        // the slice.
        let tmp = ManuallyDrop::new(tail_ptr.read());
        let mut gap_guard = CopyOnDrop {
            src: &*tmp,
            dst: tail_ptr,
        };

        loop {
            // SAFETY: sift and the gap are distinct in-bounds positions. Pointing the guard at
            // sift keeps exactly one hole in the slice.
            let sift_ptr = v_base.add(sift);
            ptr::copy_nonoverlapping(sift_ptr, gap_guard.dst, 1);
            gap_guard.dst = sift_ptr;

            if sift < gap {
                break;
            }

            sift -= gap;
            if !is_less(&tmp, &*v_base.add(sift)) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pass_sorts_each_chain() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        insertion_sort_gapped(&mut v, 4, &mut |a: &i32, b: &i32| a < b);

        for start in 0..4 {
            let chain: Vec<i32> = v.iter().skip(start).step_by(4).copied().collect();
            assert!(chain.windows(2).all(|w| w[0] <= w[1]), "{chain:?}");
        }
        assert_eq!(v, [1, 0, 3, 2, 5, 4, 7, 6, 9, 8]);
    }

    #[test]
    fn gap_not_smaller_than_len_is_noop() {
        let mut v = [3, 2, 1];
        insertion_sort_gapped(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        insertion_sort_gapped(&mut v, 0, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn gap_one_is_insertion_sort() {
        let mut v = vec![String::from("d"), "a".into(), "c".into(), "b".into()];
        insertion_sort_gapped(&mut v, 1, &mut |a: &String, b: &String| a < b);
        assert_eq!(v, ["a", "b", "c", "d"]);
    }
}
