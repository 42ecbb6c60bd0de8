use std::ptr;

/// Reverses `data[start..=end]` in place.
///
/// Zero swaps happen when `start >= end`, whatever the indices are. With
/// `start < end`, an `end` past the slice panics before any element moves.
#[inline]
pub fn reverse_in_place<T>(data: &mut [T], start: usize, end: usize) {
    if start >= end {
        return;
    }

    let segment = &mut data[start..=end];
    let last = segment.len() - 1;
    unsafe {
        swap_inward(segment.as_mut_ptr(), 0, last);
    }
}

/// Reverses `data[start..=end]` without any bounds checks.
///
/// # Safety
///
/// Either `start >= end`, or `end < data.len()`.
#[inline]
pub unsafe fn reverse_in_place_unchecked<T>(data: &mut [T], start: usize, end: usize) {
    debug_assert!(start >= end || end < data.len());
    unsafe {
        swap_inward(data.as_mut_ptr(), start, end);
    }
}

/// Number of swaps a reversal of `[start, end]` performs.
#[inline]
pub fn swap_count(start: usize, end: usize) -> usize {
    if start > end {
        0
    } else {
        (end - start + 1) / 2
    }
}

/// Swaps `lo`/`hi` pairs moving toward the middle; returns the swap count.
///
/// Caller guarantees every index in `[lo, hi]` is in bounds when `lo < hi`.
#[inline]
pub(crate) unsafe fn swap_inward<T>(ptr: *mut T, mut lo: usize, mut hi: usize) -> usize {
    let mut swaps = 0usize;
    while lo < hi {
        unsafe {
            ptr::swap_nonoverlapping(ptr.add(lo), ptr.add(hi), 1);
        }
        lo += 1;
        hi -= 1;
        swaps += 1;
    }
    swaps
}
