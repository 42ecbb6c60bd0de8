mod checked;
mod error;
mod two_pointer;

pub use checked::{try_reverse_in_place, validate_segment};
pub use error::{InvalidRange, Result};
pub use two_pointer::{reverse_in_place, reverse_in_place_unchecked, swap_count};

/// In-place reversal of an inclusive segment `[start, end]`.
///
/// - `reverse_segment` follows [`reverse_in_place`]: inverted or single
///   element bounds are a no-op, an `end` past the slice panics.
/// - `try_reverse_segment` follows [`try_reverse_in_place`]: bounds are
///   validated first and the swap count is returned.
pub trait ReverseSegment {
    fn reverse_segment(&mut self, start: usize, end: usize);
    fn try_reverse_segment(&mut self, start: usize, end: usize) -> Result<usize>;
}

impl<T> ReverseSegment for [T] {
    #[inline]
    fn reverse_segment(&mut self, start: usize, end: usize) {
        reverse_in_place(self, start, end);
    }

    #[inline]
    fn try_reverse_segment(&mut self, start: usize, end: usize) -> Result<usize> {
        try_reverse_in_place(self, start, end)
    }
}
