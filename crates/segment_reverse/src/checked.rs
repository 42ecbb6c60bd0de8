use log::{debug, trace};

use crate::error::{InvalidRange, Result};
use crate::two_pointer::swap_inward;

/// Checks `start <= end < len`.
#[inline]
pub fn validate_segment(len: usize, start: usize, end: usize) -> Result<()> {
    if start > end || end >= len {
        return Err(InvalidRange { start, end, len });
    }
    Ok(())
}

/// Reverses `data[start..=end]` after validating the bounds.
///
/// On success returns the number of swaps performed. On failure the slice is
/// left untouched.
pub fn try_reverse_in_place<T>(data: &mut [T], start: usize, end: usize) -> Result<usize> {
    if let Err(err) = validate_segment(data.len(), start, end) {
        debug!("rejecting segment reversal: {err}");
        return Err(err);
    }

    let swaps = unsafe { swap_inward(data.as_mut_ptr(), start, end) };
    trace!("reversed segment [{start}, {end}] with {swaps} swaps");
    Ok(swaps)
}
