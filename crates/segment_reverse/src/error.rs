use thiserror::Error;

/// Rejected segment request.
///
/// Raised by the validating entry points before any element is touched.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
#[error("invalid segment [{start}, {end}] for sequence of length {len}")]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

pub type Result<T> = std::result::Result<T, InvalidRange>;

impl InvalidRange {
    /// `true` when the bounds are inverted (`start > end`), as opposed to
    /// `end` running past the sequence.
    pub fn is_empty_segment(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_bounds_and_len() {
        let err = InvalidRange {
            start: 2,
            end: 9,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid segment [2, 9] for sequence of length 5"
        );
    }

    #[test]
    fn empty_segment_classification() {
        let inverted = InvalidRange {
            start: 3,
            end: 1,
            len: 5,
        };
        let overrun = InvalidRange {
            start: 1,
            end: 5,
            len: 5,
        };
        assert!(inverted.is_empty_segment());
        assert!(!overrun.is_empty_segment());
    }
}
