//! Range normalization
//!
//! Converts what the user typed (`TOP 4:10`, `BOTTOM 5:-5`) into absolute,
//! 0-based, half-open indices over a list. Queue slicing depends on the exact
//! arithmetic here, including its asymmetries: a single-sided `TOP n` is not
//! clamped to the list length and a `stop` of zero counts as absent.

use serde::{Deserialize, Serialize};

use super::types::{CommandOptions, RangeArgument};

/// A 0-based half-open range with `start <= stop`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteRange {
    pub start: i64,
    pub stop: i64,
}

impl AbsoluteRange {
    /// Clamp into `[0, len]` for slicing
    pub fn clamp(&self, len: usize) -> std::ops::Range<usize> {
        let len_i = i64::try_from(len).unwrap_or(i64::MAX);
        let start = self.start.clamp(0, len_i) as usize;
        let stop = self.stop.clamp(0, len_i) as usize;
        start..stop.max(start)
    }
}

/// Normalize `range` over a list of `length` items
///
/// `reversed` counts from the end of the list, as BOTTOM does.
pub fn normalize(range: &RangeArgument, length: usize, reversed: bool) -> AbsoluteRange {
    let max = i64::try_from(length).unwrap_or(i64::MAX);
    let mut start = 0;
    let mut stop = max;

    match range.stop.filter(|stop| *stop != 0) {
        Some(range_stop) => {
            start = (max - 1).min(range.start.max(1) - 1);
            stop = if range_stop < 0 {
                max + range_stop + 1
            } else {
                (max - 1).min(range_stop.max(1) - 1)
            };
            if reversed {
                start = max - start;
                stop = max - stop;
            }
        }
        None if reversed => {
            start = max - max.min(range.start.max(1));
        }
        None => {
            stop = range.start;
        }
    }

    AbsoluteRange {
        start: start.min(stop),
        stop: start.max(stop),
    }
}

/// Slice `list` with `range`, clamped to the list bounds
pub fn apply_range<'a, T>(range: &RangeArgument, list: &'a [T], reversed: bool) -> &'a [T] {
    let absolute = normalize(range, list.len(), reversed);
    &list[absolute.clamp(list.len())]
}

/// The range selected by TOP or BOTTOM in `options`, over `length` items
///
/// TOP counts from the start, BOTTOM from the end. `None` if neither is set.
pub fn range_option(options: &CommandOptions, length: usize) -> Option<AbsoluteRange> {
    if let Some(top) = options.top() {
        Some(normalize(top, length, false))
    } else {
        options.bottom().map(|bottom| normalize(bottom, length, true))
    }
}
