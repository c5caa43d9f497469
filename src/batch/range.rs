use std::ops::Range;

use super::{BatchCountError, RemainderPolicy};

/// Iterator returned by [`batch_ranges`].
///
/// This replaces the "yield one sub-range, recurse for the rest" shape with
/// an explicit cursor, so iteration uses constant stack space and each
/// consumer gets an independent, restartable instance.
pub struct BatchRanges {
    start: usize,
    stop: usize,
    base_size: usize,

    /// Elements left over after `remaining` batches of `base_size`.
    tail: usize,

    /// Base batches still to yield.
    remaining: usize,

    policy: RemainderPolicy,
}

impl Iterator for BatchRanges {
    type Item = Range<usize>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            0 => {
                // Only reachable with a pending tail under `ExtraBatch`;
                // `FoldIntoLast` clears the tail with its final batch.
                if self.tail > 0 {
                    let range = self.start..self.start + self.tail;
                    self.start = range.end;
                    self.tail = 0;
                    Some(range)
                } else {
                    None
                }
            }
            1 => {
                self.remaining = 0;
                match self.policy {
                    RemainderPolicy::FoldIntoLast => {
                        let range = self.start..self.stop + self.tail;
                        self.start = range.end;
                        self.tail = 0;
                        Some(range)
                    }
                    RemainderPolicy::ExtraBatch => {
                        let range = self.start..self.stop;
                        self.start = self.stop;
                        Some(range)
                    }
                }
            }
            _ => {
                let range = self.start..self.stop;
                self.start += self.base_size;
                self.stop += self.base_size;
                self.remaining -= 1;
                Some(range)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending_tail =
            self.policy == RemainderPolicy::ExtraBatch && self.tail > 0;
        let len = self.remaining + pending_tail as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BatchRanges {}

impl std::iter::FusedIterator for BatchRanges {}

/// Return an iterator which partitions `0..len` into `count` contiguous
/// sub-ranges.
///
/// The first sub-ranges all have length `len / count`; the leftover
/// `len % count` elements are distributed according to `policy`. Concatenated
/// in order, the sub-ranges cover `0..len` exactly. Returns an error if
/// `count` is zero.
#[inline]
pub fn batch_ranges(
    len: usize,
    count: usize,
    policy: RemainderPolicy,
) -> Result<BatchRanges, BatchCountError> {
    if count == 0 {
        return Err(BatchCountError {});
    }
    let base_size = len / count;
    Ok(BatchRanges {
        start: 0,
        stop: base_size,
        base_size,
        tail: len % count,
        remaining: count,
        policy,
    })
}
