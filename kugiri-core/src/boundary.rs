//! Boundary sets: the segmentation of one input

use crate::error::{CoreError, Result};

/// Strictly increasing code unit offsets from `0` to the input length
///
/// Consecutive offsets delimit one segment. An empty input has no
/// boundaries at all, so it yields zero segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundarySet {
    offsets: Vec<usize>,
}

impl BoundarySet {
    /// The boundary set of an empty input
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and wrap a list of offsets for an input of `len` code units
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBoundaries`] unless the offsets start at
    /// 0, end at `len` and are strictly increasing.
    pub fn from_offsets(offsets: Vec<usize>, len: usize) -> Result<Self> {
        if len == 0 {
            return match offsets.as_slice() {
                [] | [0] => Ok(Self::empty()),
                _ => Err(CoreError::InvalidBoundaries(
                    "empty input cannot have boundaries".into(),
                )),
            };
        }

        match (offsets.first(), offsets.last()) {
            (Some(0), Some(&last)) if last == len => {}
            _ => {
                return Err(CoreError::InvalidBoundaries(format!(
                    "offsets must start at 0 and end at {len}"
                )))
            }
        }

        if let Some(pair) = offsets.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(CoreError::InvalidBoundaries(format!(
                "offsets not strictly increasing at {} -> {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self { offsets })
    }

    /// Wrap offsets produced by the scanner, which upholds the invariants
    pub(crate) fn from_scanned(offsets: Vec<usize>) -> Self {
        debug_assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(offsets.first().map_or(true, |&first| first == 0));
        Self { offsets }
    }

    /// Raw offsets, including 0 and the input length
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Whether there are no segments
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }

    /// Length of the segmented input in code units
    #[inline]
    pub fn text_len(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// `[start, end)` of the segment at `index`
    pub fn span(&self, index: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        Some((start, end))
    }

    /// All segment spans in order
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.offsets.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Index of the segment whose span contains `offset`
    ///
    /// Binary search; offsets at or past the end of input have no segment.
    pub fn locate(&self, offset: usize) -> Option<usize> {
        if offset >= self.text_len() {
            return None;
        }
        match self.offsets.binary_search(&offset) {
            Ok(index) => Some(index),
            Err(insertion) => Some(insertion - 1),
        }
    }

    /// Whether a segment starts or ends exactly at `offset`
    pub fn is_boundary(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }
}
