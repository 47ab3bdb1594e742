//! Segments view, cursor and containing locator

use std::iter::FusedIterator;
use std::sync::Arc;

use kugiri_core::{is_word_like, BoundarySet, Granularity};

use crate::dto::SegmentData;

/// Result of segmenting one input
///
/// Owns the input code units and the boundaries computed for them. The view
/// is immutable, so it can be iterated any number of times and shared
/// between threads.
#[derive(Debug, Clone)]
pub struct SegmentsView {
    input: Arc<[u16]>,
    boundaries: Arc<BoundarySet>,
    granularity: Granularity,
}

impl SegmentsView {
    pub(crate) fn new(input: Arc<[u16]>, boundaries: BoundarySet, granularity: Granularity) -> Self {
        debug_assert_eq!(boundaries.text_len(), input.len());
        Self {
            input,
            boundaries: Arc::new(boundaries),
            granularity,
        }
    }

    /// Fresh cursor over all segments, in offset order
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            view: self,
            front: 0,
            back: self.boundaries.segment_count(),
        }
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.boundaries.segment_count()
    }

    /// Whether the input was empty
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Segment by ordinal position
    pub fn get(&self, position: usize) -> Option<Segment<'_>> {
        let (start, end) = self.boundaries.span(position)?;
        Some(Segment {
            view: self,
            start,
            end,
        })
    }

    /// Segment whose span contains the code unit `offset`
    ///
    /// Negative offsets, offsets at or past the end of input and offsets
    /// that do not fit `usize` give `None`.
    pub fn containing<O: TryInto<usize>>(&self, offset: O) -> Option<Segment<'_>> {
        let offset = offset.try_into().ok()?;
        self.boundaries
            .locate(offset)
            .and_then(|position| self.get(position))
    }

    /// Input as a string; lone surrogates become U+FFFD
    pub fn input(&self) -> String {
        String::from_utf16_lossy(&self.input)
    }

    /// Input code units
    pub fn input_units(&self) -> &[u16] {
        &self.input
    }

    /// Computed boundaries
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// Granularity the view was produced at
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Serializable records of every segment
    pub fn to_data(&self) -> Vec<SegmentData> {
        self.iter().map(|segment| segment.to_data()).collect()
    }
}

impl<'a> IntoIterator for &'a SegmentsView {
    type Item = Segment<'a>;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over the segments of a [`SegmentsView`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    view: &'a SegmentsView,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let segment = self.view.get(self.front);
        self.front += 1;
        segment
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

/// One segment, borrowed from its view
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    view: &'a SegmentsView,
    start: usize,
    end: usize,
}

impl<'a> Segment<'a> {
    /// Code unit offset where the segment starts
    pub fn index(&self) -> usize {
        self.start
    }

    /// Code unit offset just past the segment
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; segments are never empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Code units of the segment
    pub fn units(&self) -> &'a [u16] {
        &self.view.input[self.start..self.end]
    }

    /// Segment text; lone surrogates become U+FFFD
    pub fn text(&self) -> String {
        String::from_utf16_lossy(self.units())
    }

    /// Word-likeness, only defined at word granularity
    pub fn is_word_like(&self) -> Option<bool> {
        (self.view.granularity == Granularity::Word).then(|| is_word_like(self.units()))
    }

    /// Record as yielded by iteration
    pub fn to_data(&self) -> SegmentData {
        SegmentData {
            segment: self.text(),
            index: self.start,
            input: None,
            is_word_like: self.is_word_like(),
        }
    }

    /// Record as returned by `containing`, carrying the whole input
    pub fn to_data_with_input(&self) -> SegmentData {
        SegmentData {
            input: Some(self.view.input()),
            ..self.to_data()
        }
    }
}
