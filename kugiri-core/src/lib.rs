//! Table-driven text boundary classification over UTF-16 code units
//!
//! This crate computes grapheme cluster, word and sentence boundaries
//! following the rule structure of Unicode text segmentation. Every
//! granularity is a table of ordered rules evaluated by one generic
//! scanner; there are no hand-written per-rule branches.
//!
//! # Architecture
//!
//! - **decode**: UTF-16 code units to scalars with code unit offsets
//! - **properties**: break property lookup per granularity
//! - **rules**: rule tables, bounded context window and the scanner
//! - **dictionary**: optional word splitting for space-less scripts
//! - **classifier**: ties the pieces together into a [`BoundarySet`]
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::{BoundaryClassifier, Granularity};
//!
//! let classifier = BoundaryClassifier::new(Granularity::Word);
//! let boundaries = classifier.classify_text("Moi?  N'est-ce pas.");
//!
//! assert_eq!(
//!     boundaries.as_slice(),
//!     &[0, 3, 4, 6, 11, 12, 14, 15, 18, 19]
//! );
//! assert_eq!(boundaries.locate(8), Some(3));
//! ```

pub mod boundary;
pub mod classifier;
pub mod decode;
pub mod dictionary;
pub mod error;
pub mod properties;
pub mod rules;
pub mod suppression;
pub mod tagger;
pub mod types;

pub use boundary::BoundarySet;
pub use classifier::BoundaryClassifier;
pub use decode::{Scalar, ScalarSequence};
pub use dictionary::{DictionarySegmenter, RunScript, RunSegmenter, ScriptRouter, ScriptRun, Trie};
pub use error::{CoreError, Result};
pub use properties::{GraphemeClass, SentenceClass, WordClass};
pub use suppression::SentenceSuppressor;
pub use tagger::is_word_like;
pub use types::Granularity;

/// Segment `text` at `granularity` with the plain rule tables
///
/// Returns `[start, end)` code unit spans.
pub fn segment_spans(text: &str, granularity: Granularity) -> Vec<(usize, usize)> {
    BoundaryClassifier::new(granularity)
        .classify_text(text)
        .spans()
        .collect()
}
