//! Property tests: boundaries always partition the input

use kugiri_core::{BoundaryClassifier, Granularity};
use proptest::prelude::*;

fn granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Grapheme),
        Just(Granularity::Word),
        Just(Granularity::Sentence),
    ]
}

// Arbitrary code units, including unpaired surrogates
fn code_units() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..64)
}

// Text drawn from scripts and punctuation the rules care about
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "Z", "1", ".", "?", " ", "'", "\"", "\r", "\n", "\u{301}", "\u{200D}",
            "\u{1F600}", "\u{1F1EF}", "猫", "は", "カ", "\u{20BB7}", "ก", "。", ")", "_",
        ]),
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn test_boundaries_partition_input(units in code_units(), granularity in granularity()) {
        let set = BoundaryClassifier::new(granularity).classify_units(&units);
        let offsets = set.as_slice();

        if units.is_empty() {
            prop_assert!(offsets.is_empty());
        } else {
            prop_assert_eq!(offsets.first().copied(), Some(0));
            prop_assert_eq!(offsets.last().copied(), Some(units.len()));
            prop_assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_surrogate_pairs_never_split(text in mixed_text(), granularity in granularity()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        let set = BoundaryClassifier::new(granularity).classify_units(&units);

        for &offset in set.as_slice() {
            if offset > 0 && offset < units.len() {
                prop_assert!(!(0xDC00..=0xDFFF).contains(&units[offset]));
            }
        }
    }

    #[test]
    fn test_locate_agrees_with_spans(text in mixed_text(), granularity in granularity()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        let set = BoundaryClassifier::new(granularity).classify_units(&units);

        for (index, (start, end)) in set.spans().enumerate() {
            for offset in start..end {
                prop_assert_eq!(set.locate(offset), Some(index));
            }
        }
        prop_assert_eq!(set.locate(units.len()), None);
    }
}
