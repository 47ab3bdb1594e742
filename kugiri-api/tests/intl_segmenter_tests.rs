//! Behaviour of the segmenter against the Intl.Segmenter conformance scenarios

use kugiri_api::{Segmenter, SegmenterOptions};

const NATSUME: &str = "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。";
const WEBKIT: &str = "Performance is a top priority for WebKit. We adhere to a simple directive for all work we do on WebKit: The way to make a program faster is to never let it get slower.";

fn segmenter(locale: &str, granularity: &str) -> Segmenter {
    Segmenter::new(&[locale], SegmenterOptions::new().granularity(granularity)).unwrap()
}

/// `(start, end, text, isWordLike)` for every segment
fn collect(segmenter: &Segmenter, input: &str) -> Vec<(usize, usize, String, Option<bool>)> {
    segmenter
        .segment(input)
        .iter()
        .map(|s| (s.index(), s.end(), s.text(), s.is_word_like()))
        .collect()
}

fn expected(rows: &[(usize, usize, &str, Option<bool>)]) -> Vec<(usize, usize, String, Option<bool>)> {
    rows.iter()
        .map(|&(start, end, text, word_like)| (start, end, text.to_string(), word_like))
        .collect()
}

fn containing_json(segmenter: &Segmenter, input: &str, offset: i64) -> Option<String> {
    segmenter
        .segment(input)
        .containing(offset)
        .map(|s| s.to_data_with_input().to_json().unwrap())
}

#[test]
fn test_construction_and_resolved_options() {
    let segmenter = Segmenter::new(&["fr"], SegmenterOptions::new()).unwrap();
    assert_eq!(
        segmenter.resolved_options().to_json().unwrap(),
        r#"{"locale":"fr","granularity":"grapheme"}"#
    );

    let default = Segmenter::new::<&str>(&[], SegmenterOptions::new()).unwrap();
    assert_eq!(default.resolved_options().locale, "en");
}

#[test]
fn test_french_words() {
    let segmenter = segmenter("fr", "word");
    assert_eq!(
        collect(&segmenter, "Moi?  N'est-ce pas."),
        expected(&[
            (0, 3, "Moi", Some(true)),
            (3, 4, "?", Some(false)),
            (4, 6, "  ", Some(false)),
            (6, 11, "N'est", Some(true)),
            (11, 12, "-", Some(false)),
            (12, 14, "ce", Some(true)),
            (14, 15, " ", Some(false)),
            (15, 18, "pas", Some(true)),
            (18, 19, ".", Some(false)),
        ])
    );

    assert_eq!(Segmenter::supported_locales_of(&["fr"]).unwrap(), vec!["fr"]);
    assert_eq!(
        segmenter.resolved_options().to_json().unwrap(),
        r#"{"locale":"fr","granularity":"word"}"#
    );
}

#[test]
fn test_french_graphemes() {
    let segmenter = segmenter("fr", "grapheme");
    let input = "Moi?  N'est-ce pas.";
    let segments = segmenter.segment(input);

    assert_eq!(segments.len(), input.len());
    for (position, segment) in segments.iter().enumerate() {
        assert_eq!(segment.index(), position);
        assert_eq!(segment.text(), &input[position..position + 1]);
        assert_eq!(segment.is_word_like(), None);
    }
    assert_eq!(
        segmenter.resolved_options().to_json().unwrap(),
        r#"{"locale":"fr","granularity":"grapheme"}"#
    );
}

#[test]
fn test_english_sentences() {
    let segmenter = segmenter("en", "sentence");
    assert_eq!(
        collect(&segmenter, WEBKIT),
        expected(&[
            (0, 42, "Performance is a top priority for WebKit. ", None),
            (
                42,
                167,
                "We adhere to a simple directive for all work we do on WebKit: The way to make a program faster is to never let it get slower.",
                None,
            ),
        ])
    );
    assert_eq!(
        segmenter.resolved_options().to_json().unwrap(),
        r#"{"locale":"en","granularity":"sentence"}"#
    );
}

#[test]
fn test_japanese_words() {
    let segmenter = segmenter("ja", "word");
    assert_eq!(
        collect(&segmenter, NATSUME),
        expected(&[
            (0, 2, "吾輩", Some(true)),
            (2, 3, "は", Some(true)),
            (3, 4, "猫", Some(true)),
            (4, 5, "で", Some(true)),
            (5, 7, "ある", Some(true)),
            (7, 8, "。", Some(false)),
            (8, 10, "名前", Some(true)),
            (10, 11, "は", Some(true)),
            (11, 13, "まだ", Some(true)),
            (13, 15, "無い", Some(true)),
            (15, 16, "。", Some(false)),
            (16, 18, "どこ", Some(true)),
            (18, 19, "で", Some(true)),
            (19, 21, "生れ", Some(true)),
            (21, 23, "たか", Some(true)),
            (23, 26, "とんと", Some(true)),
            (26, 28, "見当", Some(true)),
            (28, 29, "が", Some(true)),
            (29, 30, "つ", Some(true)),
            (30, 31, "か", Some(true)),
            (31, 32, "ぬ", Some(true)),
            (32, 33, "。", Some(false)),
        ])
    );
}

#[test]
fn test_japanese_graphemes() {
    let segmenter = segmenter("ja", "grapheme");
    let segments = segmenter.segment(NATSUME);

    assert_eq!(segments.len(), 33);
    for (position, (segment, ch)) in segments.iter().zip(NATSUME.chars()).enumerate() {
        assert_eq!(segment.index(), position);
        assert_eq!(segment.len(), 1);
        assert_eq!(segment.text(), ch.to_string());
        assert_eq!(segment.is_word_like(), None);
    }
}

#[test]
fn test_japanese_sentences() {
    let segmenter = segmenter("ja", "sentence");
    assert_eq!(
        collect(&segmenter, NATSUME),
        expected(&[
            (0, 8, "吾輩は猫である。", None),
            (8, 16, "名前はまだ無い。", None),
            (16, 33, "どこで生れたかとんと見当がつかぬ。", None),
        ])
    );
}

#[test]
fn test_surrogate_pairs() {
    let input = "𠮷野家";

    assert_eq!(
        collect(&segmenter("ja", "grapheme"), input),
        expected(&[(0, 2, "𠮷", None), (2, 3, "野", None), (3, 4, "家", None)])
    );
    assert_eq!(
        collect(&segmenter("ja", "word"), input),
        expected(&[(0, 2, "𠮷", Some(true)), (2, 4, "野家", Some(true))])
    );
    assert_eq!(
        collect(&segmenter("ja", "sentence"), input),
        expected(&[(0, 4, "𠮷野家", None)])
    );
}

#[test]
fn test_containing_surrogate_pairs() {
    let segmenter = segmenter("ja", "grapheme");
    let input = "𠮷野家";

    assert_eq!(
        containing_json(&segmenter, input, 0).as_deref(),
        Some(r#"{"segment":"𠮷","index":0,"input":"𠮷野家"}"#)
    );
    assert_eq!(
        containing_json(&segmenter, input, 1).as_deref(),
        Some(r#"{"segment":"𠮷","index":0,"input":"𠮷野家"}"#)
    );
    assert_eq!(
        containing_json(&segmenter, input, 2).as_deref(),
        Some(r#"{"segment":"野","index":2,"input":"𠮷野家"}"#)
    );
    assert_eq!(
        containing_json(&segmenter, input, 3).as_deref(),
        Some(r#"{"segment":"家","index":3,"input":"𠮷野家"}"#)
    );
    assert_eq!(containing_json(&segmenter, input, 4), None);
}

#[test]
fn test_containing_walk() {
    let segmenter = segmenter("fr", "word");
    let segments = segmenter.segment("Allons-y!");
    let json = |offset: usize| {
        segments
            .containing(offset)
            .map(|s| s.to_data_with_input().to_json().unwrap())
    };

    assert_eq!(
        json(0).as_deref(),
        Some(r#"{"segment":"Allons","index":0,"input":"Allons-y!","isWordLike":true}"#)
    );
    assert_eq!(
        json(5).as_deref(),
        Some(r#"{"segment":"Allons","index":0,"input":"Allons-y!","isWordLike":true}"#)
    );

    let mut current = segments.containing(6).unwrap();
    assert_eq!(
        current.to_data_with_input().to_json().unwrap(),
        r#"{"segment":"-","index":6,"input":"Allons-y!","isWordLike":false}"#
    );

    current = segments.containing(current.end()).unwrap();
    assert_eq!(
        current.to_data_with_input().to_json().unwrap(),
        r#"{"segment":"y","index":7,"input":"Allons-y!","isWordLike":true}"#
    );

    current = segments.containing(current.end()).unwrap();
    assert_eq!(
        current.to_data_with_input().to_json().unwrap(),
        r#"{"segment":"!","index":8,"input":"Allons-y!","isWordLike":false}"#
    );

    assert!(segments.containing(current.end()).is_none());
}

#[test]
fn test_empty_input() {
    let segmenter = segmenter("fr", "word");
    let segments = segmenter.segment("");

    assert!(segments.containing(0).is_none());
    assert_eq!(segments.iter().count(), 0);
}

#[test]
fn test_single_space() {
    let segmenter = segmenter("fr", "word");
    assert_eq!(
        containing_json(&segmenter, " ", 0).as_deref(),
        Some(r#"{"segment":" ","index":0,"input":" ","isWordLike":false}"#)
    );
    assert_eq!(containing_json(&segmenter, " ", 1), None);
    assert_eq!(containing_json(&segmenter, " ", 2), None);
    assert_eq!(
        collect(&segmenter, " "),
        expected(&[(0, 1, " ", Some(false))])
    );
}
