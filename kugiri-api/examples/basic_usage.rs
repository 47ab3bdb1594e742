//! Basic usage of the kugiri segmenter

use kugiri_api::{segment_text, Granularity, Segmenter, SegmenterOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function
    println!("=== Method 1: Convenience Function ===");
    for data in segment_text("Hello world. How are you?", "en", Granularity::Sentence)? {
        println!("  [{}] {:?}", data.index, data.segment);
    }

    // Method 2: options bag, like Intl.Segmenter
    println!("\n=== Method 2: Options Bag ===");
    let segmenter = Segmenter::new(&["fr-CA", "en"], SegmenterOptions::new().granularity("word"))?;
    println!("resolved: {}", segmenter.resolved_options().to_json()?);

    let segments = segmenter.segment("Moi?  N'est-ce pas.");
    for segment in &segments {
        println!(
            "  {:>2}..{:<2} {:?} word-like: {:?}",
            segment.index(),
            segment.end(),
            segment.text(),
            segment.is_word_like()
        );
    }

    // Method 3: builder and the containing locator
    println!("\n=== Method 3: Builder ===");
    let segmenter = Segmenter::builder()
        .locale("ja")?
        .granularity(Granularity::Word)
        .build_segmenter()?;

    let segments = segmenter.segment("吾輩は猫である。名前はまだ無い。");
    if let Some(segment) = segments.containing(8) {
        println!("offset 8 is in {}", segment.to_data_with_input().to_json()?);
    }
    let words: Vec<String> = segments
        .iter()
        .filter(|s| s.is_word_like() == Some(true))
        .map(|s| s.text())
        .collect();
    println!("words: {}", words.join(" / "));

    Ok(())
}
