//! Basic usage example for the selection resolution API

use sentaku_api::{Config, SelectionResolver, VerdictDTO};
use sentaku_core::{MemoryDocument, Point, TextPosition, TextRange};
use sentaku_engine::PointerInput;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: validate a drag selection for the icon path
    println!("=== Method 1: Drag Selection ===");
    let text = "We are discussing the iPhone 15 Pro. It has a new chip.";
    let (doc, leaf) = MemoryDocument::from_text(text);
    let resolver = SelectionResolver::with_language("zh")?;

    let start = text.find("iPhone").unwrap();
    let range = TextRange::new(
        TextPosition::new(leaf, start),
        TextPosition::new(leaf, start + "iPhone".len()),
    );
    let verdict = resolver.validate_selection(&doc, Some(&range)).await;
    println!("selection verdict: {:?}\n", VerdictDTO::from(&verdict));

    // Method 2: resolve the sentence around a click
    println!("=== Method 2: Sentence Click ===");
    let input = PointerInput::click_at(Point::new(8.0 * 24.0, 8.0));
    let verdict = resolver.resolve_sentence_click(&doc, &input).await;
    if let sentaku_engine::Verdict::Valid(resolved) = &verdict {
        println!("sentence: {:?}\n", resolved.text);
    }

    // Method 3: suppression of target-language text
    println!("=== Method 3: Suppression ===");
    let (doc, leaf) = MemoryDocument::from_text("你好世界，这是中文。");
    let range = TextRange::new(TextPosition::new(leaf, 0), TextPosition::new(leaf, 12));
    let verdict = resolver.validate_selection(&doc, Some(&range)).await;
    println!("chinese selection for zh target: {:?}\n", VerdictDTO::from(&verdict));

    // Method 4: custom configuration
    println!("=== Method 4: Custom Configuration ===");
    let config = Config::builder()
        .target_language("ja")
        .suppress_native(true)
        .max_selection_chars(200)
        .build()?;
    let resolver = SelectionResolver::with_config(config)?;
    let (doc, leaf) = MemoryDocument::from_text("ひらがなのテキストです。");
    let range = TextRange::new(TextPosition::new(leaf, 0), TextPosition::new(leaf, 15));
    let verdict = resolver.validate_selection(&doc, Some(&range)).await;
    println!("japanese selection for ja target: {:?}", VerdictDTO::from(&verdict));

    Ok(())
}
