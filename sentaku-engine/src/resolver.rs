//! Word resolution from a pointer location
//!
//! Turns raw coordinates into the word the user pointed at: caret
//! resolution, a one-character back-step for clicks landing just past a
//! word's final glyph, greedy span growth, and a geometric check that
//! rejects carets the environment resolved to a visually distant glyph
//! (common with wrapped or justified text). Failures fail closed: no
//! word, no trigger.

use sentaku_core::word::{char_at, char_before, is_word_char, word_span_at};
use sentaku_core::{Point, TextDocument, TextPosition, TextRange};
use tracing::trace;

/// Padding added to each span rectangle before the hit test, in pixels
pub const HIT_TEST_PADDING: f32 = 2.0;

/// Resolve the word under a point
///
/// Pure function of document state and point: an unchanged document
/// yields an identical range for the same coordinates. Words are runs of
/// `[A-Za-z0-9'-]` within the caret's leaf; a word split across inline
/// elements resolves to the fragment under the caret.
pub fn resolve_word_at<D: TextDocument + ?Sized>(doc: &D, point: Point) -> Option<TextRange> {
    let caret = doc.caret_at_point(point)?;
    let text = doc.leaf_text(caret.leaf);
    let mut offset = caret.offset;

    // Clicking just past a word's last glyph puts the caret on the
    // following non-word character
    if !char_at(text, offset).is_some_and(is_word_char) {
        match char_before(text, offset) {
            Some(prev) if is_word_char(prev) => offset -= prev.len_utf8(),
            _ => {}
        }
    }

    let (start, end) = match word_span_at(text, offset) {
        Some(span) => span,
        None => {
            trace!(x = point.x, y = point.y, "no word character at caret");
            return None;
        }
    };
    if start == end {
        return None;
    }

    let range = TextRange::new(
        TextPosition::new(caret.leaf, start),
        TextPosition::new(caret.leaf, end),
    );

    // The environment may clamp the caret to the nearest line edge;
    // require the point to actually sit on the resolved span
    let hit = doc
        .range_rects(&range)
        .iter()
        .any(|rect| rect.inflate(HIT_TEST_PADDING).contains(point));
    if !hit {
        trace!(x = point.x, y = point.y, "point outside resolved word span");
        return None;
    }

    Some(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentaku_core::document::memory::{CHAR_WIDTH, LINE_HEIGHT};
    use sentaku_core::MemoryDocument;

    fn mid_of_char(col: usize, line: usize) -> Point {
        Point::new(
            col as f32 * CHAR_WIDTH + CHAR_WIDTH / 2.0,
            line as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
        )
    }

    #[test]
    fn test_resolves_word_under_point() {
        let (doc, leaf) = MemoryDocument::from_text("the quick fox");

        let range = resolve_word_at(&doc, mid_of_char(5, 0)).unwrap();
        assert_eq!(range.start, TextPosition::new(leaf, 4));
        assert_eq!(range.end, TextPosition::new(leaf, 9));
    }

    #[test]
    fn test_click_just_past_word_steps_back() {
        let (doc, leaf) = MemoryDocument::from_text("end here");

        // The space after "end" at col 3
        let range = resolve_word_at(&doc, mid_of_char(3, 0)).unwrap();
        assert_eq!(range.start, TextPosition::new(leaf, 0));
        assert_eq!(range.end, TextPosition::new(leaf, 3));
    }

    #[test]
    fn test_click_on_punctuation_fails() {
        let (doc, _) = MemoryDocument::from_text("a ... b");

        assert_eq!(resolve_word_at(&doc, mid_of_char(3, 0)), None);
    }

    #[test]
    fn test_distant_click_rejected_by_hit_test() {
        let (doc, _) = MemoryDocument::from_text("word");

        // The caret clamps to the end of the line but the point is far
        // past the last glyph
        let far = Point::new(40.0 * CHAR_WIDTH, LINE_HEIGHT / 2.0);
        assert_eq!(resolve_word_at(&doc, far), None);
    }

    #[test]
    fn test_click_within_padding_accepted() {
        let (doc, leaf) = MemoryDocument::from_text("word");

        // One pixel past the last glyph, inside the inflated rect
        let near = Point::new(4.0 * CHAR_WIDTH + 1.0, LINE_HEIGHT / 2.0);
        let range = resolve_word_at(&doc, near).unwrap();
        assert_eq!(range.end, TextPosition::new(leaf, 4));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let (doc, _) = MemoryDocument::from_text("same point same word");

        let p = mid_of_char(7, 0);
        assert_eq!(resolve_word_at(&doc, p), resolve_word_at(&doc, p));
    }

    #[test]
    fn test_empty_space_fails() {
        let (doc, _) = MemoryDocument::from_text("hi");

        assert_eq!(resolve_word_at(&doc, Point::new(4.0, 300.0)), None);
    }
}
