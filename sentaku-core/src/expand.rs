//! Two-phase greedy sentence expansion
//!
//! Selections arriving from user gestures are often too short (a
//! double-clicked word) or too long for good translation context. The
//! expander grows a range to the shortest sentence-like span that still
//! carries enough meaning: hard terminators bound the search absolutely,
//! soft terminators mark preferred shorter segments inside those bounds,
//! and a block-element crossing acts as an implicit hard terminator even
//! when no punctuation is present.
//!
//! A boundary is a position immediately after a terminator character (or
//! at a block edge). Defining boundaries this way makes expansion
//! idempotent: re-expanding an already expanded range is a no-op.

use std::cmp::Ordering;

use crate::document::position::{PositionModel, TextPosition, TextRange};
use crate::document::{NodeId, TextDocument};
use crate::script;
use crate::terminator::TerminatorSet;
use crate::word::char_before;

/// Which terminator class a scan recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanClass {
    /// Hard terminators only: the absolute sentence limits
    Hard,
    /// Hard or soft: preferred shorter segments
    Any,
}

impl ScanClass {
    #[inline]
    fn matches(self, terms: &TerminatorSet, ch: char) -> bool {
        match self {
            ScanClass::Hard => terms.is_hard(ch),
            ScanClass::Any => terms.is_any(ch),
        }
    }
}

/// Grows a selection into a sentence-level range
#[derive(Debug, Clone, Default)]
pub struct SentenceExpander {
    terms: TerminatorSet,
}

impl SentenceExpander {
    /// Create an expander with the standard terminator sets
    pub fn new() -> Self {
        Self::default()
    }

    /// The absolute sandbox for a range: the nearest hard boundary on
    /// each side, bounded by the enclosing block
    pub fn hard_limits<D: TextDocument + ?Sized>(&self, doc: &D, range: &TextRange) -> TextRange {
        let model = PositionModel::new(doc);
        let scope = model.block_root(range.start.leaf);
        TextRange::new(
            self.scan_backward(&model, scope, range.start, ScanClass::Hard),
            self.scan_forward(&model, scope, range.end, ScanClass::Hard, true),
        )
    }

    /// Expand a range to a sentence-level span
    ///
    /// Never fails; when no terminator exists in scope the enclosing
    /// block's edges stand in as the result. The output always contains
    /// the input and never exceeds the hard limits.
    pub fn expand<D: TextDocument + ?Sized>(&self, doc: &D, range: &TextRange) -> TextRange {
        let model = PositionModel::new(doc);
        let scope = model.block_root(range.start.leaf);

        let hard_start = self.scan_backward(&model, scope, range.start, ScanClass::Hard);
        let hard_end = self.scan_forward(&model, scope, range.end, ScanClass::Hard, true);

        let mut start = self.scan_backward(&model, scope, range.start, ScanClass::Any);
        if model.compare(&start, &hard_start) == Ordering::Less {
            start = hard_start;
        }
        let mut end = self.scan_forward(&model, scope, range.end, ScanClass::Any, true);
        if model.compare(&end, &hard_end) == Ordering::Greater {
            end = hard_end;
        }

        // Phase 1: grow the end, one terminator at a time
        while self.too_short(&model, start, end) && model.compare(&end, &hard_end) == Ordering::Less
        {
            let next = self.scan_forward(&model, scope, end, ScanClass::Any, false);
            if model.compare(&next, &end) == Ordering::Greater
                && model.compare(&next, &hard_end) != Ordering::Greater
            {
                end = next;
            } else {
                // No further terminator before the hard limit
                end = hard_end;
                break;
            }
        }

        // Phase 2: still short with the right side exhausted, grow the
        // start
        while self.too_short(&model, start, end)
            && model.compare(&start, &hard_start) == Ordering::Greater
        {
            let prev = self.scan_backward_before(&model, scope, start, ScanClass::Any);
            if model.compare(&prev, &start) == Ordering::Less
                && model.compare(&prev, &hard_start) != Ordering::Less
            {
                start = prev;
            } else {
                start = hard_start;
                break;
            }
        }

        TextRange::new(start, end)
    }

    fn too_short<D: TextDocument + ?Sized>(
        &self,
        model: &PositionModel<'_, D>,
        start: TextPosition,
        end: TextPosition,
    ) -> bool {
        let text = model.text_between(&TextRange::new(start, end));
        script::is_short_fragment(&text)
    }

    /// Nearest boundary at or after `from`
    ///
    /// With `inclusive`, a position directly after a terminator already
    /// is a boundary and is returned unchanged; otherwise the scan
    /// starts at the character under `from`.
    fn scan_forward<D: TextDocument + ?Sized>(
        &self,
        model: &PositionModel<'_, D>,
        scope: NodeId,
        from: TextPosition,
        class: ScanClass,
        inclusive: bool,
    ) -> TextPosition {
        let doc = model.doc();
        if inclusive && from.offset > 0 {
            if let Some(prev) = char_before(doc.leaf_text(from.leaf), from.offset) {
                if class.matches(&self.terms, prev) {
                    return from;
                }
            }
        }
        let mut leaf = from.leaf;
        let mut at = from.offset;
        loop {
            let text = doc.leaf_text(leaf);
            for (i, ch) in text[at..].char_indices() {
                if class.matches(&self.terms, ch) {
                    return TextPosition::new(leaf, at + i + ch.len_utf8());
                }
            }
            let end_of_leaf = TextPosition::new(leaf, text.len());
            let Some(next) = model.next_leaf(scope, leaf) else {
                return end_of_leaf;
            };
            if model.crosses_block_boundary(leaf, next) {
                return end_of_leaf;
            }
            leaf = next;
            at = 0;
        }
    }

    /// Nearest boundary at or before `from`
    fn scan_backward<D: TextDocument + ?Sized>(
        &self,
        model: &PositionModel<'_, D>,
        scope: NodeId,
        from: TextPosition,
        class: ScanClass,
    ) -> TextPosition {
        let doc = model.doc();
        let mut leaf = from.leaf;
        let mut at = from.offset;
        loop {
            let text = &doc.leaf_text(leaf)[..at];
            for (i, ch) in text.char_indices().rev() {
                if class.matches(&self.terms, ch) {
                    return TextPosition::new(leaf, i + ch.len_utf8());
                }
            }
            let start_of_leaf = TextPosition::new(leaf, 0);
            let Some(prev) = model.prev_leaf(scope, leaf) else {
                return start_of_leaf;
            };
            if model.crosses_block_boundary(prev, leaf) {
                return start_of_leaf;
            }
            at = doc.leaf_text(prev).len();
            leaf = prev;
        }
    }

    /// Nearest boundary strictly before `from`
    ///
    /// Steps over the terminator that made `from` a boundary before
    /// scanning; returns `from` unchanged when there is nowhere left to
    /// go, which the caller treats as no progress.
    fn scan_backward_before<D: TextDocument + ?Sized>(
        &self,
        model: &PositionModel<'_, D>,
        scope: NodeId,
        from: TextPosition,
        class: ScanClass,
    ) -> TextPosition {
        let doc = model.doc();
        let mut leaf = from.leaf;
        let mut at = from.offset;
        if at == 0 {
            match model.prev_leaf(scope, leaf) {
                Some(prev) if !model.crosses_block_boundary(prev, leaf) => {
                    at = doc.leaf_text(prev).len();
                    leaf = prev;
                }
                _ => return from,
            }
        }
        if let Some(ch) = char_before(doc.leaf_text(leaf), at) {
            at -= ch.len_utf8();
        }
        self.scan_backward(model, scope, TextPosition::new(leaf, at), class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::memory::MemoryDocument;

    fn range_of(leaf: crate::document::NodeId, text: &str, pat: &str) -> TextRange {
        let start = text.find(pat).expect("pattern present");
        TextRange::new(
            TextPosition::new(leaf, start),
            TextPosition::new(leaf, start + pat.len()),
        )
    }

    #[test]
    fn test_expands_to_full_sentence() {
        let text = "We are discussing the iPhone 15 Pro. It has a new chip.";
        let (doc, leaf) = MemoryDocument::from_text(text);
        let expander = SentenceExpander::new();

        let out = expander.expand(&doc, &range_of(leaf, text, "15 Pro"));
        let model = PositionModel::new(&doc);
        assert_eq!(
            model.text_between(&out),
            "We are discussing the iPhone 15 Pro."
        );
    }

    #[test]
    fn test_soft_boundary_keeps_span_small() {
        let text = "Alpha beta, gamma delta epsilon, zeta omega. Next one.";
        let (doc, leaf) = MemoryDocument::from_text(text);
        let expander = SentenceExpander::new();

        let out = expander.expand(&doc, &range_of(leaf, text, "gamma delta epsilon"));
        let model = PositionModel::new(&doc);
        assert_eq!(model.text_between(&out), " gamma delta epsilon,");
    }

    #[test]
    fn test_phase_one_grows_right_first() {
        let text = "Hi, there we go. More text after.";
        let (doc, leaf) = MemoryDocument::from_text(text);
        let expander = SentenceExpander::new();

        let out = expander.expand(&doc, &range_of(leaf, text, "Hi"));
        let model = PositionModel::new(&doc);
        assert_eq!(model.text_between(&out), "Hi, there we go.");
    }

    #[test]
    fn test_phase_two_grows_left_when_right_exhausted() {
        let text = "One two three four. Five, six seven!";
        let (doc, leaf) = MemoryDocument::from_text(text);
        let expander = SentenceExpander::new();

        let out = expander.expand(&doc, &range_of(leaf, text, "six"));
        let model = PositionModel::new(&doc);
        assert_eq!(model.text_between(&out), " Five, six seven!");
    }

    #[test]
    fn test_cjk_sentence() {
        let text = "你好。世界和平真好。";
        let (doc, leaf) = MemoryDocument::from_text(text);
        let expander = SentenceExpander::new();

        let out = expander.expand(&doc, &range_of(leaf, text, "世界"));
        let model = PositionModel::new(&doc);
        assert_eq!(model.text_between(&out), "世界和平真好。");
    }

    #[test]
    fn test_no_terminator_falls_back_to_block() {
        let (doc, leaves) = MemoryDocument::from_paragraphs(&[
            "first paragraph has no punctuation at all",
            "second one neither",
        ]);
        let expander = SentenceExpander::new();
        let model = PositionModel::new(&doc);

        let text = "second one neither";
        let out = expander.expand(&doc, &range_of(leaves[1], text, "one"));
        assert_eq!(model.text_between(&out), "second one neither");
    }

    #[test]
    fn test_never_crosses_block_boundary() {
        let (doc, leaves) =
            MemoryDocument::from_paragraphs(&["heading words", "body text follows here."]);
        let expander = SentenceExpander::new();
        let model = PositionModel::new(&doc);

        let out = expander.expand(&doc, &range_of(leaves[0], "heading words", "words"));
        assert_eq!(model.text_between(&out), "heading words");
    }

    #[test]
    fn test_degrades_to_input_on_empty_leaf() {
        let mut b = crate::document::memory::DocumentBuilder::new();
        let root = b.root();
        let p = b.block(root);
        let leaf = b.text(p, "");
        let doc = b.build();
        let expander = SentenceExpander::new();

        let range = TextRange::collapsed(TextPosition::new(leaf, 0));
        let out = expander.expand(&doc, &range);
        assert_eq!(out, range);
    }
}
