//! Selection validation pipeline
//!
//! A strictly ordered gate sequence that turns a selection or a click
//! into one verdict: a resolved range plus its text, or a
//! machine-readable rejection. Every gate returns data, never an error;
//! all failures degrade to "do nothing". The only suspension point is
//! the suppression check, which receives plain string copies captured
//! before the await, so a document mutation during detection cannot tear
//! the inputs.

use sentaku_core::{
    PositionModel, SentenceExpander, TextDocument, TextRange,
};
use tracing::debug;

use crate::classifier::SuppressionClassifier;
use crate::event::{PointerButton, PointerInput};
use crate::resolver::resolve_word_at;
use crate::settings::Settings;

/// Which gesture initiated the resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Drag selection followed by the translate icon
    SelectionIcon,
    /// Single click resolving one word
    WordClick,
    /// Single click resolving the surrounding sentence
    SentenceClick,
}

/// Why a gesture was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing is selected or the range is collapsed
    NoSelection,
    /// The global feature toggle is off
    FeatureDisabled,
    /// The toggle for this specific trigger is off
    TriggerDisabled,
    /// The range contains no text after trimming
    EmptyText,
    /// The selection exceeds the length cap
    TooLong,
    /// Only digits, whitespace, punctuation, or symbols
    Contentless,
    /// The text already appears to be in the target language
    SuppressedNative,
    /// The range sits inside an editable element
    InsideEditable,
    /// The range sits inside the engine's own rendered UI
    InsideExtensionUi,
    /// Wrong button or a handler already claimed the event
    InvalidEvent,
    /// A modifier key was held
    ModifierPressed,
    /// The click landed on an interactive element
    InteractiveElement,
    /// No word exists at the clicked point
    NoWordAtPoint,
    /// The resolved word exceeds the word length cap
    WordTooLong,
}

impl RejectReason {
    /// Stable machine-readable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::NoSelection => "no-selection",
            RejectReason::FeatureDisabled => "feature-disabled",
            RejectReason::TriggerDisabled => "trigger-disabled",
            RejectReason::EmptyText => "empty-text",
            RejectReason::TooLong => "too-long",
            RejectReason::Contentless => "contentless",
            RejectReason::SuppressedNative => "suppressed-native",
            RejectReason::InsideEditable => "inside-editable",
            RejectReason::InsideExtensionUi => "inside-extension-ui",
            RejectReason::InvalidEvent => "invalid-event",
            RejectReason::ModifierPressed => "modifier-pressed",
            RejectReason::InteractiveElement => "interactive-element",
            RejectReason::NoWordAtPoint => "no-word-at-point",
            RejectReason::WordTooLong => "word-too-long",
        }
    }

    /// Whether the caller must tear down transient UI (an already shown
    /// icon) despite the rejection
    pub fn should_cleanup(&self) -> bool {
        match self {
            RejectReason::NoSelection
            | RejectReason::EmptyText
            | RejectReason::TooLong
            | RejectReason::SuppressedNative
            | RejectReason::InsideEditable
            | RejectReason::FeatureDisabled => true,
            RejectReason::TriggerDisabled
            | RejectReason::Contentless
            | RejectReason::InsideExtensionUi
            | RejectReason::InvalidEvent
            | RejectReason::ModifierPressed
            | RejectReason::InteractiveElement
            | RejectReason::NoWordAtPoint
            | RejectReason::WordTooLong => false,
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated selection ready for translation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    /// The resolved range
    pub range: TextRange,
    /// Trimmed text extracted from the range
    pub text: String,
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The gesture resolved to translatable text
    Valid(ResolvedSelection),
    /// The gesture was rejected
    Invalid {
        /// Why the gesture was rejected
        reason: RejectReason,
        /// Whether transient UI must be torn down
        cleanup: bool,
    },
}

impl Verdict {
    fn reject(reason: RejectReason) -> Self {
        debug!(reason = reason.as_str(), "gesture rejected");
        Verdict::Invalid {
            reason,
            cleanup: reason.should_cleanup(),
        }
    }

    /// Check if the gesture was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }

    /// Rejection reason, `None` for valid verdicts
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Valid(_) => None,
            Verdict::Invalid { reason, .. } => Some(*reason),
        }
    }

    /// Whether the caller must tear down transient UI
    pub fn should_cleanup(&self) -> bool {
        matches!(self, Verdict::Invalid { cleanup: true, .. })
    }
}

/// The gate sequence over one settings snapshot
///
/// Holds no cross-call state: construct one per gesture from the current
/// snapshot. Idempotent for unchanged inputs, so an in-flight run made
/// stale by a newer gesture is harmless; callers treat only the most
/// recent result as authoritative.
#[derive(Debug)]
pub struct ValidationPipeline<'a> {
    settings: &'a Settings,
    classifier: &'a SuppressionClassifier,
    expander: SentenceExpander,
}

impl<'a> ValidationPipeline<'a> {
    /// Create a pipeline over a settings snapshot and classifier
    pub fn new(settings: &'a Settings, classifier: &'a SuppressionClassifier) -> Self {
        Self {
            settings,
            classifier,
            expander: SentenceExpander::new(),
        }
    }

    fn trigger_enabled(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::SelectionIcon => self.settings.selection_icon,
            Trigger::WordClick => self.settings.word_click,
            Trigger::SentenceClick => self.settings.sentence_click,
        }
    }

    /// Validate a drag selection (or any pre-existing range)
    pub async fn validate_selection<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        range: Option<&TextRange>,
        trigger: Trigger,
    ) -> Verdict {
        let Some(range) = range else {
            return Verdict::reject(RejectReason::NoSelection);
        };
        if range.is_collapsed() {
            return Verdict::reject(RejectReason::NoSelection);
        }
        if !self.settings.enabled {
            return Verdict::reject(RejectReason::FeatureDisabled);
        }
        if !self.trigger_enabled(trigger) {
            return Verdict::reject(RejectReason::TriggerDisabled);
        }
        self.finish(doc, *range, trigger).await
    }

    /// Validate a single click, resolving the word (and for the sentence
    /// trigger, the surrounding sentence) at the point
    pub async fn validate_click<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        input: &PointerInput,
        trigger: Trigger,
    ) -> Verdict {
        if !self.settings.enabled {
            return Verdict::reject(RejectReason::FeatureDisabled);
        }
        if !self.trigger_enabled(trigger) {
            return Verdict::reject(RejectReason::TriggerDisabled);
        }
        if input.default_prevented || input.button != PointerButton::Primary {
            return Verdict::reject(RejectReason::InvalidEvent);
        }
        if input.modifiers.any() {
            return Verdict::reject(RejectReason::ModifierPressed);
        }
        if input.path.iter().any(|&node| doc.is_interactive(node)) {
            return Verdict::reject(RejectReason::InteractiveElement);
        }

        let Some(word) = resolve_word_at(doc, input.point) else {
            return Verdict::reject(RejectReason::NoWordAtPoint);
        };
        let model = PositionModel::new(doc);
        let word_len = model.text_between(&word).chars().count();
        if word_len > self.settings.max_word_chars {
            return Verdict::reject(RejectReason::WordTooLong);
        }

        let range = match trigger {
            Trigger::SentenceClick => self.expander.expand(doc, &word),
            _ => word,
        };
        self.finish(doc, range, trigger).await
    }

    /// Gates shared by both entry paths: text extraction, length,
    /// content, suppression, and structural exclusion
    async fn finish<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        range: TextRange,
        trigger: Trigger,
    ) -> Verdict {
        let model = PositionModel::new(doc);

        let text = model.text_between(&range);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Verdict::reject(RejectReason::EmptyText);
        }
        if trimmed.chars().count() > self.settings.max_selection_chars {
            return Verdict::reject(RejectReason::TooLong);
        }
        if !trimmed.chars().any(char::is_alphabetic) {
            return Verdict::reject(RejectReason::Contentless);
        }

        // Click paths always suppress; the icon path honors the toggle
        let check_suppression = match trigger {
            Trigger::WordClick | Trigger::SentenceClick => true,
            Trigger::SelectionIcon => self.settings.suppress_native,
        };
        if check_suppression {
            // Capture plain copies before suspending; no live positions
            // cross the await
            let context = model.context_window(&range, self.settings.context_radius);
            let text = trimmed.to_string();
            let show = self
                .classifier
                .should_show(&text, &self.settings.target_language, Some(&context))
                .await;
            if !show {
                return Verdict::reject(RejectReason::SuppressedNative);
            }
        }

        if self.has_ancestor(doc, range.start.leaf, |d, n| d.is_editable(n)) {
            return Verdict::reject(RejectReason::InsideEditable);
        }
        if self.has_ancestor(doc, range.start.leaf, |d, n| d.is_ignored(n)) {
            return Verdict::reject(RejectReason::InsideExtensionUi);
        }

        Verdict::Valid(ResolvedSelection {
            range,
            text: trimmed.to_string(),
        })
    }

    fn has_ancestor<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        leaf: sentaku_core::NodeId,
        pred: impl Fn(&D, sentaku_core::NodeId) -> bool,
    ) -> bool {
        let mut cur = Some(leaf);
        while let Some(node) = cur {
            if pred(doc, node) {
                return true;
            }
            cur = doc.parent(node);
        }
        false
    }
}
