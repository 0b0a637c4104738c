//! Public API for the sentaku selection and context resolution engine
//!
//! This crate provides a clean, stable interface over the resolution
//! engine: point at, click, or drag-select text in a document and get
//! back the exact word or sentence to translate, plus a decision on
//! whether translation should be offered at all.
//!
//! Rendering, translation backends, storage, and audio are external
//! collaborators: the resolver only consumes a [`sentaku_core::TextDocument`]
//! view, a settings snapshot, and an optional async language-detection
//! service, and produces verdicts.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod settings_watch;

use std::sync::Arc;

use sentaku_core::{SentenceExpander, TextDocument, TextRange};
use sentaku_engine::{
    LanguageDetector, PointerInput, Settings, SuppressionClassifier, Trigger, ValidationPipeline,
    Verdict,
};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{RangeDTO, VerdictDTO};
pub use error::{ApiError, Result};
pub use settings_watch::SettingsHandle;
pub use sentaku_engine::{RejectReason, ResolvedSelection};

/// Main entry point for selection resolution
///
/// Holds the classifier and the settings handle; documents are passed
/// into each call, so one resolver serves any number of documents. Every
/// resolution reads one immutable settings snapshot for its whole run.
pub struct SelectionResolver {
    classifier: SuppressionClassifier,
    settings: SettingsHandle,
    expander: SentenceExpander,
}

impl SelectionResolver {
    /// Create a resolver with default configuration and no detection
    /// backend
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a resolver for a target language
    pub fn with_language(code: &str) -> Result<Self> {
        Self::with_config(Config::for_language(code))
    }

    /// Create a resolver with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.settings.validate()?;
        Ok(Self {
            classifier: SuppressionClassifier::new(),
            settings: SettingsHandle::new(config.settings),
            expander: SentenceExpander::new(),
        })
    }

    /// Create a resolver with custom configuration and a detection
    /// service
    pub fn with_detector(config: Config, detector: Arc<dyn LanguageDetector>) -> Result<Self> {
        config.settings.validate()?;
        Ok(Self {
            classifier: SuppressionClassifier::with_detector(detector),
            settings: SettingsHandle::new(config.settings),
            expander: SentenceExpander::new(),
        })
    }

    /// The settings handle, for snapshots and change subscriptions
    pub fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    /// Replace the settings wholesale after validating them
    pub fn update_settings(&self, settings: Settings) -> Result<()> {
        settings.validate()?;
        self.settings.replace(settings);
        Ok(())
    }

    /// Validate a drag selection for the translate-icon path
    pub async fn validate_selection<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        range: Option<&TextRange>,
    ) -> Verdict {
        let snapshot = self.settings.snapshot();
        ValidationPipeline::new(&snapshot, &self.classifier)
            .validate_selection(doc, range, Trigger::SelectionIcon)
            .await
    }

    /// Resolve and validate the word under a click
    pub async fn resolve_word_click<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        input: &PointerInput,
    ) -> Verdict {
        let snapshot = self.settings.snapshot();
        ValidationPipeline::new(&snapshot, &self.classifier)
            .validate_click(doc, input, Trigger::WordClick)
            .await
    }

    /// Resolve and validate the sentence around a click
    pub async fn resolve_sentence_click<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        input: &PointerInput,
    ) -> Verdict {
        let snapshot = self.settings.snapshot();
        ValidationPipeline::new(&snapshot, &self.classifier)
            .validate_click(doc, input, Trigger::SentenceClick)
            .await
    }

    /// Expand a range to sentence bounds without running the gates
    pub fn expand_sentence<D: TextDocument + ?Sized>(
        &self,
        doc: &D,
        range: &TextRange,
    ) -> TextRange {
        self.expander.expand(doc, range)
    }
}

// Convenience functions

/// Validate a selection with a one-off resolver for the given language
pub async fn validate_selection<D: TextDocument + ?Sized>(
    doc: &D,
    range: &TextRange,
    target_language: &str,
) -> Result<Verdict> {
    let resolver = SelectionResolver::with_language(target_language)?;
    Ok(resolver.validate_selection(doc, Some(range)).await)
}
