//! Immutable settings snapshot
//!
//! The pipeline never reads mutable global state: callers take a snapshot
//! of the user's settings and pass it by reference into every resolution
//! call. Refreshing on a change notification means replacing the whole
//! value, never mutating a field in place.

use crate::error::{EngineError, Result};

/// Default cap on selection length, in characters
pub const DEFAULT_MAX_SELECTION_CHARS: usize = 1000;

/// Default cap on click-resolved word length, in characters
pub const DEFAULT_MAX_WORD_CHARS: usize = 48;

/// Default context window radius around a range, in characters per side
pub const DEFAULT_CONTEXT_RADIUS: usize = 120;

/// One immutable snapshot of the user's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Target translation language code, e.g. `"zh-CN"` or `"en"`
    pub target_language: String,
    /// Global feature toggle
    pub enabled: bool,
    /// Show the translate icon after a drag selection
    pub selection_icon: bool,
    /// Translate a word on single click
    pub word_click: bool,
    /// Translate the surrounding sentence on click
    pub sentence_click: bool,
    /// Suppress translation of text already in the target language
    /// (icon path only; click paths always suppress)
    pub suppress_native: bool,
    /// Cap on selection length in characters
    pub max_selection_chars: usize,
    /// Cap on click-resolved word length in characters
    pub max_word_chars: usize,
    /// Context window radius in characters per side
    pub context_radius: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_language: "en".to_string(),
            enabled: true,
            selection_icon: true,
            word_click: true,
            sentence_click: true,
            suppress_native: true,
            max_selection_chars: DEFAULT_MAX_SELECTION_CHARS,
            max_word_chars: DEFAULT_MAX_WORD_CHARS,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

impl Settings {
    /// Create a snapshot for a target language with everything else at
    /// defaults
    pub fn for_language(code: impl Into<String>) -> Self {
        Self {
            target_language: code.into(),
            ..Self::default()
        }
    }

    /// Validate the snapshot
    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(EngineError::InvalidLanguage(self.target_language.clone()));
        }
        if self.max_selection_chars == 0 {
            return Err(EngineError::Config(
                "max_selection_chars must be positive".to_string(),
            ));
        }
        if self.max_word_chars == 0 {
            return Err(EngineError::Config(
                "max_word_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_language_rejected() {
        let settings = Settings::for_language("  ");
        assert!(matches!(
            settings.validate(),
            Err(EngineError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_zero_caps_rejected() {
        let settings = Settings {
            max_selection_chars: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(EngineError::Config(_))));
    }
}
