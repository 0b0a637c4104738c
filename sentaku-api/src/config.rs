//! High-level configuration API

use crate::error::{ApiError, Result};
use sentaku_engine::Settings;

/// High-level configuration for the resolver
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) settings: Settings,
}

impl Config {
    /// Create a configuration for a target language with everything else
    /// at defaults
    pub fn for_language(code: impl Into<String>) -> Self {
        Self {
            settings: Settings::for_language(code),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The underlying settings snapshot
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the target language code
    pub fn target_language(mut self, code: impl Into<String>) -> Self {
        self.config.settings.target_language = code.into();
        self
    }

    /// Toggle the whole engine
    pub fn enabled(mut self, on: bool) -> Self {
        self.config.settings.enabled = on;
        self
    }

    /// Toggle the translate icon after a drag selection
    pub fn selection_icon(mut self, on: bool) -> Self {
        self.config.settings.selection_icon = on;
        self
    }

    /// Toggle word translation on single click
    pub fn word_click(mut self, on: bool) -> Self {
        self.config.settings.word_click = on;
        self
    }

    /// Toggle sentence translation on click
    pub fn sentence_click(mut self, on: bool) -> Self {
        self.config.settings.sentence_click = on;
        self
    }

    /// Toggle native-language suppression for the icon path
    pub fn suppress_native(mut self, on: bool) -> Self {
        self.config.settings.suppress_native = on;
        self
    }

    /// Cap the selection length in characters
    pub fn max_selection_chars(mut self, cap: usize) -> Self {
        self.config.settings.max_selection_chars = cap;
        self
    }

    /// Cap the click-resolved word length in characters
    pub fn max_word_chars(mut self, cap: usize) -> Self {
        self.config.settings.max_word_chars = cap;
        self
    }

    /// Set the context window radius in characters per side
    pub fn context_radius(mut self, radius: usize) -> Self {
        self.config.settings.context_radius = radius;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .settings
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_roundtrip() {
        let config = Config::builder()
            .target_language("zh-CN")
            .suppress_native(false)
            .max_selection_chars(500)
            .build()
            .unwrap();

        assert_eq!(config.settings().target_language, "zh-CN");
        assert!(!config.settings().suppress_native);
        assert_eq!(config.settings().max_selection_chars, 500);
    }

    #[test]
    fn test_builder_rejects_empty_language() {
        let result = Config::builder().target_language("").build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_zero_cap() {
        let result = Config::builder().max_word_chars(0).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
