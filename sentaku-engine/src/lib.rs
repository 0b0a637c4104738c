//! Orchestration layer for selection resolution
//!
//! This crate sequences the core algorithms into the engine a caller
//! drives: word resolution from pointer coordinates, native-language
//! suppression with an async detection fallback, and the validation
//! pipeline that turns gestures into verdicts.

#![warn(missing_docs)]

pub mod classifier;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod resolver;
pub mod settings;

// Re-export key types
pub use classifier::{LanguageDetector, NullDetector, SuppressionClassifier};
pub use error::{EngineError, Result};
pub use event::{Modifiers, PointerButton, PointerInput};
pub use pipeline::{RejectReason, ResolvedSelection, Trigger, ValidationPipeline, Verdict};
pub use resolver::resolve_word_at;
pub use settings::Settings;

// Re-export from core for convenience
pub use sentaku_core::{Point, TextDocument, TextPosition, TextRange};
