//! Core selection and sentence-boundary resolution algorithms
//!
//! This crate holds the pure algorithm layer of the selection resolution
//! engine: an abstract ordered text-leaf document model, position and
//! range arithmetic, two-tier terminator tables, Unicode script
//! classification, greedy sentence expansion, and word-character
//! classification. Everything here is synchronous and side-effect free;
//! orchestration lives one layer up.
//!
//! # Example
//!
//! ```rust
//! use sentaku_core::{MemoryDocument, PositionModel, SentenceExpander, TextPosition, TextRange};
//!
//! let text = "First things first. Second sentence here.";
//! let (doc, leaf) = MemoryDocument::from_text(text);
//!
//! // A selection covering just the word "Second"
//! let start = text.find("Second").unwrap();
//! let range = TextRange::new(
//!     TextPosition::new(leaf, start),
//!     TextPosition::new(leaf, start + "Second".len()),
//! );
//!
//! let expanded = SentenceExpander::new().expand(&doc, &range);
//! let model = PositionModel::new(&doc);
//! assert_eq!(model.text_between(&expanded), " Second sentence here.");
//! ```

pub mod document;
pub mod expand;
pub mod geometry;
pub mod script;
pub mod terminator;
pub mod word;

// Re-export key types
pub use document::memory::{DocumentBuilder, MemoryDocument};
pub use document::position::{PositionModel, TextPosition, TextRange};
pub use document::{NodeId, TextDocument};
pub use expand::SentenceExpander;
pub use geometry::{Point, Rect};
pub use terminator::TerminatorSet;
