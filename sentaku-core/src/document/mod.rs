//! Abstract document model
//!
//! The engine never touches a live render tree. It sees documents as an
//! ordered sequence of text-bearing leaves inside a node tree, reached
//! through the [`TextDocument`] trait: implementors supply tree structure,
//! node predicates, leaf text, a point-to-caret primitive, and rendered
//! rectangles for a range. [`position::PositionModel`] builds ordered
//! traversal, normalization, and block-boundary tests on top of that, and
//! [`memory::MemoryDocument`] is a self-contained implementation with
//! deterministic layout.

pub mod memory;
pub mod position;

use crate::geometry::{Point, Rect};
use position::{TextPosition, TextRange};

/// Opaque handle to a node within a [`TextDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Ordered text-leaf view of a document
///
/// Handles are only meaningful for the document that issued them and only
/// for the current document snapshot; callers must not hold ranges across
/// document mutation.
pub trait TextDocument {
    /// The document root node
    fn root(&self) -> NodeId;

    /// Parent of a node, `None` for the root
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children of a node in document order
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Check if the node is a text leaf
    fn is_text_leaf(&self, node: NodeId) -> bool;

    /// Text content of a leaf; empty for non-leaf nodes
    fn leaf_text(&self, leaf: NodeId) -> &str;

    /// Check if the node is a block-level container (paragraph, list item,
    /// heading, and similar structural breaks)
    fn is_block(&self, node: NodeId) -> bool;

    /// Check if the node roots an ignored subtree (the engine's own
    /// rendered UI: icons, tooltips, modals)
    fn is_ignored(&self, node: NodeId) -> bool;

    /// Check if the node is editable (form field or editable region)
    fn is_editable(&self, node: NodeId) -> bool;

    /// Check if the node is interactive (link, button, form control,
    /// interactive ARIA role, click handler)
    fn is_interactive(&self, node: NodeId) -> bool;

    /// Resolve a point to the zero-width caret position a text cursor
    /// would land on, `None` when no text exists at that point
    fn caret_at_point(&self, point: Point) -> Option<TextPosition>;

    /// Rendered bounding rectangles of a range, one per visual fragment
    fn range_rects(&self, range: &TextRange) -> Vec<Rect>;
}
