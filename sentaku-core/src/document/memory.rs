//! In-memory document with deterministic monospace layout
//!
//! A self-contained [`TextDocument`] implementation for environments
//! without a native render tree, and the test vehicle for every
//! geometry-dependent code path. Layout is a fixed-metric monospace grid:
//! every block starts a new line, text wraps at a configurable column
//! count, and each character occupies one cell.

use super::position::{PositionModel, TextPosition, TextRange};
use super::{NodeId, TextDocument};
use crate::geometry::{Point, Rect};
use std::collections::BTreeMap;

/// Glyph cell width in pixels
pub const CHAR_WIDTH: f32 = 8.0;

/// Line height in pixels
pub const LINE_HEIGHT: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Block,
    Inline,
    Text,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeFlags {
    ignored: bool,
    editable: bool,
    interactive: bool,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
    text: String,
    flags: NodeFlags,
}

/// One laid-out character: its byte offset within the leaf and its grid
/// cell
#[derive(Debug, Clone, Copy)]
struct GlyphCell {
    offset: usize,
    line: u32,
    col: u32,
}

/// Builder for [`MemoryDocument`]
///
/// Node 0 is the root block; parents must be created before children.
#[derive(Debug)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
    wrap_cols: u32,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Create a builder holding only the root block
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Block,
                text: String::new(),
                flags: NodeFlags::default(),
            }],
            wrap_cols: 80,
        }
    }

    /// Set the wrap width in columns (default 80)
    pub fn wrap_cols(mut self, cols: u32) -> Self {
        self.wrap_cols = cols.max(1);
        self
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, text: String) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
            text,
            flags: NodeFlags::default(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Append a block-level container
    pub fn block(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, NodeKind::Block, String::new())
    }

    /// Append an inline container
    pub fn inline(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, NodeKind::Inline, String::new())
    }

    /// Append a text leaf
    pub fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
        self.push(parent, NodeKind::Text, content.to_string())
    }

    /// Mark a node as rooting an ignored subtree (engine-rendered UI)
    pub fn mark_ignored(&mut self, node: NodeId) {
        self.nodes[node.0 as usize].flags.ignored = true;
    }

    /// Mark a node as editable
    pub fn mark_editable(&mut self, node: NodeId) {
        self.nodes[node.0 as usize].flags.editable = true;
    }

    /// Mark a node as interactive
    pub fn mark_interactive(&mut self, node: NodeId) {
        self.nodes[node.0 as usize].flags.interactive = true;
    }

    /// Lay out the tree and freeze it into a document
    pub fn build(self) -> MemoryDocument {
        let mut glyphs: Vec<Vec<GlyphCell>> = vec![Vec::new(); self.nodes.len()];
        let mut line_lengths: Vec<u32> = Vec::new();
        let mut cursor = LayoutCursor { line: 0, col: 0 };
        layout_node(
            &self.nodes,
            0,
            self.wrap_cols,
            &mut cursor,
            &mut glyphs,
            &mut line_lengths,
        );
        MemoryDocument {
            nodes: self.nodes,
            glyphs,
            line_lengths,
        }
    }
}

struct LayoutCursor {
    line: u32,
    col: u32,
}

fn record_cell(line_lengths: &mut Vec<u32>, glyphs: &mut Vec<GlyphCell>, cell: GlyphCell) {
    if line_lengths.len() <= cell.line as usize {
        line_lengths.resize(cell.line as usize + 1, 0);
    }
    let len = &mut line_lengths[cell.line as usize];
    *len = (*len).max(cell.col + 1);
    glyphs.push(cell);
}

fn layout_node(
    nodes: &[Node],
    idx: usize,
    wrap: u32,
    cursor: &mut LayoutCursor,
    glyphs: &mut [Vec<GlyphCell>],
    line_lengths: &mut Vec<u32>,
) {
    let node = &nodes[idx];
    if node.kind == NodeKind::Block && cursor.col > 0 {
        cursor.line += 1;
        cursor.col = 0;
    }
    if node.kind == NodeKind::Text {
        for (offset, ch) in node.text.char_indices() {
            if ch == '\n' {
                record_cell(
                    line_lengths,
                    &mut glyphs[idx],
                    GlyphCell {
                        offset,
                        line: cursor.line,
                        col: cursor.col,
                    },
                );
                cursor.line += 1;
                cursor.col = 0;
                continue;
            }
            if cursor.col >= wrap {
                cursor.line += 1;
                cursor.col = 0;
            }
            record_cell(
                line_lengths,
                &mut glyphs[idx],
                GlyphCell {
                    offset,
                    line: cursor.line,
                    col: cursor.col,
                },
            );
            cursor.col += 1;
        }
    }
    for child in &node.children {
        layout_node(nodes, child.0 as usize, wrap, cursor, glyphs, line_lengths);
    }
}

/// In-memory tree document with monospace layout
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    glyphs: Vec<Vec<GlyphCell>>,
    line_lengths: Vec<u32>,
}

impl MemoryDocument {
    /// Build a document of one paragraph per input string
    ///
    /// Returns the document together with the text leaf of each
    /// paragraph.
    pub fn from_paragraphs(paragraphs: &[&str]) -> (Self, Vec<NodeId>) {
        let mut b = DocumentBuilder::new();
        let root = b.root();
        let leaves = paragraphs
            .iter()
            .map(|text| {
                let p = b.block(root);
                b.text(p, text)
            })
            .collect();
        (b.build(), leaves)
    }

    /// Build a single-paragraph document
    pub fn from_text(text: &str) -> (Self, NodeId) {
        let (doc, leaves) = Self::from_paragraphs(&[text]);
        (doc, leaves[0])
    }

    fn glyph_at(&self, line: u32, col: u32) -> Option<(NodeId, usize)> {
        for (idx, cells) in self.glyphs.iter().enumerate() {
            for cell in cells {
                if cell.line == line && cell.col == col {
                    return Some((NodeId(idx as u32), cell.offset));
                }
            }
        }
        None
    }

    fn push_leaf_cells(&self, leaf: NodeId, from: usize, to: usize, out: &mut Vec<(u32, u32)>) {
        for cell in &self.glyphs[leaf.0 as usize] {
            if cell.offset >= from && cell.offset < to {
                out.push((cell.line, cell.col));
            }
        }
    }
}

impl TextDocument for MemoryDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0 as usize)?.parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0 as usize)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn is_text_leaf(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .is_some_and(|n| n.kind == NodeKind::Text)
    }

    fn leaf_text(&self, leaf: NodeId) -> &str {
        self.nodes
            .get(leaf.0 as usize)
            .map(|n| n.text.as_str())
            .unwrap_or("")
    }

    fn is_block(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .is_some_and(|n| n.kind == NodeKind::Block)
    }

    fn is_ignored(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .is_some_and(|n| n.flags.ignored)
    }

    fn is_editable(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .is_some_and(|n| n.flags.editable)
    }

    fn is_interactive(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0 as usize)
            .is_some_and(|n| n.flags.interactive)
    }

    fn caret_at_point(&self, point: Point) -> Option<TextPosition> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let line = (point.y / LINE_HEIGHT).floor() as usize;
        if line >= self.line_lengths.len() {
            return None;
        }
        let line_len = self.line_lengths[line] as usize;
        if line_len == 0 {
            return None;
        }
        let col = (point.x / CHAR_WIDTH).floor() as usize;
        if col < line_len {
            let (leaf, offset) = self.glyph_at(line as u32, col as u32)?;
            Some(TextPosition::new(leaf, offset))
        } else {
            // Past the end of the line: the caret lands after its last
            // glyph, however far away the point is; the hit test is what
            // rejects distant clicks
            let (leaf, offset) = self.glyph_at(line as u32, line_len as u32 - 1)?;
            let ch = self.leaf_text(leaf)[offset..].chars().next()?;
            Some(TextPosition::new(leaf, offset + ch.len_utf8()))
        }
    }

    fn range_rects(&self, range: &TextRange) -> Vec<Rect> {
        let model = PositionModel::new(self);
        let mut cells: Vec<(u32, u32)> = Vec::new();
        if range.start.leaf == range.end.leaf {
            self.push_leaf_cells(
                range.start.leaf,
                range.start.offset,
                range.end.offset,
                &mut cells,
            );
        } else {
            self.push_leaf_cells(
                range.start.leaf,
                range.start.offset,
                usize::MAX,
                &mut cells,
            );
            let mut leaf = range.start.leaf;
            while let Some(next) = model.next_leaf(self.root(), leaf) {
                if next == range.end.leaf {
                    self.push_leaf_cells(next, 0, range.end.offset, &mut cells);
                    break;
                }
                self.push_leaf_cells(next, 0, usize::MAX, &mut cells);
                leaf = next;
            }
        }

        let mut by_line: BTreeMap<u32, (u32, u32)> = BTreeMap::new();
        for (line, col) in cells {
            let entry = by_line.entry(line).or_insert((col, col));
            entry.0 = entry.0.min(col);
            entry.1 = entry.1.max(col);
        }
        by_line
            .into_iter()
            .map(|(line, (min_col, max_col))| {
                Rect::new(
                    min_col as f32 * CHAR_WIDTH,
                    line as f32 * LINE_HEIGHT,
                    (max_col - min_col + 1) as f32 * CHAR_WIDTH,
                    LINE_HEIGHT,
                )
            })
            .collect()
    }
}
