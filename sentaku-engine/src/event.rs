//! Pointer event data for the click validation path
//!
//! A plain-data mirror of the gesture information the environment
//! delivers: coordinates, button, modifier state, whether a handler
//! already claimed the event, and the composed event path used for
//! interactive-element detection across shadow boundaries.

use sentaku_core::{NodeId, Point};

/// Which pointer button produced the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a tap
    Primary,
    /// Middle button or wheel press
    Auxiliary,
    /// Secondary button, usually the right mouse button
    Secondary,
}

/// Modifier key state at event time
///
/// Modified clicks are reserved for alternate gestures and never trigger
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Alt/Option held
    pub alt: bool,
    /// Control held
    pub ctrl: bool,
    /// Shift held
    pub shift: bool,
    /// Meta/Command held
    pub meta: bool,
}

impl Modifiers {
    /// Check if any modifier is held
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.shift || self.meta
    }
}

/// One pointer gesture as delivered by the environment
#[derive(Debug, Clone)]
pub struct PointerInput {
    /// Event coordinates in document space
    pub point: Point,
    /// Button that produced the event
    pub button: PointerButton,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Whether a page handler already called `preventDefault`
    pub default_prevented: bool,
    /// Composed event path, target first, up to the root
    pub path: Vec<NodeId>,
}

impl PointerInput {
    /// A plain unmodified primary-button click at a point
    pub fn click_at(point: Point) -> Self {
        Self {
            point,
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
            default_prevented: false,
            path: Vec::new(),
        }
    }

    /// Attach the composed event path
    pub fn with_path(mut self, path: Vec<NodeId>) -> Self {
        self.path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_any() {
        assert!(!Modifiers::default().any());
        assert!(Modifiers {
            shift: true,
            ..Modifiers::default()
        }
        .any());
    }

    #[test]
    fn test_click_at_defaults() {
        let input = PointerInput::click_at(Point::new(1.0, 2.0));
        assert_eq!(input.button, PointerButton::Primary);
        assert!(!input.default_prevented);
        assert!(input.path.is_empty());
    }
}
