//! Tool mode selection.

/// The active tool mode, owned by the toolbar.
///
/// A single tagged value replaces the scattered per-tool booleans of a
/// classic paint program, so mutually exclusive modes cannot be selected
/// together. Selecting any toolbar control resets the mode before
/// re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Freehand drawing - strokes follow the pointer (default)
    #[default]
    Freehand,
    /// Straight line - two clicks pick the endpoints
    Line,
    /// Rectangle outline - two clicks pick opposite corners
    Rect,
    /// Pick the brush color from a canvas pixel
    ColorDropper,
    /// Paint with the background color; brush attributes are restored on exit
    Eraser,
}

impl ToolMode {
    /// Returns true for modes that capture canvas clicks instead of
    /// starting a stroke.
    ///
    /// The eraser is not exclusive: it draws ordinary freehand strokes,
    /// just with overridden brush attributes.
    pub fn is_exclusive(self) -> bool {
        matches!(self, ToolMode::Line | ToolMode::Rect | ToolMode::ColorDropper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_modes_are_not_exclusive() {
        assert!(!ToolMode::Freehand.is_exclusive());
        assert!(!ToolMode::Eraser.is_exclusive());
        assert!(ToolMode::Line.is_exclusive());
        assert!(ToolMode::Rect.is_exclusive());
        assert!(ToolMode::ColorDropper.is_exclusive());
    }
}
