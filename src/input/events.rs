//! Generic input event types decoupled from the windowing backend.

/// Generic key representation for cross-backend compatibility.
///
/// The backend maps its native key codes to these values; only keys with a
/// bound action are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key
    Char(char),
    /// Escape key (clears the canvas)
    Escape,
}

/// A single input event in surface coordinates.
///
/// Events are delivered strictly in arrival order within a tick, so a
/// press / motion / release sequence is always observed in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed at (x, y)
    ButtonPress { x: i32, y: i32 },
    /// Pointer moved to (x, y)
    Motion { x: i32, y: i32 },
    /// Primary button released
    ButtonRelease,
    /// Vertical scroll; positive steps grow the brush, negative shrink it
    Scroll { steps: i32 },
    /// Key with a bound action was pressed
    Key(Key),
    /// The window was closed
    Quit,
}
