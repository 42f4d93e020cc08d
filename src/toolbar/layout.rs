//! Fixed toolbar geometry.
//!
//! The toolbar occupies a band across the top of the surface. Hit regions
//! use fixed positions; only the save and clear buttons are anchored to the
//! right edge, so the layout is computed once from the surface width.

use crate::util::Rect;

/// Height of the toolbar band; clicks at or above this line hit the toolbar.
pub const BAND_HEIGHT: i32 = 74;

/// First row of the drawable canvas region. The rows between the band and
/// this line are a dead zone that neither dispatches nor draws.
pub const CANVAS_TOP: i32 = 84;

/// Narrowest surface that fits every toolbar control.
pub const MIN_SURFACE_WIDTH: i32 = 720;

/// Shortest surface that leaves a usable drawing region below the band.
pub const MIN_SURFACE_HEIGHT: i32 = 200;

/// Named hit regions for every toolbar control.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Pencil style button
    pub pencil_button: Rect,
    /// Stamp style button
    pub stamp_button: Rect,
    /// Brush size +1
    pub grow_button: Rect,
    /// Brush size -1
    pub shrink_button: Rect,
    /// Live brush preview box (display only, not a hit region)
    pub preview: Rect,
    /// 16 palette swatches, in palette order
    pub swatches: [Rect; 16],
    /// Eraser button
    pub eraser_button: Rect,
    /// Color dropper button
    pub dropper_button: Rect,
    /// Two-click line tool button
    pub line_button: Rect,
    /// Two-click rectangle tool button
    pub rect_button: Rect,
    /// Save snapshot button (right-anchored)
    pub save_button: Rect,
    /// Clear canvas button (right-anchored)
    pub clear_button: Rect,
}

impl Layout {
    /// Computes the layout for a surface of the given width.
    pub fn new(surface_width: i32) -> Self {
        let mut swatches = [Rect::new(0, 0, 0, 0); 16];
        let mut x = 254;
        for (i, slot) in swatches.iter_mut().enumerate() {
            *slot = Rect::new(x, 10 + (i as i32 % 2) * 32, 32, 32);
            if i % 2 == 1 {
                x += 32;
            }
        }

        Self {
            pencil_button: Rect::new(10, 10, 64, 64),
            stamp_button: Rect::new(74, 10, 64, 64),
            grow_button: Rect::new(138, 10, 32, 32),
            shrink_button: Rect::new(138, 42, 32, 32),
            preview: Rect::new(180, 10, 64, 64),
            swatches,
            eraser_button: Rect::new(530, 10, 64, 64),
            dropper_button: Rect::new(604, 10, 32, 32),
            line_button: Rect::new(638, 10, 32, 32),
            rect_button: Rect::new(638, 42, 32, 32),
            save_button: Rect::new(surface_width - 32, 10, 32, 32),
            clear_button: Rect::new(surface_width - 32, 42, 32, 32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_form_eight_columns_of_two() {
        let layout = Layout::new(1200);
        assert_eq!(layout.swatches[0], Rect::new(254, 10, 32, 32));
        assert_eq!(layout.swatches[1], Rect::new(254, 42, 32, 32));
        assert_eq!(layout.swatches[2], Rect::new(286, 10, 32, 32));
        assert_eq!(layout.swatches[15], Rect::new(478, 42, 32, 32));
    }

    #[test]
    fn save_and_clear_hug_the_right_edge() {
        let layout = Layout::new(1200);
        assert_eq!(layout.save_button, Rect::new(1168, 10, 32, 32));
        assert_eq!(layout.clear_button, Rect::new(1168, 42, 32, 32));
    }

    #[test]
    fn controls_fit_inside_the_minimum_width() {
        let layout = Layout::new(MIN_SURFACE_WIDTH);
        assert!(layout.rect_button.x + layout.rect_button.width <= layout.save_button.x);
        assert!(layout.clear_button.y + layout.clear_button.height <= BAND_HEIGHT);
    }
}
