//! Toolbar hit-testing and tool-mode dispatch.
//!
//! The toolbar owns the active [`ToolMode`] and the fixed hit-region layout.
//! It receives clicks that land in the band, mutates brush and canvas state
//! accordingly, and hands save requests to the interaction loop instead of
//! performing I/O itself.

pub mod glyphs;
pub mod layout;
pub mod render;

pub use layout::{BAND_HEIGHT, CANVAS_TOP, Layout, MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH};

use crate::draw::{BACKGROUND, Canvas, PALETTE};
use crate::input::{Brush, BrushAttr, BrushStyle, ToolMode};
use log::{debug, info};

/// Brush size applied while the eraser override is active.
pub const ERASER_SIZE: i32 = 10;

/// Hit-region layout, mode state, and dispatch for the toolbar band.
pub struct Toolbar {
    layout: Layout,
    mode: ToolMode,
    pending_save: bool,
}

impl Toolbar {
    /// Creates a toolbar laid out for a surface of the given width.
    pub fn new(surface_width: i32) -> Self {
        Self {
            layout: Layout::new(surface_width),
            mode: ToolMode::Freehand,
            pending_save: false,
        }
    }

    /// The active tool mode.
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// The computed hit-region layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Requests a snapshot save on the next loop iteration.
    pub fn request_save(&mut self) {
        self.pending_save = true;
    }

    /// Takes and clears the pending save request.
    ///
    /// The interaction loop drains this each tick so persistence runs
    /// outside dispatch and its failures never affect toolbar state.
    pub fn take_pending_save(&mut self) -> bool {
        std::mem::take(&mut self.pending_save)
    }

    /// Dispatches a click at (x, y) to the matching hit region.
    ///
    /// The mode is reset to freehand up front and re-derived by the match,
    /// so a stale exclusive mode never survives a toolbar interaction. The
    /// regions are tested in a fixed priority order; the first hit performs
    /// its action and wins. Returns false when no region contains the point.
    pub fn dispatch(&mut self, brush: &mut Brush, canvas: &mut Canvas, x: i32, y: i32) -> bool {
        self.mode = ToolMode::Freehand;
        let layout = &self.layout;

        if layout.clear_button.contains(x, y) {
            canvas.fill(BACKGROUND);
            info!("canvas cleared");
            return true;
        }

        if layout.rect_button.contains(x, y) {
            self.mode = ToolMode::Rect;
            debug!("tool mode: rectangle");
            return true;
        }

        if layout.line_button.contains(x, y) {
            self.mode = ToolMode::Line;
            debug!("tool mode: line");
            return true;
        }

        if layout.save_button.contains(x, y) {
            self.pending_save = true;
            return true;
        }

        if layout.dropper_button.contains(x, y) {
            self.mode = ToolMode::ColorDropper;
            debug!("tool mode: color dropper");
            return true;
        }

        if layout.eraser_button.contains(x, y) {
            brush.save_attributes();
            brush.set_style(BrushStyle::Pencil);
            brush.set_color(BACKGROUND);
            brush.set_size(ERASER_SIZE);
            self.mode = ToolMode::Eraser;
            debug!("tool mode: eraser");
            return true;
        }

        if layout.pencil_button.contains(x, y) {
            brush.set_style(BrushStyle::Pencil);
            brush.restore_attributes(&[BrushAttr::Style]);
            return true;
        }

        if layout.stamp_button.contains(x, y) {
            brush.set_style(BrushStyle::Stamp);
            brush.restore_attributes(&[BrushAttr::Style]);
            return true;
        }

        if layout.grow_button.contains(x, y) {
            brush.set_size(brush.size() + 1);
            return true;
        }

        if layout.shrink_button.contains(x, y) {
            brush.set_size(brush.size() - 1);
            return true;
        }

        for (region, color) in layout.swatches.iter().zip(PALETTE) {
            if region.contains(x, y) {
                brush.set_color(color);
                brush.restore_attributes(&[BrushAttr::Color]);
                return true;
            }
        }

        false
    }

    /// Applies the color under (x, y) to the brush (color dropper).
    ///
    /// Out-of-bounds positions are ignored. The brush decides whether the
    /// pick lands in the live color or the saved override record.
    pub fn sample_color(&self, brush: &mut Brush, canvas: &Canvas, x: i32, y: i32) {
        if let Some(color) = canvas.pixel(x, y) {
            brush.pick_color(color);
        }
    }
}
