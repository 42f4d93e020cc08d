//! Brush state and the stroke engine.
//!
//! The brush owns the drawing attributes (color, size, style), the freehand
//! stroke state machine, the two-click capture state for the line and
//! rectangle tools, and the saved-attribute record that lets the eraser
//! temporarily override attributes and restore them later.

use crate::draw::{Canvas, Color, Stamp};
use crate::util::Rect;
use log::debug;
use std::collections::HashSet;

/// Smallest selectable brush size.
pub const MIN_SIZE: i32 = 1;
/// Largest selectable brush size.
pub const MAX_SIZE: i32 = 32;

/// How the brush tip is rendered at each stroke point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushStyle {
    /// Filled circle of the brush size in the brush color
    Pencil,
    /// Alpha-blit of the pre-rendered tinted tip bitmap
    Stamp,
}

/// A brush attribute that can be withheld from a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushAttr {
    Color,
    Size,
    Style,
}

/// Attributes stashed away while an override (the eraser) is active.
///
/// Each field is independently optional: the color dropper, used while
/// erasing, redirects its pick into `color` here so the eventual restore
/// applies the picked color instead of resurrecting a stale one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavedAttributes {
    pub color: Option<Color>,
    pub size: Option<i32>,
    pub style: Option<BrushStyle>,
}

/// Drawing state plus the interpolating stroke renderer.
pub struct Brush {
    color: Color,
    size: i32,
    style: BrushStyle,
    stamp: Stamp,
    drawing: bool,
    last_pos: Option<(i32, i32)>,
    line_anchor: Option<(i32, i32)>,
    rect_anchor: Option<(i32, i32)>,
    saved: Option<SavedAttributes>,
}

impl Brush {
    /// Creates a brush with the given initial attributes.
    pub fn new(color: Color, size: i32, style: BrushStyle) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            color,
            size,
            style,
            stamp: Stamp::new(color, size),
            drawing: false,
            last_pos: None,
            line_anchor: None,
            rect_anchor: None,
            saved: None,
        }
    }

    /// Current brush color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current brush size.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Current tip style.
    pub fn style(&self) -> BrushStyle {
        self.style
    }

    /// True strictly between stroke start and stroke end.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The tip bitmap at the current size, for stamp rendering and preview.
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// The saved-attribute record, if an override is active.
    pub fn saved(&self) -> Option<&SavedAttributes> {
        self.saved.as_ref()
    }

    /// Begins a freehand stroke at `pos`.
    ///
    /// Always overwrites `last_pos`, so a stale position from a previous
    /// stroke can never leak into the new one.
    pub fn start_stroke(&mut self, pos: (i32, i32)) {
        self.drawing = true;
        self.last_pos = Some(pos);
    }

    /// Ends the current stroke. The last position is kept; the next stroke
    /// start overwrites it.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Extends the active stroke to `pos`, rendering the tip at every
    /// interpolated point between the last sample and this one.
    ///
    /// No-op unless a stroke is active. A missing last position is treated
    /// as a zero-length segment rather than an error.
    pub fn stroke_to(&mut self, canvas: &mut Canvas, pos: (i32, i32)) {
        if !self.drawing {
            return;
        }
        let from = self.last_pos.unwrap_or(pos);
        for point in points_between(from, pos) {
            self.render_tip(canvas, point);
        }
        self.last_pos = Some(pos);
    }

    /// One click of the two-click line tool.
    ///
    /// The first click anchors the line; the second commits a straight line
    /// from the anchor to `pos` at the current color and thickness, then
    /// clears the anchor so a third click starts a fresh line.
    pub fn place_line_point(&mut self, canvas: &mut Canvas, pos: (i32, i32)) {
        match self.line_anchor.take() {
            None => self.line_anchor = Some(pos),
            Some(start) => {
                canvas.draw_line(start.0, start.1, pos.0, pos.1, self.color, self.size);
            }
        }
    }

    /// One click of the two-click rectangle tool.
    ///
    /// The second click commits an outlined rectangle between the two
    /// corners. The corners are normalized by x (swapped when the anchor is
    /// to the right of the second point); width is the x extent and height
    /// the absolute y extent.
    pub fn place_rect_point(&mut self, canvas: &mut Canvas, pos: (i32, i32)) {
        match self.rect_anchor.take() {
            None => self.rect_anchor = Some(pos),
            Some(anchor) => {
                let (start, end) = if anchor.0 > pos.0 {
                    (pos, anchor)
                } else {
                    (anchor, pos)
                };
                let rect = Rect::new(start.0, start.1, end.0 - start.0, (end.1 - start.1).abs());
                canvas.outline_rect(rect, self.color, self.size);
            }
        }
    }

    /// Pending anchor of the line tool, if the first click has been placed.
    pub fn line_anchor(&self) -> Option<(i32, i32)> {
        self.line_anchor
    }

    /// Pending anchor of the rectangle tool, if the first click has been placed.
    pub fn rect_anchor(&self) -> Option<(i32, i32)> {
        self.rect_anchor
    }

    /// Sets the brush size, clamped to [`MIN_SIZE`]..=[`MAX_SIZE`], and
    /// refreshes the cached stamp tip.
    pub fn set_size(&mut self, size: i32) {
        let clamped = size.clamp(MIN_SIZE, MAX_SIZE);
        if clamped != self.size {
            self.size = clamped;
            self.stamp.rescale(clamped);
            debug!("brush size set to {clamped}");
        }
    }

    /// Sets the brush color and re-tints the stamp tip in place.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.stamp.retint(color);
        debug!("brush color set to {color:?}");
    }

    /// Switches the tip style. Pure state change; nothing is drawn.
    pub fn set_style(&mut self, style: BrushStyle) {
        self.style = style;
        debug!("brush style set to {style:?}");
    }

    /// Stashes all three attributes ahead of a temporary override.
    ///
    /// No-op while an override is already active, so re-selecting the
    /// eraser cannot replace the stash with the override values.
    pub fn save_attributes(&mut self) {
        if self.saved.is_none() {
            self.saved = Some(SavedAttributes {
                color: Some(self.color),
                size: Some(self.size),
                style: Some(self.style),
            });
        }
    }

    /// Re-applies stashed attributes through their setters, skipping any
    /// named in `keep`, then drops the stash unconditionally.
    ///
    /// `keep` names the attributes the caller has just set explicitly (a
    /// style button passes `Style`, a palette swatch passes `Color`), so the
    /// restore never silently overwrites a fresh selection.
    pub fn restore_attributes(&mut self, keep: &[BrushAttr]) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        if let Some(color) = saved.color {
            if !keep.contains(&BrushAttr::Color) {
                self.set_color(color);
            }
        }
        if let Some(size) = saved.size {
            if !keep.contains(&BrushAttr::Size) {
                self.set_size(size);
            }
        }
        if let Some(style) = saved.style {
            if !keep.contains(&BrushAttr::Style) {
                self.set_style(style);
            }
        }
    }

    /// Applies a color picked from the canvas.
    ///
    /// While an override with a stashed color is active the pick lands in
    /// the stash, leaving the override color (the background) untouched;
    /// otherwise it becomes the live color immediately.
    pub fn pick_color(&mut self, color: Color) {
        if let Some(saved) = &mut self.saved {
            if saved.color.is_some() {
                saved.color = Some(color);
                return;
            }
        }
        self.set_color(color);
    }

    fn render_tip(&self, canvas: &mut Canvas, pos: (i32, i32)) {
        match self.style {
            BrushStyle::Pencil => canvas.fill_circle(pos.0, pos.1, self.size, self.color),
            BrushStyle::Stamp => {
                canvas.blit(self.stamp.current(), pos.0 - self.size, pos.1 - self.size)
            }
        }
    }
}

/// Computes the pixel points a stroke segment passes through.
///
/// Walks from `from` toward `to` in unit steps along the segment direction,
/// one step per whole pixel of distance, rounding each position half-up.
/// The result is duplicate-free; order is irrelevant because tip rendering
/// is idempotent per point. A zero-length segment yields just `from`.
fn points_between(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let dx = (to.0 - from.0) as f64;
    let dy = (to.1 - from.1) as f64;
    let dist = (dx * dx + dy * dy).sqrt();

    let mut points = vec![from];
    if dist >= 1.0 {
        let step_x = dx / dist;
        let step_y = dy / dist;
        let (mut x, mut y) = (from.0 as f64, from.1 as f64);
        for _ in 0..dist as i64 {
            x += step_x;
            y += step_y;
            points.push(((x + 0.5).floor() as i32, (y + 0.5).floor() as i32));
        }
    }

    let mut seen = HashSet::with_capacity(points.len());
    points.retain(|p| seen.insert(*p));
    points
}
