//! Per-frame toolbar painting.
//!
//! The band is repainted over the canvas buffer every tick: button chrome,
//! palette swatches, the live brush preview, and 5x7 bitmap labels. This is
//! deliberately plain flat-color rendering; the canvas below the band is
//! never touched.

use super::Toolbar;
use super::glyphs::{self, GLYPH_ADVANCE, GLYPH_HEIGHT};
use super::layout::CANVAS_TOP;
use crate::draw::{Canvas, Color, PALETTE};
use crate::input::{Brush, BrushStyle, ToolMode};
use crate::util::Rect;

const BAND_BG: Color = Color {
    r: 0xf2,
    g: 0xf2,
    b: 0xf2,
};
const BUTTON_BG: Color = Color {
    r: 0xdd,
    g: 0xdd,
    b: 0xdd,
};
const OUTLINE: Color = Color {
    r: 0x66,
    g: 0x66,
    b: 0x66,
};
const INK: Color = Color {
    r: 0x00,
    g: 0x00,
    b: 0x00,
};
const PREVIEW_BG: Color = Color {
    r: 0xff,
    g: 0xff,
    b: 0xff,
};

/// Repaints the toolbar band onto the canvas buffer.
pub fn render(toolbar: &Toolbar, brush: &Brush, canvas: &mut Canvas) {
    let layout = toolbar.layout();

    // Band background including the dead zone, with a separator above the
    // drawable region.
    canvas.fill_rect(Rect::new(0, 0, canvas.width(), CANVAS_TOP), BAND_BG);
    canvas.fill_rect(Rect::new(0, CANVAS_TOP - 1, canvas.width(), 1), OUTLINE);

    let mode = toolbar.mode();
    let style = brush.style();

    button(canvas, layout.pencil_button, "PEN", style == BrushStyle::Pencil);
    button(canvas, layout.stamp_button, "BRUSH", style == BrushStyle::Stamp);
    button(canvas, layout.grow_button, "+", false);
    button(canvas, layout.shrink_button, "-", false);
    button(canvas, layout.eraser_button, "ERASER", mode == ToolMode::Eraser);
    button(
        canvas,
        layout.dropper_button,
        "PICK",
        mode == ToolMode::ColorDropper,
    );
    button(canvas, layout.line_button, "LINE", mode == ToolMode::Line);
    button(canvas, layout.rect_button, "RECT", mode == ToolMode::Rect);
    button(canvas, layout.save_button, "SAVE", false);
    button(canvas, layout.clear_button, "CLEAR", false);

    for (region, color) in layout.swatches.iter().zip(PALETTE) {
        canvas.fill_rect(*region, color);
        canvas.outline_rect(*region, OUTLINE, 1);
    }

    preview(canvas, layout.preview, brush);
}

fn button(canvas: &mut Canvas, region: Rect, label: &str, active: bool) {
    canvas.fill_rect(region, BUTTON_BG);
    if active {
        canvas.outline_rect(region, INK, 2);
    } else {
        canvas.outline_rect(region, OUTLINE, 1);
    }
    let x = region.x + (region.width - glyphs::text_width(label)).max(0) / 2;
    let y = region.y + (region.height - GLYPH_HEIGHT) / 2;
    text(canvas, x, y, label, INK);
}

/// Live brush preview: the tip at current size and color, plus the size as
/// a numeric readout. Tips wider than the box fall back to a capped circle.
fn preview(canvas: &mut Canvas, region: Rect, brush: &Brush) {
    canvas.fill_rect(region, PREVIEW_BG);
    canvas.outline_rect(region, OUTLINE, 1);

    let cx = region.x + region.width / 2;
    let cy = region.y + region.height / 2;
    let cap = region.width / 2 - 2;
    let size = brush.size();
    match brush.style() {
        BrushStyle::Stamp if size <= cap => {
            canvas.blit(brush.stamp().current(), cx - size, cy - size);
        }
        _ => canvas.fill_circle(cx, cy, size.min(cap), brush.color()),
    }

    let readout = size.to_string();
    text(
        canvas,
        region.x + 3,
        region.y + region.height - GLYPH_HEIGHT - 2,
        &readout,
        INK,
    );
}

fn text(canvas: &mut Canvas, mut x: i32, y: i32, s: &str, color: Color) {
    for ch in s.chars() {
        if let Some(rows) = glyphs::glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5 {
                    if bits & (1 << (4 - col)) != 0 {
                        canvas.set_pixel(x + col, y + row as i32, color);
                    }
                }
            }
        }
        x += GLYPH_ADVANCE;
    }
}
