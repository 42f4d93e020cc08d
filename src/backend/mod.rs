//! The interaction loop driving the paint surface.
//!
//! A single-threaded fixed-rate loop owns the canvas, brush, toolbar, and
//! window. Each tick it drains the synthesized input events in arrival
//! order, routes them by screen region and active tool mode, performs any
//! pending snapshot save, repaints the toolbar band, and presents the
//! frame. All state mutation happens on this thread.

pub mod window;

pub use window::PixelWindow;

use crate::draw::{BACKGROUND, BLACK, Canvas};
use crate::input::{Brush, BrushStyle, InputEvent, Key, ToolMode};
use crate::snapshot::{self, SaveConfig};
use crate::toolbar::{self, BAND_HEIGHT, CANVAS_TOP, Toolbar};
use crate::util::Rect;
use thiserror::Error;

/// Default brush size on startup.
const INITIAL_BRUSH_SIZE: i32 = 4;

/// Errors from window creation or frame presentation.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to create window: {0}")]
    WindowCreate(String),

    #[error("failed to present frame: {0}")]
    Present(String),
}

/// Parameters for a paint session.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Surface width in pixels.
    pub width: i32,
    /// Surface height in pixels.
    pub height: i32,
    /// Snapshot destination settings.
    pub save: SaveConfig,
}

/// Opens the window and runs the interaction loop until quit.
pub fn run(options: RunOptions) -> Result<(), BackendError> {
    let mut canvas = Canvas::new(options.width, options.height, BACKGROUND);
    let mut brush = Brush::new(BLACK, INITIAL_BRUSH_SIZE, BrushStyle::Pencil);
    let mut toolbar = Toolbar::new(options.width);
    let mut window = PixelWindow::new("Paintboard", options.width, options.height)?;

    let drawing_region = Rect::new(0, CANVAS_TOP, options.width, options.height - CANVAS_TOP);

    'session: loop {
        for event in window.poll_events() {
            if !apply_event(event, &mut toolbar, &mut brush, &mut canvas) {
                break 'session;
            }
        }

        if toolbar.take_pending_save() {
            // Fire-and-forget: a failed save is reported and drawing goes on.
            match snapshot::save_region(&canvas, drawing_region, &options.save) {
                Ok(path) => log::info!("snapshot saved to {}", path.display()),
                Err(err) => log::error!("snapshot failed: {err}"),
            }
        }

        toolbar::render::render(&toolbar, &brush, &mut canvas);
        window.present(&canvas)?;
    }

    Ok(())
}

/// Routes one input event. Returns false when the session should end.
///
/// Presses inside the toolbar band go to dispatch; presses in the drawing
/// region either start a stroke or feed the active exclusive tool. Motion
/// extends the active stroke, release ends it, Escape clears the canvas.
fn apply_event(
    event: InputEvent,
    toolbar: &mut Toolbar,
    brush: &mut Brush,
    canvas: &mut Canvas,
) -> bool {
    match event {
        InputEvent::ButtonPress { x, y } => {
            if y <= BAND_HEIGHT {
                toolbar.dispatch(brush, canvas, x, y);
            } else if y >= CANVAS_TOP {
                match toolbar.mode() {
                    ToolMode::ColorDropper => toolbar.sample_color(brush, canvas, x, y),
                    ToolMode::Line => brush.place_line_point(canvas, (x, y)),
                    ToolMode::Rect => brush.place_rect_point(canvas, (x, y)),
                    ToolMode::Freehand | ToolMode::Eraser => brush.start_stroke((x, y)),
                }
            }
        }
        InputEvent::Motion { x, y } => {
            if y >= CANVAS_TOP {
                brush.stroke_to(canvas, (x, y));
            }
        }
        InputEvent::ButtonRelease => brush.end_stroke(),
        InputEvent::Scroll { steps } => brush.set_size(brush.size() + steps),
        InputEvent::Key(Key::Escape) => canvas.fill(BACKGROUND),
        InputEvent::Key(Key::Char('s')) => toolbar.request_save(),
        InputEvent::Key(Key::Char(_)) => {}
        InputEvent::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PALETTE;

    fn fixture() -> (Toolbar, Brush, Canvas) {
        (
            Toolbar::new(1200),
            Brush::new(BLACK, INITIAL_BRUSH_SIZE, BrushStyle::Pencil),
            Canvas::new(1200, 800, BACKGROUND),
        )
    }

    fn press(x: i32, y: i32) -> InputEvent {
        InputEvent::ButtonPress { x, y }
    }

    #[test]
    fn press_move_release_paints_a_stroke() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        apply_event(press(100, 200), &mut toolbar, &mut brush, &mut canvas);
        apply_event(
            InputEvent::Motion { x: 160, y: 200 },
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        apply_event(
            InputEvent::ButtonRelease,
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );

        assert_eq!(canvas.pixel(130, 200), Some(BLACK));
        assert!(!brush.is_drawing());
    }

    #[test]
    fn motion_in_the_band_does_not_extend_a_stroke() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        apply_event(press(100, 200), &mut toolbar, &mut brush, &mut canvas);
        apply_event(
            InputEvent::Motion { x: 100, y: 40 },
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        // Nothing above the drawing region was painted.
        assert_eq!(canvas.pixel(100, 40), Some(BACKGROUND));
        assert!(brush.is_drawing());
    }

    #[test]
    fn band_press_dispatches_instead_of_drawing() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        let swatch = toolbar.layout().swatches[0];
        apply_event(
            press(swatch.x + 5, swatch.y + 5),
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        assert_eq!(brush.color(), PALETTE[0]);
        assert!(!brush.is_drawing());
    }

    #[test]
    fn dead_zone_press_neither_dispatches_nor_draws() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        apply_event(press(400, 79), &mut toolbar, &mut brush, &mut canvas);
        assert!(!brush.is_drawing());
        assert_eq!(toolbar.mode(), ToolMode::Freehand);
    }

    #[test]
    fn line_mode_routes_presses_to_the_line_tool() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        let button = toolbar.layout().line_button;
        apply_event(
            press(button.x + 5, button.y + 5),
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        apply_event(press(100, 100), &mut toolbar, &mut brush, &mut canvas);
        apply_event(press(300, 100), &mut toolbar, &mut brush, &mut canvas);

        assert_eq!(canvas.pixel(200, 100), Some(BLACK));
        assert!(brush.line_anchor().is_none());
        assert!(!brush.is_drawing());
    }

    #[test]
    fn dropper_mode_picks_instead_of_stroking() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        canvas.fill_rect(Rect::new(500, 500, 4, 4), PALETTE[6]);

        let button = toolbar.layout().dropper_button;
        apply_event(
            press(button.x + 5, button.y + 5),
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        apply_event(press(501, 501), &mut toolbar, &mut brush, &mut canvas);

        assert_eq!(brush.color(), PALETTE[6]);
        assert!(!brush.is_drawing());
    }

    #[test]
    fn escape_clears_the_canvas() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        canvas.fill(BLACK);
        apply_event(
            InputEvent::Key(Key::Escape),
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        assert_eq!(canvas.pixel(600, 400), Some(BACKGROUND));
    }

    #[test]
    fn scroll_steps_the_brush_size_with_clamping() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        apply_event(
            InputEvent::Scroll { steps: 3 },
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        assert_eq!(brush.size(), INITIAL_BRUSH_SIZE + 3);
        apply_event(
            InputEvent::Scroll { steps: -100 },
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        assert_eq!(brush.size(), 1);
    }

    #[test]
    fn save_key_requests_a_snapshot() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        apply_event(
            InputEvent::Key(Key::Char('s')),
            &mut toolbar,
            &mut brush,
            &mut canvas,
        );
        assert!(toolbar.take_pending_save());
    }

    #[test]
    fn quit_ends_the_session() {
        let (mut toolbar, mut brush, mut canvas) = fixture();
        assert!(!apply_event(
            InputEvent::Quit,
            &mut toolbar,
            &mut brush,
            &mut canvas
        ));
    }
}
