//! Window presentation and input-event synthesis over `minifb`.
//!
//! `minifb` exposes polled state (is the button down, where is the pointer)
//! rather than an event queue, so the wrapper compares each tick's state
//! against the previous one and synthesizes ordered [`InputEvent`]s:
//! press/release edges, motion deltas, scroll steps, bound keys, and window
//! close. Events within a tick preserve arrival order: a press precedes the
//! motions that follow it, and a release comes last.

use super::BackendError;
use crate::draw::Canvas;
use crate::input::{InputEvent, Key};
use minifb::{KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Frame pacing target for the interaction loop.
const TARGET_FPS: usize = 30;

/// A window presenting the canvas buffer, with input polling.
pub struct PixelWindow {
    window: Window,
    mouse_down: bool,
    last_motion: Option<(i32, i32)>,
}

impl PixelWindow {
    /// Opens a window sized to the surface.
    pub fn new(title: &str, width: i32, height: i32) -> Result<Self, BackendError> {
        let mut window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .map_err(|e| BackendError::WindowCreate(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self {
            window,
            mouse_down: false,
            last_motion: None,
        })
    }

    /// Drains this tick's input as ordered events.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        if !self.window.is_open() {
            return vec![InputEvent::Quit];
        }

        let mut events = Vec::new();

        if self.window.is_key_pressed(minifb::Key::Escape, KeyRepeat::No) {
            events.push(InputEvent::Key(Key::Escape));
        }
        if self.window.is_key_pressed(minifb::Key::S, KeyRepeat::No) {
            events.push(InputEvent::Key(Key::Char('s')));
        }

        if let Some((_, sy)) = self.window.get_scroll_wheel() {
            let steps = sy.round() as i32;
            if steps != 0 {
                events.push(InputEvent::Scroll { steps });
            }
        }

        if let Some((fx, fy)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            let pos = (fx as i32, fy as i32);
            let down = self.window.get_mouse_down(MouseButton::Left);

            if down && !self.mouse_down {
                events.push(InputEvent::ButtonPress { x: pos.0, y: pos.1 });
            } else if self.last_motion != Some(pos) {
                events.push(InputEvent::Motion { x: pos.0, y: pos.1 });
            }
            if !down && self.mouse_down {
                events.push(InputEvent::ButtonRelease);
            }

            self.mouse_down = down;
            self.last_motion = Some(pos);
        }

        events
    }

    /// Pushes the canvas buffer to the screen, honoring the pacing target.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), BackendError> {
        self.window
            .update_with_buffer(
                canvas.buffer(),
                canvas.width() as usize,
                canvas.height() as usize,
            )
            .map_err(|e| BackendError::Present(e.to_string()))
    }
}
