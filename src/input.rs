// --- File: input.rs ---
use glam::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// One frame's worth of pointer input.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InputSample {
    pub pressed: bool,
    pub position: Vec2,
}

impl InputSample {
    pub fn pressed_at(position: Vec2) -> Self {
        Self {
            pressed: true,
            position,
        }
    }
}

/// Anything that can be sampled once per frame for a press.
pub trait InputSource {
    fn poll(&mut self) -> InputSample;
}

/// Tracks cursor and touch events from the window and latches the most
/// recent press until the next `poll`.
#[derive(Debug, Default)]
pub struct PointerInput {
    cursor: Vec2,
    pending_press: Option<Vec2>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a window event. Returns true if the event was pointer input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.press_at(self.cursor);
                true
            }
            WindowEvent::Touch(touch) => {
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.cursor = location;
                if touch.phase == TouchPhase::Started {
                    self.press_at(location);
                }
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn press_at(&mut self, position: Vec2) {
        self.pending_press = Some(position);
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

impl InputSource for PointerInput {
    fn poll(&mut self) -> InputSample {
        match self.pending_press.take() {
            Some(position) => InputSample::pressed_at(position),
            None => InputSample {
                pressed: false,
                position: self.cursor,
            },
        }
    }
}

// --- End of File: input.rs ---
