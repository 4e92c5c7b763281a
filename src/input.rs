use std::collections::HashSet;

use glam::Vec2;
use sdl2::{keyboard::Keycode, mouse::MouseButton};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub position: Vec2,
    pub delta: Vec2,
    pub down: HashSet<MouseButton>,
    pub pressed: HashSet<MouseButton>,
    pub released: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl KeyboardState {
    /// Forgets the per-frame edges, keeping which keys are held.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

impl MouseState {
    /// Forgets the per-frame edges and motion, keeping which buttons are held.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.pressed.clear();
        self.released.clear();
    }
}

/// Context handed to a demo every frame.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    /// Seconds since the demo started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Drawable size in pixels.
    pub viewport: (u32, u32),
}

impl UpdateContext<'_> {
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1.max(1) as f32
    }
}
