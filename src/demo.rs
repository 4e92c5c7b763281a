//! The render loop shared by every demo.
//!
//! The loop is single-threaded: poll input, update, render, present, repeat. It ends when the
//! window is closed or Escape is pressed, both checked once per iteration.

use std::time::Instant;

use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use crate::abs::App;
use crate::error::Result;
use crate::input::{KeyboardState, MouseState, UpdateContext};

/// A program driven by [`run`].
pub trait Demo {
    /// Reacts to input before rendering.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Called after the viewport has been resized to the new drawable size.
    fn resized(&mut self, _width: u32, _height: u32) {}

    /// Draws one frame. The color and depth buffers have already been cleared.
    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) -> Result<()>;
}

/// Wall-clock time since the loop started.
pub struct Clock {
    start: Instant,
    last: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Advances the clock, returning `(elapsed, delta)` in seconds.
    pub fn tick(&mut self) -> (f64, f32) {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        (now.duration_since(self.start).as_secs_f64(), delta)
    }
}

/// Whether an event ends the loop.
pub fn is_exit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Runs `demo` until the window is closed or Escape is pressed.
pub fn run(app: &mut App, demo: &mut dyn Demo) -> Result<()> {
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();
    let mut clock = Clock::new();
    let mut frames: u64 = 0;

    'running: loop {
        keyboard.begin_frame();
        mouse.begin_frame();

        for event in app.event_pump.poll_iter() {
            if is_exit_event(&event) {
                break 'running;
            }
            match event {
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    log::debug!("Window resized to {width}x{height}");
                    let (w, h) = app.window.drawable_size();
                    unsafe {
                        app.gl.viewport(0, 0, w as i32, h as i32);
                    }
                    demo.resized(w, h);
                }
                Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => {
                    mouse.position = glam::Vec2::new(x as f32, y as f32);
                    mouse.delta += glam::Vec2::new(xrel as f32, yrel as f32);
                }
                Event::MouseWheel { x, y, .. } => {
                    mouse.scroll_delta += glam::Vec2::new(x as f32, y as f32);
                }
                Event::MouseButtonDown { mouse_btn, .. } => {
                    mouse.down.insert(mouse_btn);
                    mouse.pressed.insert(mouse_btn);
                }
                Event::MouseButtonUp { mouse_btn, .. } => {
                    mouse.down.remove(&mouse_btn);
                    mouse.released.insert(mouse_btn);
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard.down.insert(keycode);
                    keyboard.pressed.insert(keycode);
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    keyboard.down.remove(&keycode);
                    keyboard.released.insert(keycode);
                }
                _ => {}
            }
        }

        let (elapsed, delta_time) = clock.tick();
        let ctx = UpdateContext {
            keyboard: &keyboard,
            mouse: &mouse,
            elapsed,
            delta_time,
            viewport: app.drawable_size(),
        };

        demo.update(&ctx);
        app.clear();
        demo.render(&app.gl, &ctx)?;
        app.window.gl_swap_window();
        frames += 1;
    }

    let (elapsed, _) = clock.tick();
    log::info!(
        "Rendered {frames} frames in {elapsed:.1} s ({:.1} fps)",
        frames as f64 / elapsed.max(f64::EPSILON)
    );
    Ok(())
}
