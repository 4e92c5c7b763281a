//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2 window, the OpenGL 3.3
//! core context and the event pump every demo needs.

use std::sync::Arc;

use glow::HasContext;

use crate::config::WindowConfig;
use crate::error::{DemoError, Result};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub config: WindowConfig,
}

impl App {
    /// Opens a window as described by `config` and makes its GL context current.
    ///
    /// The width and height options are ignored if `fullscreen` is set to `true`.
    pub fn new(config: WindowConfig) -> Result<Self> {
        let sdl = sdl2::init().map_err(DemoError::Window)?;
        let video_subsystem = sdl.video().map_err(DemoError::Window)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_depth_size(24);
        gl_attr.set_double_buffer(true);

        let (width, height) = if config.fullscreen {
            let display_mode = video_subsystem
                .current_display_mode(0)
                .map_err(DemoError::Window)?;
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (config.width, config.height)
        };

        let mut window = video_subsystem
            .window(&config.title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| DemoError::Window(e.to_string()))?;
        if config.fullscreen {
            window
                .set_fullscreen(sdl2::video::FullscreenType::Desktop)
                .map_err(DemoError::Window)?;
        }

        let gl_context = window.gl_create_context().map_err(DemoError::Window)?;
        window
            .gl_make_current(&gl_context)
            .map_err(DemoError::Window)?;

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let gl = Arc::new(gl);

        unsafe {
            log::info!(
                "OpenGL {} on {} ({})",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR),
            );
            let (w, h) = window.drawable_size();
            gl.viewport(0, 0, w as i32, h as i32);
        }

        let event_pump = sdl.event_pump().map_err(DemoError::Window)?;

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
            config,
        })
    }

    /// Size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Clears the color and depth buffers to the configured clear color.
    pub fn clear(&self) {
        let c = self.config.clear_color;
        unsafe {
            self.gl.clear_color(c.x, c.y, c.z, c.w);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }
}
