//! Window management using GLFW
//!
//! Provides cross-platform window creation with an OpenGL context and event
//! handling for the application loop.

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or context creation failed
    #[error("window creation failed")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Owns the library handle, the window with its OpenGL context, and the
/// event receiver. GLFW is initialized here and torn down when the last
/// window is dropped; one window per process is the supported mode.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with an OpenGL context and vsync enabled
    ///
    /// Requests the best context the host supports without the caller
    /// needing to know which: 3.2 core forward-compatible on macOS, 3.3
    /// core elsewhere. GLFW diagnostics are routed to the log facade.
    ///
    /// # Errors
    /// [`WindowError::InitializationFailed`] if the library cannot start,
    /// [`WindowError::CreationFailed`] if no window or context can be made.
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::log_errors).map_err(|_| WindowError::InitializationFailed)?;

        // Decide the GL version: macOS only offers core profiles and wants
        // forward compatibility; everywhere else 3.3 core is the baseline.
        if cfg!(target_os = "macos") {
            glfw.window_hint(glfw::WindowHint::ContextVersion(3, 2));
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                glfw::OpenGlProfileHint::Core,
            ));
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        } else {
            glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                glfw::OpenGlProfileHint::Core,
            ));
        }
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_all_polling(true);
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Load the OpenGL function table through this window's context
    ///
    /// The context must be current, which [`Window::new`] guarantees.
    pub fn load_gl(&mut self) -> glow::Context {
        unsafe {
            glow::Context::from_loader_function(|name| {
                self.window.get_proc_address(name).cast()
            })
        }
    }

    /// Whether the user or the OS asked the window to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set or clear the close flag
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Poll pending OS events; returns immediately if none are pending
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events gathered by the last poll
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Window size in screen coordinates
    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Framebuffer size in pixels (differs from size on high-DPI displays)
    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width as u32, height as u32)
    }

    /// Make this window's GL context current on the calling thread
    pub fn make_current(&mut self) {
        self.window.make_current();
    }

    /// Present the rendered frame (blocks on the vsync interval)
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Set the window icon; pixel data is read, not retained
    pub fn set_icon(&mut self, images: Vec<glfw::PixelImage>) {
        self.window.set_icon_from_pixels(images);
    }
}
