//! Application loop and layer-stack ownership
//!
//! [`App`] owns the window, the GL function table, the UI context and
//! renderer, and the ordered layer stack. Construction performs the whole
//! process-wide setup (windowing library, UI context, fonts, theme); drop
//! tears everything down in reverse dependency order.

use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use glow::HasContext;
use imgui::{ConfigFlags, StyleColor};
use imgui_glow_renderer::{Renderer, SimpleTextureMap};

use crate::image::Image;
use crate::layer::{Layer, LayerStack};
use crate::window::Window;
use crate::{fonts, platform, style};

/// Framebuffer clear color, premultiplied at the clear call
const CLEAR_COLOR: [f32; 4] = [0.45, 0.55, 0.60, 1.00];

/// Window or device failures have no recovery path: a GUI application with
/// no window has no reason to continue.
fn fatal(message: &str, e: impl std::fmt::Display) -> ! {
    log::error!("{message}: {e}");
    std::process::exit(1);
}

/// The application's face toward its layers
///
/// Handed to every layer hook in place of a back-reference to the [`App`]
/// itself. Configuration changes and layers pushed through the context are
/// applied at the end of the current frame, so a layer pushed mid-frame is
/// first rendered on the next one.
pub struct AppContext {
    gl: Rc<glow::Context>,
    window_size: (u32, u32),
    framebuffer_size: (u32, u32),
    pending_layers: Vec<Box<dyn Layer>>,
    pending_flags: Vec<(ConfigFlags, bool)>,
    close_requested: bool,
}

impl AppContext {
    pub(crate) fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            window_size: (0, 0),
            framebuffer_size: (0, 0),
            pending_layers: Vec::new(),
            pending_flags: Vec::new(),
            close_requested: false,
        }
    }

    pub(crate) fn begin_frame(&mut self, window_size: (u32, u32), framebuffer_size: (u32, u32)) {
        self.window_size = window_size;
        self.framebuffer_size = framebuffer_size;
    }

    /// The GL function table, for [`Image::send_to_device`] and friends
    #[must_use]
    pub const fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Current window size in screen coordinates
    #[must_use]
    pub const fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Current framebuffer size in pixels
    #[must_use]
    pub const fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer_size
    }

    /// Queue a layer for the tail of the stack
    ///
    /// The layer is attached at the end of the current frame and rendered
    /// from the next frame on.
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) {
        self.pending_layers.push(layer);
    }

    /// Ask the application to leave the main loop after this frame
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Enable docking at the end of the current frame
    pub fn enable_docking(&mut self) {
        self.pending_flags.push((ConfigFlags::DOCKING_ENABLE, true));
    }

    /// Disable docking at the end of the current frame
    pub fn disable_docking(&mut self) {
        self.pending_flags.push((ConfigFlags::DOCKING_ENABLE, false));
    }

    /// Enable multi-viewport platform windows at the end of the current frame
    pub fn enable_viewports(&mut self) {
        self.pending_flags
            .push((ConfigFlags::VIEWPORTS_ENABLE, true));
    }

    /// Disable multi-viewport platform windows at the end of the current frame
    pub fn disable_viewports(&mut self) {
        self.pending_flags
            .push((ConfigFlags::VIEWPORTS_ENABLE, false));
    }

    /// Enable gamepad navigation at the end of the current frame
    pub fn enable_gamepad(&mut self) {
        self.pending_flags
            .push((ConfigFlags::NAV_ENABLE_GAMEPAD, true));
    }

    /// Disable gamepad navigation at the end of the current frame
    pub fn disable_gamepad(&mut self) {
        self.pending_flags
            .push((ConfigFlags::NAV_ENABLE_GAMEPAD, false));
    }

    /// Enable keyboard navigation at the end of the current frame
    pub fn enable_keyboard(&mut self) {
        self.pending_flags
            .push((ConfigFlags::NAV_ENABLE_KEYBOARD, true));
    }

    /// Disable keyboard navigation at the end of the current frame
    pub fn disable_keyboard(&mut self) {
        self.pending_flags
            .push((ConfigFlags::NAV_ENABLE_KEYBOARD, false));
    }

    pub(crate) fn take_pending_layers(&mut self) -> Vec<Box<dyn Layer>> {
        std::mem::take(&mut self.pending_layers)
    }

    pub(crate) fn take_pending_flags(&mut self) -> Vec<(ConfigFlags, bool)> {
        std::mem::take(&mut self.pending_flags)
    }

    pub(crate) fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }
}

/// A windowed immediate-mode application
///
/// Owns the whole stack for one process run: windowing library, window with
/// GL context, UI context and renderer, and the layer stack. Exactly one
/// instance per process is supported; the underlying bindings are
/// process-wide singletons.
pub struct App {
    // Field order is drop order: layers are detached in the Drop impl,
    // the renderer is destroyed there too, then the UI context goes away
    // before the window and the windowing library itself.
    layers: LayerStack,
    ctx: AppContext,
    renderer: Renderer,
    texture_map: SimpleTextureMap,
    imgui: imgui::Context,
    gl: Rc<glow::Context>,
    window: Window,
    last_frame: Instant,
}

impl App {
    /// Build the application window and the full UI stack
    ///
    /// Creates the window with the host's best-available GL context, loads
    /// the GL function table, creates the UI context with keyboard
    /// navigation enabled, populates the font atlas (default font plus
    /// merged icon fonts), applies the default theme, and initializes the
    /// renderer.
    ///
    /// Window or context creation failure is fatal: the error is logged and
    /// the process exits. No partially-constructed application is ever
    /// observable.
    #[must_use]
    pub fn new(width: u32, height: u32, title: &str) -> Self {
        log::info!("creating application window {width}x{height} \"{title}\"");
        let mut window = match Window::new(title, width, height) {
            Ok(window) => window,
            Err(e) => fatal("window creation failed", e),
        };
        let gl = Rc::new(window.load_gl());

        let mut imgui = imgui::Context::create();
        imgui
            .io_mut()
            .config_flags
            .insert(ConfigFlags::NAV_ENABLE_KEYBOARD);
        fonts::install(&mut imgui, Path::new(fonts::DEFAULT_FONT_DIR));
        style::apply_default(imgui.style_mut());

        let mut texture_map = SimpleTextureMap::default();
        let renderer = match Renderer::initialize(&gl, &mut imgui, &mut texture_map, true) {
            Ok(renderer) => renderer,
            Err(e) => fatal("UI renderer initialization failed", e),
        };

        log::info!("application initialized");
        Self {
            layers: LayerStack::default(),
            ctx: AppContext::new(Rc::clone(&gl)),
            renderer,
            texture_map,
            imgui,
            gl,
            window,
            last_frame: Instant::now(),
        }
    }

    /// Push a layer onto the tail of the stack
    ///
    /// Ownership transfers to the application and the layer's
    /// [`Layer::on_attach`] hook runs immediately. Push order defines
    /// render and teardown order.
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer, &mut self.ctx);
    }

    /// Set the window icon from an image; pixel data is read, not retained
    pub fn set_icon(&mut self, image: &Image) {
        let pixels = image
            .pixels()
            .iter()
            .map(|p| u32::from_ne_bytes([p.r, p.g, p.b, p.a]))
            .collect();
        self.window.set_icon(vec![glfw::PixelImage {
            width: image.width(),
            height: image.height(),
            pixels,
        }]);
    }

    /// Mutable access to the UI style table, for pre-run customization
    pub fn style_mut(&mut self) -> &mut imgui::Style {
        self.imgui.style_mut()
    }

    /// Mutable access to the UI IO state, for pre-run customization
    pub fn io_mut(&mut self) -> &mut imgui::Io {
        self.imgui.io_mut()
    }

    /// Enable docking (off by default)
    pub fn enable_docking(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .insert(ConfigFlags::DOCKING_ENABLE);
    }

    /// Disable docking
    pub fn disable_docking(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .remove(ConfigFlags::DOCKING_ENABLE);
    }

    /// Enable multi-viewport platform windows (off by default)
    pub fn enable_viewports(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .insert(ConfigFlags::VIEWPORTS_ENABLE);
    }

    /// Disable multi-viewport platform windows
    pub fn disable_viewports(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .remove(ConfigFlags::VIEWPORTS_ENABLE);
    }

    /// Enable gamepad navigation (off by default)
    pub fn enable_gamepad(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .insert(ConfigFlags::NAV_ENABLE_GAMEPAD);
    }

    /// Disable gamepad navigation
    pub fn disable_gamepad(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .remove(ConfigFlags::NAV_ENABLE_GAMEPAD);
    }

    /// Enable keyboard navigation (on by default)
    pub fn enable_keyboard(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .insert(ConfigFlags::NAV_ENABLE_KEYBOARD);
    }

    /// Disable keyboard navigation
    pub fn disable_keyboard(&mut self) {
        self.imgui
            .io_mut()
            .config_flags
            .remove(ConfigFlags::NAV_ENABLE_KEYBOARD);
    }

    /// Run the main loop, blocking until the window is closed
    ///
    /// Each iteration polls pending events without blocking, begins a UI
    /// frame, renders every layer in push order, clears the framebuffer,
    /// submits the frame's draw data, services platform windows when
    /// multi-viewport mode is on, and presents. The only pacing is the
    /// display's vsync interval. A panic in a layer's render hook
    /// propagates and ends the loop.
    pub fn run(&mut self) {
        // When viewports are enabled, platform windows should look
        // identical to regular ones. Checked here rather than at
        // construction so callers can flip the flag any time before run.
        if self
            .imgui
            .io()
            .config_flags
            .contains(ConfigFlags::VIEWPORTS_ENABLE)
        {
            let style = self.imgui.style_mut();
            style.window_rounding = 0.0;
            style[StyleColor::WindowBg][3] = 1.0;
        }

        log::info!("entering main loop");
        self.last_frame = Instant::now();
        while !self.window.should_close() {
            self.window.poll_events();
            for (_, event) in self.window.flush_events() {
                platform::handle_event(self.imgui.io_mut(), &event);
            }
            self.last_frame =
                platform::prepare_frame(self.imgui.io_mut(), &self.window, self.last_frame);
            self.ctx
                .begin_frame(self.window.get_size(), self.window.get_framebuffer_size());

            let ui = self.imgui.new_frame();
            self.layers.render_all(ui, &mut self.ctx);

            let draw_data = self.imgui.render();

            let (fb_width, fb_height) = self.window.get_framebuffer_size();
            unsafe {
                self.gl.viewport(0, 0, fb_width as i32, fb_height as i32);
                self.gl.clear_color(
                    CLEAR_COLOR[0] * CLEAR_COLOR[3],
                    CLEAR_COLOR[1] * CLEAR_COLOR[3],
                    CLEAR_COLOR[2] * CLEAR_COLOR[3],
                    CLEAR_COLOR[3],
                );
                self.gl.clear(glow::COLOR_BUFFER_BIT);
            }

            if let Err(e) = self.renderer.render(&self.gl, &self.texture_map, draw_data) {
                fatal("frame submission failed", e);
            }

            // Platform window updates may switch the active GL context, so
            // the window's own context is restored before presenting.
            if self
                .imgui
                .io()
                .config_flags
                .contains(ConfigFlags::VIEWPORTS_ENABLE)
            {
                self.imgui.update_platform_windows();
                self.imgui.render_platform_windows_default();
                self.window.make_current();
            }

            self.window.swap_buffers();
            self.end_frame();
        }
        log::info!("main loop finished");
    }

    /// Apply everything layers queued on the context during the frame
    fn end_frame(&mut self) {
        for layer in self.ctx.take_pending_layers() {
            self.layers.push(layer, &mut self.ctx);
        }
        for (flag, on) in self.ctx.take_pending_flags() {
            self.imgui.io_mut().config_flags.set(flag, on);
        }
        if self.ctx.take_close_request() {
            self.window.set_should_close(true);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        log::info!("shutting down application ({} layers)", self.layers.len());
        self.layers.detach_all(&mut self.ctx);
        self.renderer.destroy(&self.gl);
    }
}
