//! # imframe
//!
//! Application boilerplate for windowed, immediate-mode graphical tools.
//!
//! The crate opens an OS window with an OpenGL context, drives a per-frame
//! render loop, hosts an ordered stack of pluggable [`Layer`]s that each
//! draw UI through Dear ImGui, and offers a small bitmap [`Image`]
//! abstraction that loads/saves from disk and uploads to a GPU texture for
//! display.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imframe::prelude::*;
//!
//! struct Hello;
//!
//! impl Layer for Hello {
//!     fn render(&mut self, ui: &Ui, _ctx: &mut AppContext) {
//!         ui.window("hello").build(|| {
//!             ui.text("Hello from a layer!");
//!         });
//!     }
//! }
//!
//! fn main() {
//!     let mut app = App::new(1280, 720, "hello");
//!     app.push_layer(Box::new(Hello));
//!     app.run();
//! }
//! ```
//!
//! One [`App`] per process: the underlying windowing and UI bindings are
//! process-wide singletons, initialized at construction and torn down when
//! the application is dropped.

pub mod app;
pub mod icons;
pub mod image;
pub mod layer;
pub mod platform;
pub mod style;
pub mod window;

mod fonts;

pub use crate::app::{App, AppContext};
pub use crate::fonts::{DEFAULT_FONT_DIR, FONT_SIZE, ICON_FONT_SIZE};
pub use crate::image::{Dimension, Image, ImageError, Pixel};
pub use crate::layer::Layer;
pub use crate::window::{Window, WindowError};

// Re-exported so embedding applications use the same versions the shell
// was built against.
pub use glow;
pub use imgui;

/// Common imports for applications built on the shell
pub mod prelude {
    pub use crate::app::{App, AppContext};
    pub use crate::image::{Image, ImageError, Pixel};
    pub use crate::layer::Layer;
    pub use imgui::Ui;
}
