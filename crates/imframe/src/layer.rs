//! Layer trait and ordered layer stack
//!
//! A layer is a pluggable unit of per-frame drawing. Layers are rendered
//! and torn down strictly in the order they were pushed.

use imgui::Ui;

use crate::app::AppContext;

/// A pluggable per-frame drawing unit
///
/// Hooks receive the application context, which stands in for the owning
/// application: it hands out the GL function table for image uploads,
/// queues configuration changes, and accepts layers pushed mid-frame.
pub trait Layer {
    /// Called once when the layer is pushed onto the application
    fn on_attach(&mut self, _ctx: &mut AppContext) {}

    /// Called once per frame to draw this layer's UI
    fn render(&mut self, _ui: &Ui, _ctx: &mut AppContext) {}

    /// Called exactly once when the application shuts down, in push order
    fn on_detach(&mut self, _ctx: &mut AppContext) {}
}

/// Ordered collection of layers; push order is render and teardown order
#[derive(Default)]
pub(crate) struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
}

impl LayerStack {
    pub(crate) fn push(&mut self, mut layer: Box<dyn Layer>, ctx: &mut AppContext) {
        layer.on_attach(ctx);
        self.layers.push(layer);
    }

    pub(crate) fn render_all(&mut self, ui: &Ui, ctx: &mut AppContext) {
        for layer in &mut self.layers {
            layer.render(ui, ctx);
        }
    }

    /// Tear down every layer in push order, dropping each afterwards
    pub(crate) fn detach_all(&mut self, ctx: &mut AppContext) {
        for mut layer in self.layers.drain(..) {
            layer.on_detach(ctx);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: EventLog,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &EventLog) -> Box<dyn Layer> {
            Box::new(Self {
                name,
                log: Rc::clone(log),
            })
        }
    }

    impl Layer for Recorder {
        fn on_attach(&mut self, _ctx: &mut AppContext) {
            self.log.borrow_mut().push(format!("attach:{}", self.name));
        }

        fn render(&mut self, _ui: &Ui, _ctx: &mut AppContext) {
            self.log.borrow_mut().push(format!("render:{}", self.name));
        }

        fn on_detach(&mut self, _ctx: &mut AppContext) {
            self.log.borrow_mut().push(format!("detach:{}", self.name));
        }
    }

    /// Pushes another layer from inside its own render hook
    struct MidFramePusher {
        log: EventLog,
        pushed: bool,
    }

    impl Layer for MidFramePusher {
        fn render(&mut self, _ui: &Ui, ctx: &mut AppContext) {
            self.log.borrow_mut().push("render:pusher".to_string());
            if !self.pushed {
                self.pushed = true;
                ctx.push_layer(Recorder::boxed("late", &self.log));
            }
        }
    }

    // A GL function table that loads nothing; no GL call is ever made in
    // this test, the context only satisfies the AppContext constructor.
    fn null_gl() -> Rc<glow::Context> {
        Rc::new(unsafe { glow::Context::from_loader_function(|_| std::ptr::null()) })
    }

    fn taken(log: &EventLog) -> Vec<String> {
        log.borrow_mut().drain(..).collect()
    }

    #[test]
    fn hooks_run_in_push_order_and_mid_frame_pushes_defer() {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = AppContext::new(null_gl());
        let mut stack = LayerStack::default();

        stack.push(Recorder::boxed("one", &log), &mut ctx);
        stack.push(Recorder::boxed("two", &log), &mut ctx);
        stack.push(
            Box::new(MidFramePusher {
                log: Rc::clone(&log),
                pushed: false,
            }),
            &mut ctx,
        );
        assert_eq!(taken(&log), ["attach:one", "attach:two"]);

        // One UI context drives both simulated frames
        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None::<std::path::PathBuf>);
        imgui
            .fonts()
            .add_font(&[imgui::FontSource::DefaultFontData { config: None }]);
        imgui.fonts().build_rgba32_texture();
        imgui.io_mut().display_size = [800.0, 600.0];

        // Frame 1: the mid-frame push must not render this frame
        imgui.io_mut().delta_time = 1.0 / 60.0;
        let ui = imgui.new_frame();
        stack.render_all(ui, &mut ctx);
        imgui.render();
        assert_eq!(taken(&log), ["render:one", "render:two", "render:pusher"]);

        // End of frame: the queued layer joins the tail of the stack
        for layer in ctx.take_pending_layers() {
            stack.push(layer, &mut ctx);
        }
        assert_eq!(stack.len(), 4);
        assert_eq!(taken(&log), ["attach:late"]);

        // Frame 2: the late layer renders last
        imgui.io_mut().delta_time = 1.0 / 60.0;
        let ui = imgui.new_frame();
        stack.render_all(ui, &mut ctx);
        imgui.render();
        assert_eq!(
            taken(&log),
            ["render:one", "render:two", "render:pusher", "render:late"]
        );

        // Teardown runs exactly once, in push order
        stack.detach_all(&mut ctx);
        assert_eq!(
            taken(&log),
            ["detach:one", "detach:two", "detach:late"]
        );
        assert_eq!(stack.len(), 0);
    }
}
