//! Demo application for the immediate-mode shell
//!
//! Shows the layer stack in action: a control layer that edits and uploads
//! a procedural image, and the Dear ImGui demo window for reference.

use imframe::icons;
use imframe::imgui;
use imframe::prelude::*;

/// Draws a gradient image, re-uploading it when the parameters change
struct ImageLayer {
    image: Image,
    phase: u8,
    dirty: bool,
    animate: bool,
}

impl ImageLayer {
    const SIZE: u32 = 256;

    fn new() -> Self {
        Self {
            image: Image::new(Self::SIZE, Self::SIZE),
            phase: 0,
            dirty: true,
            animate: false,
        }
    }

    fn repaint(&mut self) {
        for h in 0..Self::SIZE {
            for w in 0..Self::SIZE {
                *self.image.pixel_mut(h, w) = Pixel::rgb(
                    (h as u8).wrapping_add(self.phase),
                    (w as u8).wrapping_sub(self.phase),
                    self.phase,
                );
            }
        }
    }
}

impl Layer for ImageLayer {
    fn on_attach(&mut self, ctx: &mut AppContext) {
        self.repaint();
        self.image.send_to_device(ctx.gl());
        self.dirty = false;
        log::debug!("gradient image uploaded");
    }

    fn render(&mut self, ui: &Ui, ctx: &mut AppContext) {
        ui.window(format!("{} Gradient", icons::ICON_FILE_IMAGE))
            .size([320.0, 420.0], imgui::Condition::FirstUseEver)
            .build(|| {
                if let Some(id) = self.image.texture_id() {
                    imgui::Image::new(id, [Self::SIZE as f32, Self::SIZE as f32]).build(ui);
                }

                ui.checkbox("animate", &mut self.animate);
                if self.animate {
                    self.phase = self.phase.wrapping_add(1);
                    self.dirty = true;
                }
                if ui.button(format!("{} shift colors", icons::ICON_ROTATE_RIGHT)) {
                    self.phase = self.phase.wrapping_add(16);
                    self.dirty = true;
                }
                ui.same_line();
                if ui.button(format!("{} save PNG", icons::ICON_FLOPPY_DISK))
                    && !self.image.save_png("gradient.png")
                {
                    ui.open_popup("save-failed");
                }
                if let Some(_token) = ui.begin_popup("save-failed") {
                    ui.text("could not write gradient.png");
                }

                if ui.button(format!("{} quit", icons::ICON_XMARK)) {
                    ctx.request_close();
                }
            });

        if self.dirty {
            self.repaint();
            self.image.send_to_device(ctx.gl());
            self.dirty = false;
        }
    }

    fn on_detach(&mut self, _ctx: &mut AppContext) {
        log::debug!("image layer shutting down");
    }
}

/// The stock Dear ImGui demo window, kept around as a widget reference
struct DemoWindowLayer {
    open: bool,
}

impl Layer for DemoWindowLayer {
    fn render(&mut self, ui: &Ui, _ctx: &mut AppContext) {
        if self.open {
            ui.show_demo_window(&mut self.open);
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut app = App::new(1080, 1080, "imframe demo");
    app.enable_docking();

    let mut icon = Image::new(64, 64);
    for h in 0..64 {
        for w in 0..64 {
            *icon.pixel_mut(h, w) = Pixel::rgb(30, (h * 4) as u8, (w * 4) as u8);
        }
    }
    app.set_icon(&icon);

    app.push_layer(Box::new(ImageLayer::new()));
    app.push_layer(Box::new(DemoWindowLayer { open: true }));
    app.run();
}
