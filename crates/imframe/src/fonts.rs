//! Font atlas population
//!
//! Loads the default UI font and merges the two icon fonts into it at fixed
//! pixel sizes. Font files are resolved from an asset directory at runtime;
//! when a file is missing the build degrades gracefully (the UI library's
//! bundled font, no icon merge) with a logged warning, so an embedding
//! application works before it ships fonts of its own.

use std::fs;
use std::path::Path;

use imgui::{FontConfig, FontGlyphRanges, FontSource};

use crate::icons;

/// Directory searched for font files, relative to the working directory
pub const DEFAULT_FONT_DIR: &str = "assets/fonts";

/// File name of the default UI font
pub const UI_FONT_FILE: &str = "Roboto-Regular.ttf";
/// File name of the solid icon font
pub const ICON_FONT_FILE: &str = "fa-solid-900.ttf";
/// File name of the brands icon font
pub const BRAND_FONT_FILE: &str = "fa-brands-400.ttf";

/// Pixel size of the UI font
pub const FONT_SIZE: f32 = 18.0;
/// Pixel size of the merged icon glyphs
pub const ICON_FONT_SIZE: f32 = 16.0;

/// Populate the font atlas from the given directory
pub(crate) fn install(imgui: &mut imgui::Context, dir: &Path) {
    let ui_font = read_font(dir, UI_FONT_FILE);
    let icon_font = read_font(dir, ICON_FONT_FILE);
    let brand_font = read_font(dir, BRAND_FONT_FILE);

    let Some(ui_font) = ui_font.as_deref() else {
        // Without the base font there is nothing to merge icons into
        imgui
            .fonts()
            .add_font(&[FontSource::DefaultFontData { config: None }]);
        return;
    };

    let mut sources = vec![FontSource::TtfData {
        data: ui_font,
        size_pixels: FONT_SIZE,
        config: None,
    }];

    // Sources after the first are merged into it. Pixel snapping and a
    // fixed minimum advance keep the icons monospaced.
    if let Some(data) = icon_font.as_deref() {
        sources.push(FontSource::TtfData {
            data,
            size_pixels: ICON_FONT_SIZE,
            config: Some(icon_config(FontGlyphRanges::from_slice(
                &icons::FA_SOLID_RANGE,
            ))),
        });
    }
    if let Some(data) = brand_font.as_deref() {
        sources.push(FontSource::TtfData {
            data,
            size_pixels: ICON_FONT_SIZE,
            config: Some(icon_config(FontGlyphRanges::from_slice(
                &icons::FA_BRANDS_RANGE,
            ))),
        });
    }

    imgui.fonts().add_font(&sources);
}

fn icon_config(glyph_ranges: FontGlyphRanges) -> FontConfig {
    FontConfig {
        pixel_snap_h: true,
        glyph_min_advance_x: ICON_FONT_SIZE,
        glyph_ranges,
        ..FontConfig::default()
    }
}

fn read_font(dir: &Path, file: &str) -> Option<Vec<u8>> {
    let path = dir.join(file);
    match fs::read(&path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!(
                "font \"{}\" not loaded ({e}); falling back",
                path.display()
            );
            None
        }
    }
}
