//! Font Awesome 6 icon glyph ranges and named glyphs
//!
//! The solid and brand icon fonts are merged into the default UI font at
//! startup (see the font loading in [`crate::app::App::new`]), so these
//! glyphs can be embedded directly in any UI text, e.g.
//! `format!("{ICON_FLOPPY_DISK} Save")`.

/// First codepoint of the solid icon range
pub const ICON_MIN_FA: u32 = 0xe005;
/// Last codepoint of the solid icon range
pub const ICON_MAX_FA: u32 = 0xf8ff;
/// First codepoint of the brands icon range
pub const ICON_MIN_FAB: u32 = 0xe007;
/// Last codepoint of the brands icon range
pub const ICON_MAX_FAB: u32 = 0xf8e8;

/// Glyph range for the solid icon font, in the UI library's
/// zero-terminated pair layout
pub(crate) static FA_SOLID_RANGE: [u32; 3] = [ICON_MIN_FA, ICON_MAX_FA, 0];
/// Glyph range for the brands icon font
pub(crate) static FA_BRANDS_RANGE: [u32; 3] = [ICON_MIN_FAB, ICON_MAX_FAB, 0];

// Commonly used solid glyphs. The full set lives in the font itself; any
// codepoint inside the range above renders once the icon font is merged.

/// Magnifying glass
pub const ICON_MAGNIFYING_GLASS: &str = "\u{f002}";
/// Floppy disk (save)
pub const ICON_FLOPPY_DISK: &str = "\u{f0c7}";
/// Folder
pub const ICON_FOLDER: &str = "\u{f07b}";
/// Open folder
pub const ICON_FOLDER_OPEN: &str = "\u{f07c}";
/// Regular file
pub const ICON_FILE: &str = "\u{f15b}";
/// Image file
pub const ICON_FILE_IMAGE: &str = "\u{f1c5}";
/// Gear (settings)
pub const ICON_GEAR: &str = "\u{f013}";
/// Plus sign
pub const ICON_PLUS: &str = "\u{2b}";
/// Minus sign
pub const ICON_MINUS: &str = "\u{f068}";
/// Trash can
pub const ICON_TRASH: &str = "\u{f1f8}";
/// Rotate-right (redo)
pub const ICON_ROTATE_RIGHT: &str = "\u{f2f9}";
/// Rotate-left (undo)
pub const ICON_ROTATE_LEFT: &str = "\u{f2ea}";
/// Play
pub const ICON_PLAY: &str = "\u{f04b}";
/// Pause
pub const ICON_PAUSE: &str = "\u{f04c}";
/// Stop
pub const ICON_STOP: &str = "\u{f04d}";
/// Check mark
pub const ICON_CHECK: &str = "\u{f00c}";
/// X mark (close)
pub const ICON_XMARK: &str = "\u{f00d}";
/// Triangle exclamation (warning)
pub const ICON_TRIANGLE_EXCLAMATION: &str = "\u{f071}";
/// Circle info
pub const ICON_CIRCLE_INFO: &str = "\u{f05a}";
/// Chart line
pub const ICON_CHART_LINE: &str = "\u{f201}";
/// Palette
pub const ICON_PALETTE: &str = "\u{f53f}";
/// Download arrow
pub const ICON_DOWNLOAD: &str = "\u{f019}";
/// Upload arrow
pub const ICON_UPLOAD: &str = "\u{f093}";

// Brand glyphs

/// GitHub mark
pub const ICON_GITHUB: &str = "\u{f09b}";
/// Rust gear logo
pub const ICON_RUST: &str = "\u{e07a}";
