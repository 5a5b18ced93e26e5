//! Default visual theme
//!
//! A dark theme with flat corners and a blue accent, applied once at
//! construction. Applications are free to overwrite any of it through
//! [`crate::app::App::style_mut`] before the loop starts.

use imgui::{Direction, Style, StyleColor};

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> [f32; 4] {
    [r, g, b, a]
}

const fn rgb(r: f32, g: f32, b: f32) -> [f32; 4] {
    rgba(r, g, b, 1.0)
}

// Palette: window chrome, raised widgets, hover highlight, active accent
const BG: [f32; 4] = rgb(0.145, 0.145, 0.149);
const WIDGET: [f32; 4] = rgb(0.200, 0.200, 0.216);
const HOVER: [f32; 4] = rgb(0.114, 0.592, 0.925);
const ACCENT: [f32; 4] = rgb(0.000, 0.467, 0.784);
const BORDER: [f32; 4] = rgb(0.306, 0.306, 0.306);
const GRAB: [f32; 4] = rgb(0.322, 0.322, 0.333);
const GRAB_HOVER: [f32; 4] = rgb(0.353, 0.353, 0.373);

/// Apply the default theme to the given style table
#[allow(clippy::too_many_lines)]
pub fn apply_default(style: &mut Style) {
    style.alpha = 1.0;
    style.disabled_alpha = 0.6;
    style.window_padding = [8.0, 8.0];
    style.window_rounding = 0.0;
    style.window_border_size = 1.0;
    style.window_min_size = [32.0, 32.0];
    style.window_title_align = [0.0, 0.5];
    style.window_menu_button_position = Direction::Left;
    style.child_rounding = 0.0;
    style.child_border_size = 1.0;
    style.popup_rounding = 0.0;
    style.popup_border_size = 1.0;
    style.frame_padding = [4.0, 3.0];
    style.frame_rounding = 0.0;
    style.frame_border_size = 0.0;
    style.item_spacing = [8.0, 4.0];
    style.item_inner_spacing = [4.0, 4.0];
    style.cell_padding = [4.0, 2.0];
    style.indent_spacing = 21.0;
    style.columns_min_spacing = 6.0;
    style.scrollbar_size = 14.0;
    style.scrollbar_rounding = 3.0;
    style.grab_min_size = 10.0;
    style.grab_rounding = 0.0;
    style.tab_rounding = 3.0;
    style.tab_border_size = 0.0;
    style.tab_min_width_for_close_button = 0.0;
    style.color_button_position = Direction::Right;
    style.button_text_align = [0.5, 0.5];
    style.selectable_text_align = [0.0, 0.0];

    style[StyleColor::Text] = rgb(1.0, 1.0, 1.0);
    style[StyleColor::TextDisabled] = rgb(0.592, 0.592, 0.592);
    style[StyleColor::WindowBg] = BG;
    style[StyleColor::ChildBg] = BG;
    style[StyleColor::PopupBg] = BG;
    style[StyleColor::Border] = BORDER;
    style[StyleColor::BorderShadow] = BORDER;
    style[StyleColor::FrameBg] = WIDGET;
    style[StyleColor::FrameBgHovered] = HOVER;
    style[StyleColor::FrameBgActive] = ACCENT;
    style[StyleColor::TitleBg] = BG;
    style[StyleColor::TitleBgActive] = BG;
    style[StyleColor::TitleBgCollapsed] = BG;
    style[StyleColor::MenuBarBg] = WIDGET;
    style[StyleColor::ScrollbarBg] = WIDGET;
    style[StyleColor::ScrollbarGrab] = GRAB;
    style[StyleColor::ScrollbarGrabHovered] = GRAB_HOVER;
    style[StyleColor::ScrollbarGrabActive] = GRAB_HOVER;
    style[StyleColor::CheckMark] = ACCENT;
    style[StyleColor::SliderGrab] = HOVER;
    style[StyleColor::SliderGrabActive] = ACCENT;
    style[StyleColor::Button] = WIDGET;
    style[StyleColor::ButtonHovered] = HOVER;
    style[StyleColor::ButtonActive] = HOVER;
    style[StyleColor::Header] = WIDGET;
    style[StyleColor::HeaderHovered] = HOVER;
    style[StyleColor::HeaderActive] = ACCENT;
    style[StyleColor::Separator] = BORDER;
    style[StyleColor::SeparatorHovered] = BORDER;
    style[StyleColor::SeparatorActive] = BORDER;
    style[StyleColor::ResizeGrip] = BG;
    style[StyleColor::ResizeGripHovered] = WIDGET;
    style[StyleColor::ResizeGripActive] = GRAB;
    style[StyleColor::Tab] = BG;
    style[StyleColor::TabHovered] = HOVER;
    style[StyleColor::TabActive] = ACCENT;
    style[StyleColor::TabUnfocused] = BG;
    style[StyleColor::TabUnfocusedActive] = ACCENT;
    style[StyleColor::PlotLines] = ACCENT;
    style[StyleColor::PlotLinesHovered] = HOVER;
    style[StyleColor::PlotHistogram] = ACCENT;
    style[StyleColor::PlotHistogramHovered] = HOVER;
    style[StyleColor::TableHeaderBg] = rgb(0.188, 0.188, 0.200);
    style[StyleColor::TableBorderStrong] = rgb(0.310, 0.310, 0.349);
    style[StyleColor::TableBorderLight] = rgb(0.227, 0.227, 0.247);
    style[StyleColor::TableRowBg] = rgba(0.0, 0.0, 0.0, 0.0);
    style[StyleColor::TableRowBgAlt] = rgba(1.0, 1.0, 1.0, 0.06);
    style[StyleColor::TextSelectedBg] = ACCENT;
    style[StyleColor::DragDropTarget] = BG;
    style[StyleColor::NavHighlight] = BG;
    style[StyleColor::NavWindowingHighlight] = rgba(1.0, 1.0, 1.0, 0.7);
    style[StyleColor::NavWindowingDimBg] = rgba(0.8, 0.8, 0.8, 0.2);
    style[StyleColor::ModalWindowDimBg] = BG;
}
