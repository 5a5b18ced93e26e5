//! GLFW-to-ImGui input translation
//!
//! Feeds polled window events into the UI IO state and prepares the IO for
//! each new frame (display size, framebuffer scale, delta time).

use std::time::Instant;

use glfw::{Action, Modifiers, WindowEvent};
use imgui::Io;

use crate::window::Window;

/// Forward one window event to the UI IO state
///
/// Unmapped keys and events the UI has no use for are ignored.
pub fn handle_event(io: &mut Io, event: &WindowEvent) {
    match *event {
        WindowEvent::CursorPos(x, y) => {
            io.add_mouse_pos_event([x as f32, y as f32]);
        }
        WindowEvent::MouseButton(button, action, _) => {
            if let Some(button) = map_mouse_button(button) {
                io.add_mouse_button_event(button, action != Action::Release);
            }
        }
        WindowEvent::Scroll(dx, dy) => {
            io.add_mouse_wheel_event([dx as f32, dy as f32]);
        }
        WindowEvent::Char(ch) => {
            io.add_input_character(ch);
        }
        WindowEvent::Key(key, _, action, mods) => {
            // The UI synthesizes repeats itself, so only edges are reported
            if action == Action::Repeat {
                return;
            }
            update_modifiers(io, mods);
            if let Some(key) = map_key(key) {
                io.add_key_event(key, action == Action::Press);
            }
        }
        WindowEvent::Focus(focused) => {
            io.app_focus_lost = !focused;
        }
        _ => {}
    }
}

/// Prepare the IO state for a new frame, returning the new frame instant
pub fn prepare_frame(io: &mut Io, window: &Window, last_frame: Instant) -> Instant {
    let now = Instant::now();
    io.update_delta_time(now - last_frame);

    let (width, height) = window.get_size();
    let (fb_width, fb_height) = window.get_framebuffer_size();
    io.display_size = [width as f32, height as f32];
    if width > 0 && height > 0 {
        io.display_framebuffer_scale = [
            fb_width as f32 / width as f32,
            fb_height as f32 / height as f32,
        ];
    }

    now
}

fn update_modifiers(io: &mut Io, mods: Modifiers) {
    io.add_key_event(imgui::Key::ModCtrl, mods.contains(Modifiers::Control));
    io.add_key_event(imgui::Key::ModShift, mods.contains(Modifiers::Shift));
    io.add_key_event(imgui::Key::ModAlt, mods.contains(Modifiers::Alt));
    io.add_key_event(imgui::Key::ModSuper, mods.contains(Modifiers::Super));
}

fn map_mouse_button(button: glfw::MouseButton) -> Option<imgui::MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(imgui::MouseButton::Left),
        glfw::MouseButton::Button2 => Some(imgui::MouseButton::Right),
        glfw::MouseButton::Button3 => Some(imgui::MouseButton::Middle),
        glfw::MouseButton::Button4 => Some(imgui::MouseButton::Extra1),
        glfw::MouseButton::Button5 => Some(imgui::MouseButton::Extra2),
        _ => None,
    }
}

#[allow(clippy::too_many_lines)]
fn map_key(key: glfw::Key) -> Option<imgui::Key> {
    use glfw::Key as G;
    use imgui::Key as I;

    match key {
        G::A => Some(I::A),
        G::B => Some(I::B),
        G::C => Some(I::C),
        G::D => Some(I::D),
        G::E => Some(I::E),
        G::F => Some(I::F),
        G::G => Some(I::G),
        G::H => Some(I::H),
        G::I => Some(I::I),
        G::J => Some(I::J),
        G::K => Some(I::K),
        G::L => Some(I::L),
        G::M => Some(I::M),
        G::N => Some(I::N),
        G::O => Some(I::O),
        G::P => Some(I::P),
        G::Q => Some(I::Q),
        G::R => Some(I::R),
        G::S => Some(I::S),
        G::T => Some(I::T),
        G::U => Some(I::U),
        G::V => Some(I::V),
        G::W => Some(I::W),
        G::X => Some(I::X),
        G::Y => Some(I::Y),
        G::Z => Some(I::Z),
        G::Num0 => Some(I::Alpha0),
        G::Num1 => Some(I::Alpha1),
        G::Num2 => Some(I::Alpha2),
        G::Num3 => Some(I::Alpha3),
        G::Num4 => Some(I::Alpha4),
        G::Num5 => Some(I::Alpha5),
        G::Num6 => Some(I::Alpha6),
        G::Num7 => Some(I::Alpha7),
        G::Num8 => Some(I::Alpha8),
        G::Num9 => Some(I::Alpha9),
        G::F1 => Some(I::F1),
        G::F2 => Some(I::F2),
        G::F3 => Some(I::F3),
        G::F4 => Some(I::F4),
        G::F5 => Some(I::F5),
        G::F6 => Some(I::F6),
        G::F7 => Some(I::F7),
        G::F8 => Some(I::F8),
        G::F9 => Some(I::F9),
        G::F10 => Some(I::F10),
        G::F11 => Some(I::F11),
        G::F12 => Some(I::F12),
        G::Space => Some(I::Space),
        G::Apostrophe => Some(I::Apostrophe),
        G::Comma => Some(I::Comma),
        G::Minus => Some(I::Minus),
        G::Period => Some(I::Period),
        G::Slash => Some(I::Slash),
        G::Semicolon => Some(I::Semicolon),
        G::Equal => Some(I::Equal),
        G::LeftBracket => Some(I::LeftBracket),
        G::Backslash => Some(I::Backslash),
        G::RightBracket => Some(I::RightBracket),
        G::GraveAccent => Some(I::GraveAccent),
        G::Escape => Some(I::Escape),
        G::Enter => Some(I::Enter),
        G::Tab => Some(I::Tab),
        G::Backspace => Some(I::Backspace),
        G::Insert => Some(I::Insert),
        G::Delete => Some(I::Delete),
        G::Right => Some(I::RightArrow),
        G::Left => Some(I::LeftArrow),
        G::Down => Some(I::DownArrow),
        G::Up => Some(I::UpArrow),
        G::PageUp => Some(I::PageUp),
        G::PageDown => Some(I::PageDown),
        G::Home => Some(I::Home),
        G::End => Some(I::End),
        G::CapsLock => Some(I::CapsLock),
        G::ScrollLock => Some(I::ScrollLock),
        G::NumLock => Some(I::NumLock),
        G::PrintScreen => Some(I::PrintScreen),
        G::Pause => Some(I::Pause),
        G::Kp0 => Some(I::Keypad0),
        G::Kp1 => Some(I::Keypad1),
        G::Kp2 => Some(I::Keypad2),
        G::Kp3 => Some(I::Keypad3),
        G::Kp4 => Some(I::Keypad4),
        G::Kp5 => Some(I::Keypad5),
        G::Kp6 => Some(I::Keypad6),
        G::Kp7 => Some(I::Keypad7),
        G::Kp8 => Some(I::Keypad8),
        G::Kp9 => Some(I::Keypad9),
        G::KpDecimal => Some(I::KeypadDecimal),
        G::KpDivide => Some(I::KeypadDivide),
        G::KpMultiply => Some(I::KeypadMultiply),
        G::KpSubtract => Some(I::KeypadSubtract),
        G::KpAdd => Some(I::KeypadAdd),
        G::KpEnter => Some(I::KeypadEnter),
        G::KpEqual => Some(I::KeypadEqual),
        G::LeftShift => Some(I::LeftShift),
        G::LeftControl => Some(I::LeftCtrl),
        G::LeftAlt => Some(I::LeftAlt),
        G::LeftSuper => Some(I::LeftSuper),
        G::RightShift => Some(I::RightShift),
        G::RightControl => Some(I::RightCtrl),
        G::RightAlt => Some(I::RightAlt),
        G::RightSuper => Some(I::RightSuper),
        G::Menu => Some(I::Menu),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_arrows_and_keypad_map() {
        assert_eq!(map_key(glfw::Key::A), Some(imgui::Key::A));
        assert_eq!(map_key(glfw::Key::Num0), Some(imgui::Key::Alpha0));
        assert_eq!(map_key(glfw::Key::Left), Some(imgui::Key::LeftArrow));
        assert_eq!(map_key(glfw::Key::Kp5), Some(imgui::Key::Keypad5));
        assert_eq!(map_key(glfw::Key::KpEnter), Some(imgui::Key::KeypadEnter));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(glfw::Key::World1), None);
        assert_eq!(map_key(glfw::Key::F25), None);
    }

    #[test]
    fn all_mouse_buttons_map_uniquely() {
        let buttons = [
            glfw::MouseButton::Button1,
            glfw::MouseButton::Button2,
            glfw::MouseButton::Button3,
            glfw::MouseButton::Button4,
            glfw::MouseButton::Button5,
        ];
        let mapped: Vec<_> = buttons.iter().filter_map(|b| map_mouse_button(*b)).collect();
        assert_eq!(mapped.len(), 5);
        assert_eq!(mapped[0], imgui::MouseButton::Left);
        assert_eq!(mapped[1], imgui::MouseButton::Right);
        assert_eq!(mapped[2], imgui::MouseButton::Middle);
    }
}
