use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};

use crate::input::{Button, ButtonState, InputEvent};

/// Pixels of trackpad movement treated as one wheel line.
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's current DPI scale (`Window::scale_factor`);
/// positions are converted to logical pixels. Returns `None` for events the
/// mouse model does not represent.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let state = match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            Some(InputEvent::Button { button: map_mouse_button(*button), state })
        }

        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
            delta: map_scroll_delta(scale_factor, *delta),
        }),

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

/// Vertical wheel movement in lines.
pub fn map_scroll_delta(scale_factor: f64, delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => to_logical_f32(scale_factor, p).1 / PIXELS_PER_LINE,
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> Button {
    match b {
        WinitMouseButton::Left => Button::Left,
        WinitMouseButton::Right => Button::Right,
        WinitMouseButton::Middle => Button::Middle,
        WinitMouseButton::Back => Button::Other(3),
        WinitMouseButton::Forward => Button::Other(4),
        WinitMouseButton::Other(v) => Button::Other(v),
    }
}
