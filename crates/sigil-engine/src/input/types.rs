/// Mouse button identifier. Only the left and right buttons drive widgets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Button {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic pointer events.
///
/// Platform adapters translate window system events into these; see
/// [`platform::winit`](super::platform::winit).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor placed at an absolute position (logical pixels).
    PointerMoved { x: f32, y: f32 },
    /// Cursor moved relative to its previous position.
    PointerMovedBy { dx: f32, dy: f32 },
    /// Button edge at the current cursor position.
    Button { button: Button, state: ButtonState },
    /// Vertical wheel movement in lines; positive scrolls up.
    Wheel { delta: f32 },
}
