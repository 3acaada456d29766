use crate::coords::{Point, Rectangle};

use super::types::{Button, ButtonState, InputEvent};

/// Press/click/hold tracking for one mouse button.
///
/// `clicked` is a one-frame pulse: it is raised by the press edge and lowered
/// only by [`Mouse::start_frame`], never by `release`.
#[derive(Debug, Default)]
pub struct MouseButton {
    clicked_pos: Point,
    pressed: bool,
    clicked: bool,
}

impl MouseButton {
    /// Registers a press at `(x, y)`. Pressing an already pressed button is a no-op.
    pub fn press(&mut self, x: f32, y: f32) {
        if !self.pressed {
            self.pressed = true;
            self.clicked = true;
            self.clicked_pos = Point::new(x, y);
        }
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.pressed
    }

    /// True only during the frame that contains the press edge.
    #[inline]
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// Where the current (or last) press started.
    #[inline]
    pub fn clicked_pos(&self) -> Point {
        self.clicked_pos
    }

    #[inline]
    pub fn clicked_in_rect(&self, rect: Rectangle) -> bool {
        rect.contains(self.clicked_pos)
    }

    #[inline]
    pub fn just_clicked_in_rect(&self, rect: Rectangle) -> bool {
        self.clicked && self.clicked_in_rect(rect)
    }

    /// Moves the press origin along with a dragged object so the next frame
    /// measures the drag from where this one ended.
    pub(crate) fn shift_clicked_pos(&mut self, by: Point) {
        self.clicked_pos += by;
    }

    fn start_frame(&mut self) {
        self.clicked = false;
    }
}

/// Cursor, buttons and wheel state fed by the host each frame.
#[derive(Debug, Default)]
pub struct Mouse {
    pub left: MouseButton,
    pub right: MouseButton,
    cursor_pos: Point,
    scrolled: f32,
}

impl Mouse {
    /// Moves the cursor relative to its previous position.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.cursor_pos.x += dx;
        self.cursor_pos.y += dy;
    }

    /// Places the cursor at absolute coordinates.
    pub fn place(&mut self, x: f32, y: f32) {
        self.cursor_pos = Point::new(x, y);
    }

    /// Sets this frame's wheel delta. Later calls in the same frame overwrite.
    pub fn scroll(&mut self, dy: f32) {
        self.scrolled = dy;
    }

    #[inline]
    pub fn cursor_pos(&self) -> Point {
        self.cursor_pos
    }

    #[inline]
    pub fn scrolled(&self) -> f32 {
        self.scrolled
    }

    #[inline]
    pub fn is_hovering_over_rect(&self, rect: Rectangle) -> bool {
        rect.contains(self.cursor_pos)
    }

    /// Applies a platform-agnostic event. Button edges happen at the current cursor.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved { x, y } => self.place(x, y),
            InputEvent::PointerMovedBy { dx, dy } => self.move_by(dx, dy),
            InputEvent::Wheel { delta } => self.scroll(delta),
            InputEvent::Button { button, state } => {
                let pos = self.cursor_pos;
                let Some(target) = self.button_mut(button) else {
                    log::trace!("ignoring {button:?} {state:?}");
                    return;
                };
                match state {
                    ButtonState::Pressed => target.press(pos.x, pos.y),
                    ButtonState::Released => target.release(),
                }
            }
        }
    }

    fn button_mut(&mut self, button: Button) -> Option<&mut MouseButton> {
        match button {
            Button::Left => Some(&mut self.left),
            Button::Right => Some(&mut self.right),
            Button::Middle | Button::Other(_) => None,
        }
    }

    /// Drops per-frame transitions: click pulses and the wheel delta.
    pub(crate) fn start_frame(&mut self) {
        self.left.start_frame();
        self.right.start_frame();
        self.scrolled = 0.0;
    }
}
