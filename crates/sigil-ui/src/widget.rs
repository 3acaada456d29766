use sigil_engine::coords::Rectangle;
use sigil_engine::input::Mouse;
use sigil_engine::Context;

// ── Widget trait ──────────────────────────────────────────────────────────

/// One immediate-mode widget call.
///
/// A widget value carries its geometry, colors or textures and a borrow of
/// the caller's state. `draw` reads the mouse, emits figures into `ctx` and
/// reports the interaction result: clicked for buttons, the new value for
/// checkboxes, changed for sliders.
///
/// ```rust,ignore
/// use sigil_ui::prelude::*;
///
/// let mut volume = 0.5;
/// if Slider::new(Rectangle::new(0.0, 0.0, 200.0, 24.0), &mut volume).draw(&mut ctx) {
///     log::info!("volume {volume}");
/// }
/// ```
pub trait Widget {
    fn draw(&mut self, ctx: &mut Context) -> bool;
}

// ── interaction ───────────────────────────────────────────────────────────

/// Mouse relationship to a widget outline for the current frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Interaction {
    /// Cursor is inside the outline.
    pub hovering: bool,
    /// The press edge happened this frame, inside the outline.
    pub just_clicked: bool,
    /// The left button is held and the press started inside the outline.
    pub pressing: bool,
}

impl Interaction {
    pub fn read(mouse: &Mouse, outline: Rectangle) -> Self {
        Self {
            hovering: mouse.is_hovering_over_rect(outline),
            just_clicked: mouse.left.just_clicked_in_rect(outline),
            pressing: mouse.left.clicked_in_rect(outline) && mouse.left.is_held(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_inside_then_drag_out_keeps_pressing() {
        let outline = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let mut mouse = Mouse::default();
        mouse.place(5.0, 5.0);
        mouse.left.press(5.0, 5.0);
        let i = Interaction::read(&mouse, outline);
        assert!(i.hovering && i.just_clicked && i.pressing);

        mouse.place(50.0, 50.0);
        let i = Interaction::read(&mouse, outline);
        assert!(!i.hovering);
        assert!(i.pressing);
    }

    #[test]
    fn release_ends_pressing() {
        let outline = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let mut mouse = Mouse::default();
        mouse.left.press(5.0, 5.0);
        mouse.left.release();
        assert!(!Interaction::read(&mouse, outline).pressing);
    }
}
