use sigil_engine::coords::Rectangle;
use sigil_engine::paint::Color;
use sigil_engine::scene::TextureId;
use sigil_engine::Context;

use crate::widget::{Interaction, Widget};

const INSET: f32 = 4.0;
const HIGHLIGHT: u8 = 30;

#[derive(Debug, Copy, Clone, PartialEq)]
struct CheckboxModel {
    outline: Rectangle,
    base: Rectangle,
    check: Rectangle,
    hovering: bool,
}

impl CheckboxModel {
    /// Flips `value` on a click inside the outline. Base and check sink while
    /// clicked and again while held.
    fn read(ctx: &mut Context, rect: Rectangle, value: &mut bool) -> Self {
        let outline = ctx.fit_rect_in_window(rect);
        let i = Interaction::read(&ctx.mouse, outline);

        let mut base = outline.shrink(INSET);
        let mut check = base.shrink(INSET);

        if i.just_clicked {
            base = base.shrink(INSET);
            check = check.shrink(INSET);
            *value = !*value;
        }
        if i.pressing {
            base = base.shrink(INSET);
            check = check.shrink(INSET);
        }

        Self { outline, base, check, hovering: i.hovering }
    }
}

/// Toggle bound to a caller-owned flag. Returns the flag after this frame.
#[derive(Debug)]
pub struct Checkbox<'a> {
    rect: Rectangle,
    color: Color,
    value: &'a mut bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(rect: Rectangle, value: &'a mut bool) -> Self {
        Self { rect, color: sigil_engine::paint::colors::LIGHT_GREY, value }
    }

    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
}

impl Widget for Checkbox<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = CheckboxModel::read(ctx, self.rect, self.value);

        let mark_color = self.color.contrast();
        let base_color = if m.hovering { self.color.lighten_by(HIGHLIGHT) } else { self.color };

        ctx.render_rectangle(m.outline, mark_color);
        ctx.render_rectangle(m.base, base_color);
        if *self.value {
            ctx.render_rectangle(m.check, mark_color);
        }

        *self.value
    }
}

/// Checkbox drawn with textures: `base_texture` over the outline, `check_texture`
/// for the mark.
#[derive(Debug)]
pub struct TexturedCheckbox<'a> {
    rect: Rectangle,
    base_texture: TextureId,
    check_texture: TextureId,
    value: &'a mut bool,
}

impl<'a> TexturedCheckbox<'a> {
    pub fn new(rect: Rectangle, base_texture: TextureId, check_texture: TextureId, value: &'a mut bool) -> Self {
        Self { rect, base_texture, check_texture, value }
    }
}

impl Widget for TexturedCheckbox<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = CheckboxModel::read(ctx, self.rect, self.value);

        ctx.render_textured_rectangle(m.outline, self.base_texture);
        if *self.value {
            ctx.render_textured_rectangle(m.check, self.check_texture);
        }

        *self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_engine::coords::Point;
    use sigil_engine::paint::colors;
    use sigil_engine::scene::Figure;

    fn rect() -> Rectangle {
        Rectangle::new(0.0, 0.0, 24.0, 24.0)
    }

    fn origin(fig: &Figure) -> Point {
        fig.vertices()[0].position
    }

    #[test]
    fn click_toggles_across_frames() {
        let mut ctx = Context::new();
        let mut value = false;

        // frame 1: press inside
        ctx.start_new_frame();
        ctx.mouse.place(12.0, 12.0);
        ctx.mouse.left.press(12.0, 12.0);
        assert!(Checkbox::new(rect(), &mut value).draw(&mut ctx));
        assert!(value);
        let figs = ctx.draw_batch().global();
        assert_eq!(figs.len(), 3);
        // clicked and held: base sinks twice
        assert_eq!(origin(&figs[1]), rect().shrink(12.0).origin());

        // frame 2: still held, no new click
        ctx.start_new_frame();
        assert!(Checkbox::new(rect(), &mut value).draw(&mut ctx));
        assert!(value);
        assert_eq!(origin(&ctx.draw_batch().global()[1]), rect().shrink(8.0).origin());

        // frame 3: release, then click again
        ctx.start_new_frame();
        ctx.mouse.left.release();
        ctx.mouse.left.press(12.0, 12.0);
        assert!(!Checkbox::new(rect(), &mut value).draw(&mut ctx));
        assert!(!value);
        assert_eq!(ctx.draw_batch().global().len(), 2);
    }

    #[test]
    fn two_full_clicks_set_then_clear() {
        let mut ctx = Context::new();
        let bounds = Rectangle::new(0.0, 0.0, 40.0, 40.0);
        let mut value = false;
        let mut seen = Vec::new();

        for _ in 0..2 {
            ctx.start_new_frame();
            ctx.mouse.place(20.0, 20.0);
            ctx.mouse.left.press(20.0, 20.0);
            let returned = Checkbox::new(bounds, &mut value).draw(&mut ctx);
            ctx.mouse.left.release();
            seen.push((returned, value));
        }

        // the call reports the flag as it stands after the toggle
        assert_eq!(seen, vec![(true, true), (false, false)]);
    }

    #[test]
    fn click_outside_leaves_value() {
        let mut ctx = Context::new();
        let mut value = true;
        ctx.mouse.left.press(100.0, 100.0);
        assert!(Checkbox::new(rect(), &mut value).draw(&mut ctx));
        assert!(value);
    }

    #[test]
    fn colors_follow_contrast_and_hover() {
        let mut ctx = Context::new();
        let mut value = true;
        ctx.mouse.place(12.0, 12.0);
        Checkbox::new(rect(), &mut value).color(colors::DARK_GREY).draw(&mut ctx);
        let figs = ctx.draw_batch().global();
        assert_eq!(figs[0].vertices()[0].color, colors::WHITE);
        assert_eq!(figs[1].vertices()[0].color, colors::DARK_GREY.lighten_by(30));
        assert_eq!(figs[2].vertices()[0].color, colors::WHITE);
    }

    #[test]
    fn textured_checkbox_draws_mark_only_when_set() {
        let mut ctx = Context::new();
        let mut value = false;
        TexturedCheckbox::new(rect(), TextureId(4), TextureId(5), &mut value).draw(&mut ctx);
        assert_eq!(ctx.draw_batch().global().len(), 1);

        ctx.mouse.left.press(12.0, 12.0);
        assert!(TexturedCheckbox::new(rect(), TextureId(4), TextureId(5), &mut value).draw(&mut ctx));
        let textures: Vec<TextureId> = ctx.draw_batch().global().iter().map(Figure::texture).collect();
        assert_eq!(textures, vec![TextureId(4), TextureId(4), TextureId(5)]);
    }
}
