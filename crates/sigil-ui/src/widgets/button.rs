use sigil_engine::coords::Rectangle;
use sigil_engine::paint::Color;
use sigil_engine::scene::TextureId;
use sigil_engine::text::Alignment;
use sigil_engine::Context;

use crate::widget::{Interaction, Widget};

/// Outline to face gap.
const FACE_INSET: f32 = 4.0;
/// Face gap while the button is held down.
const PRESSED_INSET: f32 = 6.0;
const HIGHLIGHT: u8 = 30;

/// Outline, face and hit-test state of a button for this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ButtonModel {
    outline: Rectangle,
    face: Rectangle,
    hovering: bool,
    holding: bool,
    clicked: bool,
}

impl ButtonModel {
    fn read(ctx: &mut Context, rect: Rectangle) -> Self {
        let outline = ctx.fit_rect_in_window(rect);
        let i = Interaction::read(&ctx.mouse, outline);
        let holding = i.hovering && i.pressing;
        Self {
            outline,
            face: outline.shrink(if holding { PRESSED_INSET } else { FACE_INSET }),
            hovering: i.hovering,
            holding,
            clicked: ctx.mouse.left.just_clicked_in_rect(outline.shrink(FACE_INSET)),
        }
    }
}

/// Push button with a centered caption. Returns `true` on the frame it was clicked.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    rect: Rectangle,
    color: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, rect: Rectangle, color: Color) -> Self {
        Self { label, rect, color }
    }
}

impl Widget for Button<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = ButtonModel::read(ctx, self.rect);

        let mut face_color = self.color;
        if m.hovering {
            face_color = face_color.lighten_by(HIGHLIGHT);
        }
        if m.holding {
            face_color = face_color.lighten_by(HIGHLIGHT);
        }

        ctx.render_rectangle(m.outline, face_color.contrast());
        ctx.render_rectangle(m.face, face_color);
        ctx.render_text(self.label, m.face, Alignment::CENTER, 1.0);

        m.clicked
    }
}

/// Button drawn with a texture; switches to `hover_texture` while hovered or held.
#[derive(Debug, Clone)]
pub struct TexturedButton<'a> {
    label: &'a str,
    rect: Rectangle,
    base_texture: TextureId,
    hover_texture: TextureId,
}

impl<'a> TexturedButton<'a> {
    pub fn new(label: &'a str, rect: Rectangle, base_texture: TextureId, hover_texture: TextureId) -> Self {
        Self { label, rect, base_texture, hover_texture }
    }
}

impl Widget for TexturedButton<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = ButtonModel::read(ctx, self.rect);

        let texture = if m.hovering || m.holding { self.hover_texture } else { self.base_texture };
        ctx.render_textured_rectangle(m.outline, texture);
        ctx.render_text(self.label, m.outline, Alignment::CENTER, 1.0);

        m.clicked
    }
}
