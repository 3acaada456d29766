use sigil_engine::coords::Rectangle;
use sigil_engine::text::Alignment;
use sigil_engine::Context;

use crate::widget::Widget;

/// Non-interactive text. `draw` always returns `false`.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    text: &'a str,
    rect: Rectangle,
    alignment: Alignment,
    scale: f32,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, rect: Rectangle) -> Self {
        Self { text, rect, alignment: Alignment::CENTER, scale: 1.0 }
    }

    pub fn alignment(mut self, v: Alignment) -> Self { self.alignment = v; self }
    pub fn scale(mut self, v: f32) -> Self { self.scale = v; self }
}

impl Widget for Label<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let rect = ctx.fit_rect_in_window(self.rect);
        ctx.render_text(self.text, rect, self.alignment, self.scale);
        false
    }
}
