use sigil_engine::coords::Rectangle;
use sigil_engine::paint::{colors, Color};
use sigil_engine::Context;

use super::slider::{Orientation, SliderModel};
use crate::widget::Widget;

const INSET: f32 = 4.0;

/// Scroll offset control for content `logical_extent` long.
///
/// The offset ranges over `[0, logical_extent - track]`, where the track is
/// the inner length along the longer side, and moves in line-height steps.
/// Returns `true` on frames where the offset changed.
#[derive(Debug)]
pub struct Scrollbar<'a> {
    rect: Rectangle,
    color: Color,
    offset: &'a mut f32,
    logical_extent: f32,
}

impl<'a> Scrollbar<'a> {
    pub fn new(rect: Rectangle, offset: &'a mut f32, logical_extent: f32) -> Self {
        Self { rect, color: colors::MEDIUM_GREY, offset, logical_extent }
    }

    pub fn color(mut self, v: Color) -> Self { self.color = v; self }

    /// Largest offset that still shows content at the far end.
    pub fn max_offset(&self) -> f32 {
        let base = self.rect.shrink(INSET);
        let track = match Orientation::of(base) {
            Orientation::Horizontal => base.width,
            Orientation::Vertical => base.height,
        };
        (self.logical_extent - track).max(0.0)
    }
}

impl Widget for Scrollbar<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let max = self.max_offset();
        let step = ctx.line_height();
        let m = SliderModel::read(ctx, self.rect, self.offset, 0.0, max, step);
        m.paint(ctx, self.color);
        m.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // inner track 44 px tall; ten 16 px rows → max offset 116
    fn bar() -> Rectangle {
        Rectangle::new(0.0, 0.0, 30.0, 48.0)
    }

    #[test]
    fn max_offset_uses_inner_track() {
        let mut offset = 0.0;
        assert_eq!(Scrollbar::new(bar(), &mut offset, 160.0).max_offset(), 116.0);
        assert_eq!(Scrollbar::new(bar(), &mut offset, 20.0).max_offset(), 0.0);
    }

    #[test]
    fn wheel_scrolls_by_line_height() {
        let mut ctx = Context::new();
        let mut offset = 0.0;
        ctx.mouse.place(10.0, 10.0);
        ctx.mouse.scroll(1.0);
        assert!(Scrollbar::new(bar(), &mut offset, 160.0).draw(&mut ctx));
        assert_eq!(offset, 16.0);
    }

    #[test]
    fn dragging_the_cursor_down_scrolls() {
        let mut ctx = Context::new();
        let mut offset = 0.0;
        // 8 buckets over a 40 px cursor track: cursor 4..9, center 6.5
        ctx.mouse.left.press(10.0, 5.0);
        ctx.mouse.place(10.0, 30.0);
        assert!(Scrollbar::new(bar(), &mut offset, 160.0).draw(&mut ctx));
        assert_eq!(offset, 64.0);
    }

    #[test]
    fn content_that_fits_never_scrolls() {
        let mut ctx = Context::new();
        let mut offset = 0.0;
        ctx.mouse.place(10.0, 10.0);
        ctx.mouse.scroll(2.0);
        assert!(!Scrollbar::new(bar(), &mut offset, 20.0).draw(&mut ctx));
        assert_eq!(offset, 0.0);
    }
}
