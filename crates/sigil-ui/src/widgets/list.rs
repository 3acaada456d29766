use sigil_engine::coords::Rectangle;
use sigil_engine::paint::{colors, Color};
use sigil_engine::Context;

use super::button::Button;
use super::scrollbar::Scrollbar;
use crate::widget::Widget;

const SCROLLBAR_WIDTH: f32 = 30.0;

/// Scroll position of one list, kept by the caller across frames.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
}

/// Scrollable column of clickable rows, one per item.
///
/// Rows are one line high and labelled by `label`; `action` runs with the
/// item index and item when a row is clicked. A scrollbar on the left edge
/// drives `scroll`. Returns `true` on frames where a row was clicked.
///
/// # Example
/// ```rust,ignore
/// List::new(rect, &files, |f| f.name.clone(), |i, f| open(i, f), &mut scroll).draw(&mut ctx);
/// ```
pub struct List<'a, T, L, A> {
    rect: Rectangle,
    color: Color,
    items: &'a [T],
    label: L,
    action: A,
    scroll: &'a mut ScrollState,
}

impl<'a, T, L, A> List<'a, T, L, A>
where
    L: FnMut(&T) -> String,
    A: FnMut(usize, &T),
{
    pub fn new(rect: Rectangle, items: &'a [T], label: L, action: A, scroll: &'a mut ScrollState) -> Self {
        Self { rect, color: colors::LIGHT_GREY, items, label, action, scroll }
    }

    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
}

impl<T, L, A> Widget for List<'_, T, L, A>
where
    L: FnMut(&T) -> String,
    A: FnMut(usize, &T),
{
    fn draw(&mut self, ctx: &mut Context) -> bool {
        // rows and the scrollbar fit themselves; this only grows the window
        ctx.fit_rect_in_window(self.rect);

        let rect = self.rect;
        let row_height = ctx.line_height();
        let skipped = (self.scroll.offset / row_height).floor().max(0.0) as usize;

        let mut clicked = false;
        let mut y = rect.y;
        for (index, item) in self.items.iter().enumerate().skip(skipped) {
            if y >= rect.y2() {
                break;
            }
            let row = Rectangle::new(rect.x + SCROLLBAR_WIDTH, y, rect.width, row_height).trimmed_to(rect);
            let label = (self.label)(item);
            if Button::new(&label, row, self.color).draw(ctx) {
                log::debug!("list row {index} clicked");
                (self.action)(index, item);
                clicked = true;
            }
            y += row_height;
        }

        let bar = Rectangle::new(rect.x, rect.y, SCROLLBAR_WIDTH, rect.height);
        let logical_extent = self.items.len() as f32 * row_height;
        Scrollbar::new(bar, &mut self.scroll.offset, logical_extent).color(self.color).draw(ctx);

        clicked
    }
}
