use sigil_engine::coords::Rectangle;
use sigil_engine::paint::{colors, Color};
use sigil_engine::scene::TextureId;
use sigil_engine::Context;

use crate::widget::{Interaction, Widget};

const INSET: f32 = 4.0;
const HIGHLIGHT: u8 = 30;

// ── value math ────────────────────────────────────────────────────────────

/// Range, clamped value and bucket layout of a stepped slider.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct SliderValues {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    /// Bucket the value falls in.
    pub offset: f32,
    /// Number of buckets.
    pub count: f32,
}

impl SliderValues {
    /// `min` and `max` may come in either order. A step that is not a positive
    /// finite number yields a single bucket.
    pub(crate) fn new(min: f32, max: f32, value: f32, step: f32) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        let value = value.clamp(lo, hi);
        let (offset, count) = if step.is_finite() && step > 0.0 {
            (((value - lo) / step).floor(), ((hi - lo) / step).floor() + 1.0)
        } else {
            (0.0, 1.0)
        };
        Self { min: lo, max: hi, value, offset, count }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub(crate) fn of(rect: Rectangle) -> Self {
        if rect.height > rect.width { Orientation::Vertical } else { Orientation::Horizontal }
    }
}

/// Shrinks the cursor to one bucket (at least 1 px) and moves it to `offset`.
pub(crate) fn size_cursor(coord: &mut f32, size: &mut f32, count: f32, offset: f32) {
    *size /= count;
    if *size < 1.0 {
        *size = 1.0;
    }
    *coord += offset * *size;
}

/// Value change for a drag with the pointer at `pointer`. Within half a
/// cursor of the cursor center nothing moves.
pub(crate) fn drag_delta(pointer: f32, cursor_coord: f32, cursor_size: f32, step: f32) -> f32 {
    let half = cursor_size / 2.0;
    let distance = pointer - (cursor_coord + half);
    if distance.abs() > half { (distance / cursor_size).trunc() * step } else { 0.0 }
}

// ── model ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct SliderModel {
    pub outline: Rectangle,
    pub base: Rectangle,
    pub cursor: Rectangle,
    pub hovering: bool,
    pub holding: bool,
    pub changed: bool,
}

impl SliderModel {
    /// Reads input for a slider at `rect` and applies drag or wheel to `value`.
    pub(crate) fn read(ctx: &mut Context, rect: Rectangle, value: &mut f32, min: f32, max: f32, step: f32) -> Self {
        let outline = ctx.fit_rect_in_window(rect);
        let mut base = outline.shrink(INSET);
        let values = SliderValues::new(min, max, *value, step);

        let orientation = Orientation::of(base);
        let mut cursor = base.shrink(INSET);
        match orientation {
            Orientation::Horizontal => size_cursor(&mut cursor.x, &mut cursor.width, values.count, values.offset),
            Orientation::Vertical => size_cursor(&mut cursor.y, &mut cursor.height, values.count, values.offset),
        }

        let i = Interaction::read(&ctx.mouse, outline);
        let has_step = step.is_finite() && step > 0.0;
        let mut next = values.value;
        if i.pressing {
            if has_step {
                let pointer = ctx.mouse.cursor_pos();
                next += match orientation {
                    Orientation::Horizontal => drag_delta(pointer.x, cursor.x, cursor.width, step),
                    Orientation::Vertical => drag_delta(pointer.y, cursor.y, cursor.height, step),
                };
            }
        } else if i.hovering && ctx.mouse.scrolled() != 0.0 && has_step {
            next += ctx.mouse.scrolled().round() * step;
        }

        if i.pressing {
            base = base.shrink(2.0);
            cursor = cursor.shrink(INSET);
        }

        let next = next.clamp(values.min, values.max);
        let changed = next != *value;
        if changed {
            *value = next;
        }

        Self { outline, base, cursor, hovering: i.hovering, holding: i.pressing, changed }
    }

    /// Frame, track and cursor; the cursor lightens when hovered and again when held.
    pub(crate) fn paint(&self, ctx: &mut Context, color: Color) {
        let mut frame_color = color.contrast();
        ctx.render_rectangle(self.outline, frame_color);
        ctx.render_rectangle(self.base, color);

        if self.hovering {
            frame_color = frame_color.lighten_by(HIGHLIGHT);
        }
        if self.holding {
            frame_color = frame_color.lighten_by(HIGHLIGHT);
        }
        ctx.render_rectangle(self.cursor, frame_color);
    }
}

// ── widgets ───────────────────────────────────────────────────────────────

/// Stepped value slider bound to a caller-owned `f32`.
///
/// Horizontal or vertical depending on which side of the rectangle is longer.
/// Returns `true` on frames where the value changed.
///
/// # Example
/// ```rust,ignore
/// Slider::new(Rectangle::new(0.0, 0.0, 200.0, 24.0), &mut volume)
///     .range(0.0, 100.0)
///     .step(5.0)
///     .draw(&mut ctx);
/// ```
#[derive(Debug)]
pub struct Slider<'a> {
    rect: Rectangle,
    color: Color,
    value: &'a mut f32,
    min: f32,
    max: f32,
    step: f32,
}

impl<'a> Slider<'a> {
    pub fn new(rect: Rectangle, value: &'a mut f32) -> Self {
        Self { rect, color: colors::MEDIUM_GREY, value, min: 0.0, max: 1.0, step: 0.1 }
    }

    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn range(mut self, min: f32, max: f32) -> Self { self.min = min; self.max = max; self }
    pub fn step(mut self, v: f32) -> Self { self.step = v; self }
}

impl Widget for Slider<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = SliderModel::read(ctx, self.rect, self.value, self.min, self.max, self.step);
        m.paint(ctx, self.color);
        m.changed
    }
}

/// Slider drawn with a track texture and a cursor texture.
#[derive(Debug)]
pub struct TexturedSlider<'a> {
    rect: Rectangle,
    base_texture: TextureId,
    cursor_texture: TextureId,
    value: &'a mut f32,
    min: f32,
    max: f32,
    step: f32,
}

impl<'a> TexturedSlider<'a> {
    pub fn new(rect: Rectangle, base_texture: TextureId, cursor_texture: TextureId, value: &'a mut f32) -> Self {
        Self { rect, base_texture, cursor_texture, value, min: 0.0, max: 1.0, step: 0.1 }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self { self.min = min; self.max = max; self }
    pub fn step(mut self, v: f32) -> Self { self.step = v; self }
}

impl Widget for TexturedSlider<'_> {
    fn draw(&mut self, ctx: &mut Context) -> bool {
        let m = SliderModel::read(ctx, self.rect, self.value, self.min, self.max, self.step);
        ctx.render_textured_rectangle(m.outline, self.base_texture);
        ctx.render_textured_rectangle(m.cursor, self.cursor_texture);
        m.changed
    }
}
