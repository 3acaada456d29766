use crate::coords::{Point, Rectangle};

use super::font::{Font, GlyphQuad};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Placement of a text run inside its rectangle. Defaults to centered on both axes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub const CENTER: Alignment = Alignment::new(HAlign::Center, VAlign::Center);
    pub const LEFT: Alignment = Alignment::new(HAlign::Left, VAlign::Center);
    pub const RIGHT: Alignment = Alignment::new(HAlign::Right, VAlign::Center);
    pub const TOP: Alignment = Alignment::new(HAlign::Center, VAlign::Top);
    pub const BOTTOM: Alignment = Alignment::new(HAlign::Center, VAlign::Bottom);
    pub const TOP_LEFT: Alignment = Alignment::new(HAlign::Left, VAlign::Top);
    pub const TOP_RIGHT: Alignment = Alignment::new(HAlign::Right, VAlign::Top);
    pub const BOTTOM_LEFT: Alignment = Alignment::new(HAlign::Left, VAlign::Bottom);
    pub const BOTTOM_RIGHT: Alignment = Alignment::new(HAlign::Right, VAlign::Bottom);

    #[inline]
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self { horizontal, vertical }
    }
}

/// Glyph quads of one laid-out run, already aligned, plus the final pen x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    pub quads: Vec<GlyphQuad>,
    pub pen_x: f32,
}

/// Lays `text` out on a single line whose baseline is the bottom of `rect`.
///
/// `scale` in `(0, 1]` shrinks each glyph towards its bottom-left corner and
/// pulls the pen back by the same amount, so scaled text stays tight. Glyphs
/// starting past the right edge end the run; the last one is clipped to it.
pub fn layout_text(font: &Font, text: &str, rect: Rectangle, alignment: Alignment, scale: f32) -> TextRun {
    let mut pen = Point::new(rect.x, rect.y2());
    if font.is_empty() || text.is_empty() {
        return TextRun { quads: Vec::new(), pen_x: rect.x };
    }

    let anti_scale = 1.0 - scale;
    let mut min_y = pen.y;
    let mut max_y = pen.y;
    let mut quads = Vec::with_capacity(text.len());

    for ch in text.chars() {
        let previous_x = pen.x;
        let Some(mut quad) = font.quad(ch, &mut pen) else {
            break;
        };

        let h_offset = (pen.x - previous_x) * anti_scale;
        quad.x1 -= h_offset;
        quad.y0 += (quad.y1 - quad.y0) * anti_scale;
        pen.x -= h_offset;

        if quad.x0 > rect.x2() {
            break;
        }
        quad.x1 = quad.x1.min(rect.x2());
        quad.y0 = quad.y0.max(rect.y);

        min_y = min_y.min(quad.y0);
        max_y = max_y.max(quad.y1);
        quads.push(quad);
    }

    let text_height = max_y - min_y;
    let text_width = match (quads.first(), quads.last()) {
        (Some(first), Some(last)) => last.x1 - first.x0,
        _ => 0.0,
    };

    let dx = match alignment.horizontal {
        HAlign::Left => 0.0,
        HAlign::Center => (rect.width - text_width) * 0.5,
        HAlign::Right => rect.width - text_width,
    };
    let dy = match alignment.vertical {
        VAlign::Top => -(rect.height - text_height),
        VAlign::Center => (rect.height - text_height) * -0.5,
        VAlign::Bottom => 0.0,
    };

    for q in &mut quads {
        q.x0 += dx;
        q.x1 += dx;
        q.y0 += dy;
        q.y1 += dy;
    }

    TextRun { quads, pen_x: pen.x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font::tests::synthetic_font;

    fn rect() -> Rectangle {
        Rectangle::new(10.0, 0.0, 100.0, 40.0)
    }

    // ── pen & clipping ────────────────────────────────────────────────────

    #[test]
    fn empty_text_returns_rect_x() {
        let f = synthetic_font(10.0);
        let run = layout_text(&f, "", rect(), Alignment::CENTER, 1.0);
        assert!(run.quads.is_empty());
        assert_eq!(run.pen_x, 10.0);
    }

    #[test]
    fn one_quad_per_char_and_pen_advances() {
        let f = synthetic_font(10.0);
        let run = layout_text(&f, "ABC", rect(), Alignment::BOTTOM_LEFT, 1.0);
        assert_eq!(run.quads.len(), 3);
        assert_eq!(run.pen_x, 10.0 + 3.0 * 8.0);
        assert_eq!((run.quads[0].x0, run.quads[0].y0, run.quads[0].y1), (10.0, 30.0, 40.0));
        assert_eq!(run.quads[2].x0, 26.0);
    }

    #[test]
    fn run_stops_past_right_edge_and_clips_last() {
        let f = synthetic_font(10.0);
        let narrow = Rectangle::new(0.0, 0.0, 12.0, 40.0);
        let run = layout_text(&f, "AAAA", narrow, Alignment::BOTTOM_LEFT, 1.0);
        // second glyph starts at 8 (inside), third at 16 (outside)
        assert_eq!(run.quads.len(), 2);
        assert_eq!(run.quads[1].x1, 12.0);
    }

    #[test]
    fn tall_glyph_is_clipped_to_rect_top() {
        let f = synthetic_font(10.0);
        let short = Rectangle::new(0.0, 0.0, 100.0, 6.0);
        let run = layout_text(&f, "A", short, Alignment::BOTTOM_LEFT, 1.0);
        assert_eq!(run.quads[0].y0, 0.0);
    }

    #[test]
    fn unknown_chars_render_the_fallback() {
        let f = synthetic_font(10.0);
        let run = layout_text(&f, "zz", rect(), Alignment::BOTTOM_LEFT, 1.0);
        assert_eq!(run.quads.len(), 2);
        let e = layout_text(&f, "E", rect(), Alignment::BOTTOM_LEFT, 1.0);
        assert_eq!(run.quads[0].s0, e.quads[0].s0);
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn half_scale_shrinks_quad_and_pulls_pen_back() {
        let f = synthetic_font(10.0);
        let run = layout_text(&f, "AB", rect(), Alignment::BOTTOM_LEFT, 0.5);
        let q = run.quads[0];
        assert_eq!(q.x1, 10.0 + 6.0 - 4.0);
        assert_eq!(q.y0, 35.0);
        assert_eq!(run.pen_x, 10.0 + 2.0 * 4.0);
    }

    // ── alignment ─────────────────────────────────────────────────────────

    #[test]
    fn horizontal_alignment_offsets() {
        let f = synthetic_font(10.0);
        // "AB": x0 = 10, last x1 = 18 + 6 = 24 → width 14
        let left = layout_text(&f, "AB", rect(), Alignment::BOTTOM_LEFT, 1.0);
        let center = layout_text(&f, "AB", rect(), Alignment::BOTTOM, 1.0);
        let right = layout_text(&f, "AB", rect(), Alignment::BOTTOM_RIGHT, 1.0);
        assert_eq!(left.quads[0].x0, 10.0);
        assert_eq!(center.quads[0].x0, 10.0 + 43.0);
        assert_eq!(right.quads[0].x0, 10.0 + 86.0);
    }

    #[test]
    fn vertical_alignment_offsets() {
        let f = synthetic_font(10.0);
        // glyph spans 30..40, text height 10, rect height 40
        let top = layout_text(&f, "A", rect(), Alignment::TOP_LEFT, 1.0);
        let center = layout_text(&f, "A", rect(), Alignment::LEFT, 1.0);
        let bottom = layout_text(&f, "A", rect(), Alignment::BOTTOM_LEFT, 1.0);
        assert_eq!(top.quads[0].y0, 0.0);
        assert_eq!(center.quads[0].y0, 15.0);
        assert_eq!(bottom.quads[0].y0, 30.0);
    }

    #[test]
    fn default_alignment_is_centered() {
        assert_eq!(Alignment::default(), Alignment::CENTER);
    }
}
