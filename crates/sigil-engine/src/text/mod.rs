//! Font baking and single-line text layout.
//!
//! A font is baked once into an alpha atlas (see [`FontBitmap`]); layout then
//! only produces textured quads that sample that atlas.

mod font;
mod layout;

pub use font::{BakedGlyph, Font, FontBitmap, GlyphQuad};
pub use layout::{layout_text, Alignment, HAlign, VAlign, TextRun};

#[cfg(test)]
pub(crate) use font::tests::{synthetic_font, FIXTURE_FONT};
