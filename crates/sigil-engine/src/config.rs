//! Context configuration.

use crate::paint::{colors, Color};

/// Glyph atlas parameters used when baking a font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    pub atlas_width: u32,
    pub atlas_height: u32,
    /// First code baked into the atlas.
    pub first_char: char,
    /// Number of consecutive codes baked, starting at `first_char`.
    pub char_count: u32,
    /// Substitute for codes outside the baked range. Must itself be baked.
    pub fallback_char: char,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas_width: 512,
            atlas_height: 512,
            first_char: ' ',
            char_count: 96,
            fallback_char: '\u{7f}',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    pub font: FontConfig,
    /// Tint applied to every glyph quad.
    pub text_color: Color,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { font: FontConfig::default(), text_color: colors::BLACK }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_printable_ascii_plus_del() {
        let cfg = FontConfig::default();
        let last = char::from_u32(cfg.first_char as u32 + cfg.char_count - 1);
        assert_eq!(last, Some('\u{7f}'));
        assert_eq!(last, Some(cfg.fallback_char));
    }
}
