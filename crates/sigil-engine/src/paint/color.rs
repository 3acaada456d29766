use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color with byte components.
///
/// Layout is `r, g, b, a` in memory. The packed `u32` form (see
/// [`to_packed`](Self::to_packed)) keeps red in the lowest byte and alpha in the
/// highest, which is what render handlers uploading raw vertex bytes rely on.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Packs into `0xAABBGGRR`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Inverse of [`to_packed`](Self::to_packed).
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
            a: ((packed >> 24) & 0xFF) as u8,
        }
    }

    /// Adds `delta` to each RGB channel, saturating at 255. Alpha is kept.
    #[inline]
    pub const fn lighten_by(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
            a: self.a,
        }
    }

    /// Perceived brightness (YIQ luma) in `0..=255`.
    #[inline]
    pub const fn luma(self) -> u8 {
        ((299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000) as u8
    }

    /// Black for light backgrounds, white for dark ones.
    #[inline]
    pub const fn contrast(self) -> Self {
        if self.luma() >= 128 { super::colors::BLACK } else { super::colors::WHITE }
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        super::colors::BLACK
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::from_packed(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::colors;

    #[test]
    fn packed_byte_order_red_low_alpha_high() {
        let c = Color::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_packed(), 0x4433_2211);
        assert_eq!(c.to_packed().to_le_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn packed_matches_memory_layout() {
        let c = Color::new(1, 2, 3, 4);
        let as_u32: u32 = bytemuck::cast(c);
        assert_eq!(as_u32, u32::from_le_bytes([1, 2, 3, 4]));
        #[cfg(target_endian = "little")]
        assert_eq!(as_u32, c.to_packed());
    }

    #[test]
    fn from_packed_inverts_to_packed() {
        let c = Color::new(200, 10, 99, 7);
        assert_eq!(Color::from_packed(c.to_packed()), c);
        assert_eq!(Color::from(0xFF00_00FFu32), Color::new(0xFF, 0, 0, 0xFF));
    }

    #[test]
    fn lighten_saturates_and_keeps_alpha() {
        let c = Color::new(10, 240, 255, 100).lighten_by(30);
        assert_eq!(c, Color::new(40, 255, 255, 100));
    }

    #[test]
    fn contrast_picks_black_on_light() {
        assert_eq!(colors::WHITE.contrast(), colors::BLACK);
        assert_eq!(Color::rgb(200, 200, 0).contrast(), colors::BLACK);
    }

    #[test]
    fn contrast_picks_white_on_dark() {
        assert_eq!(colors::BLACK.contrast(), colors::WHITE);
        assert_eq!(Color::rgb(0, 0, 255).contrast(), colors::WHITE);
    }

    #[test]
    fn contrast_threshold_is_inclusive() {
        // luma of (128, 128, 128) is exactly 128
        assert_eq!(Color::rgb(128, 128, 128).luma(), 128);
        assert_eq!(Color::rgb(128, 128, 128).contrast(), colors::BLACK);
        assert_eq!(Color::rgb(127, 127, 127).contrast(), colors::WHITE);
    }
}
