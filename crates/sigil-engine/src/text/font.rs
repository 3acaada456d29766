use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::FontConfig;
use crate::coords::Point;
use crate::error::{checked_cast, FontLoadError};
use crate::scene::TextureId;

// ── atlas constants ────────────────────────────────────────────────────────

/// Pixels left free around every glyph in the atlas.
const GLYPH_PADDING: u32 = 1;

// ── baked glyph ───────────────────────────────────────────────────────────

/// Placement of one glyph inside the atlas plus its pen metrics.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BakedGlyph {
    /// Atlas pixel box, `x1`/`y1` exclusive.
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
    /// Offset from the pen position (on the baseline) to the bitmap's top-left.
    pub xoff: f32,
    pub yoff: f32,
    pub xadvance: f32,
}

impl BakedGlyph {
    #[inline]
    fn width(&self) -> f32 {
        (self.x1 - self.x0) as f32
    }

    #[inline]
    fn height(&self) -> f32 {
        (self.y1 - self.y0) as f32
    }
}

/// Alpha-only atlas handed back to the host for upload under the font's
/// texture id. Row-major, `width * height` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontBitmap {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Screen-space quad for one glyph with its atlas coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphQuad {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub s0: f32,
    pub t0: f32,
    pub s1: f32,
    pub t1: f32,
}

// ── font ──────────────────────────────────────────────────────────────────

/// A baked font: a contiguous code range laid out in one atlas texture.
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: Vec<BakedGlyph>,
    texture: TextureId,
    pixel_size: f32,
    first_char: u32,
    fallback_index: usize,
    atlas_width: u32,
    atlas_height: u32,
}

impl Font {
    /// Rejects requests that can never succeed before any file is touched.
    pub(crate) fn validate_request(
        path: &Path,
        texture: TextureId,
        pixel_size: f32,
    ) -> Result<(), FontLoadError> {
        if texture.is_none() {
            return Err(FontLoadError::NoTextureId { path: path.to_path_buf() });
        }
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(FontLoadError::InvalidSize { path: path.to_path_buf(), size: pixel_size });
        }
        Ok(())
    }

    /// Reads a whole font file into memory.
    pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, FontLoadError> {
        let open_err = |source| FontLoadError::CouldNotOpenFile { path: path.to_path_buf(), source };

        let mut file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        let len: usize = checked_cast(len)?;

        let mut bytes = Vec::with_capacity(len);
        file.read_to_end(&mut bytes).map_err(open_err)?;
        Ok(bytes)
    }

    /// Rasterizes `config.char_count` codes starting at `config.first_char`
    /// into a fresh atlas using shelf packing.
    ///
    /// The returned bitmap keeps the configured width but only the rows that
    /// were actually used.
    pub(crate) fn bake(
        path: &Path,
        bytes: &[u8],
        texture: TextureId,
        pixel_size: f32,
        config: &FontConfig,
    ) -> Result<(Font, FontBitmap), FontLoadError> {
        Self::validate_request(path, texture, pixel_size)?;

        if bytes.is_empty() {
            return Err(FontLoadError::InvalidFile {
                path: path.to_path_buf(),
                reason: "file is empty".to_string(),
            });
        }

        let settings = fontdue::FontSettings { scale: pixel_size, ..fontdue::FontSettings::default() };
        let face = fontdue::Font::from_bytes(bytes, settings).map_err(|reason| {
            FontLoadError::InvalidFile { path: path.to_path_buf(), reason: reason.to_string() }
        })?;

        let pw = config.atlas_width;
        let ph = config.atlas_height;
        let row_len: usize = checked_cast(pw)?;
        let rows: usize = checked_cast(ph)?;
        let mut pixels = vec![0u8; row_len.saturating_mul(rows)];

        let too_small = || FontLoadError::CouldNotFitCharacters {
            path: path.to_path_buf(),
            size: pixel_size,
            width: pw,
            height: ph,
        };

        let first = u32::from(config.first_char);
        let mut glyphs = Vec::with_capacity(checked_cast(config.char_count)?);
        let (mut x, mut y, mut bottom_y) = (GLYPH_PADDING, GLYPH_PADDING, GLYPH_PADDING);

        for code in first..first.saturating_add(config.char_count) {
            // Surrogate codes have no glyph; they still take a slot so indices stay contiguous.
            let ch = char::from_u32(code);
            let metrics = ch.map_or_else(fontdue::Metrics::default, |ch| face.metrics(ch, pixel_size));
            let gw: u32 = checked_cast(metrics.width)?;
            let gh: u32 = checked_cast(metrics.height)?;

            if x.saturating_add(gw).saturating_add(GLYPH_PADDING) >= pw {
                y = bottom_y;
                x = GLYPH_PADDING;
            }
            if x.saturating_add(gw).saturating_add(GLYPH_PADDING) >= pw
                || y.saturating_add(gh).saturating_add(GLYPH_PADDING) >= ph
            {
                return Err(too_small());
            }

            // Only rasterize once the glyph is known to fit.
            let bitmap = ch.map(|ch| face.rasterize(ch, pixel_size).1).unwrap_or_default();

            let (x_us, y_us): (usize, usize) = (checked_cast(x)?, checked_cast(y)?);
            for (row, src) in bitmap.chunks_exact(metrics.width.max(1)).enumerate().take(metrics.height) {
                let start = (y_us + row) * row_len + x_us;
                pixels[start..start + metrics.width].copy_from_slice(src);
            }

            glyphs.push(BakedGlyph {
                x0: x,
                y0: y,
                x1: x + gw,
                y1: y + gh,
                xoff: metrics.xmin as f32,
                yoff: -(metrics.ymin as f32 + gh as f32),
                xadvance: metrics.advance_width,
            });

            x += gw + GLYPH_PADDING;
            bottom_y = bottom_y.max(y + gh + GLYPH_PADDING);
        }

        let used_rows: usize = checked_cast(bottom_y)?;
        pixels.truncate(row_len * used_rows);

        let font = Font::from_baked(glyphs, texture, pixel_size, config, pw, bottom_y);
        Ok((font, FontBitmap { pixels, width: pw, height: bottom_y }))
    }

    /// Wraps already baked glyphs. `atlas_height` is the used height the
    /// texture coordinates are normalized against.
    pub(crate) fn from_baked(
        glyphs: Vec<BakedGlyph>,
        texture: TextureId,
        pixel_size: f32,
        config: &FontConfig,
        atlas_width: u32,
        atlas_height: u32,
    ) -> Font {
        let first_char = u32::from(config.first_char);
        let last_index = glyphs.len().saturating_sub(1);
        let fallback_index = match u32::from(config.fallback_char).checked_sub(first_char) {
            Some(i) if (i as usize) < glyphs.len() => i as usize,
            _ => {
                log::warn!(
                    "fallback char {:?} is not baked, using the last baked glyph",
                    config.fallback_char
                );
                last_index
            }
        };

        Font {
            glyphs,
            texture,
            pixel_size,
            first_char,
            fallback_index,
            atlas_width,
            atlas_height,
        }
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    #[inline]
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for `ch`, or the fallback glyph for codes outside the baked range.
    /// `None` only when nothing was baked.
    pub fn glyph(&self, ch: char) -> Option<&BakedGlyph> {
        let index = u32::from(ch)
            .checked_sub(self.first_char)
            .map(|i| i as usize)
            .filter(|&i| i < self.glyphs.len())
            .unwrap_or(self.fallback_index);
        self.glyphs.get(index)
    }

    /// Quad for `ch` with the pen at `pen` on the baseline; advances the pen.
    ///
    /// Positions are snapped to whole pixels.
    pub(crate) fn quad(&self, ch: char, pen: &mut Point) -> Option<GlyphQuad> {
        let g = self.glyph(ch)?;
        let ipw = 1.0 / self.atlas_width.max(1) as f32;
        let iph = 1.0 / self.atlas_height.max(1) as f32;

        let round_x = (pen.x + g.xoff + 0.5).floor();
        let round_y = (pen.y + g.yoff + 0.5).floor();

        let quad = GlyphQuad {
            x0: round_x,
            y0: round_y,
            x1: round_x + g.width(),
            y1: round_y + g.height(),
            s0: g.x0 as f32 * ipw,
            t0: g.y0 as f32 * iph,
            s1: g.x1 as f32 * ipw,
            t1: g.y1 as f32 * iph,
        };
        pen.x += g.xadvance;
        Some(quad)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Cantarell Regular (SIL OFL), small enough to bake in tests.
    pub(crate) const FIXTURE_FONT: &[u8] = include_bytes!("../../assets/Cantarell-Regular.ttf");

    fn bake_fixture(pixel_size: f32, config: &FontConfig) -> Result<(Font, FontBitmap), FontLoadError> {
        Font::bake(Path::new("Cantarell-Regular.ttf"), FIXTURE_FONT, TextureId(1), pixel_size, config)
    }

    /// Font with every glyph `6 x 10` px, advance 8, sitting on the baseline.
    /// Only `'A'..='E'` are baked; the fallback is `'E'`.
    pub(crate) fn synthetic_font(pixel_size: f32) -> Font {
        let config = FontConfig {
            atlas_width: 100,
            atlas_height: 20,
            first_char: 'A',
            char_count: 5,
            fallback_char: 'E',
        };
        let glyphs = (0..5u32)
            .map(|i| BakedGlyph {
                x0: 1 + i * 7,
                y0: 1,
                x1: 7 + i * 7,
                y1: 11,
                xoff: 0.0,
                yoff: -10.0,
                xadvance: 8.0,
            })
            .collect();
        Font::from_baked(glyphs, TextureId(3), pixel_size, &config, 100, 20)
    }

    // ── request validation ────────────────────────────────────────────────

    #[test]
    fn texture_zero_is_rejected_first() {
        let err = Font::validate_request(Path::new("x.ttf"), TextureId::NONE, -1.0).unwrap_err();
        assert!(matches!(err, FontLoadError::NoTextureId { .. }));
    }

    #[test]
    fn non_positive_or_nan_size_is_rejected() {
        for size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let err = Font::validate_request(Path::new("x.ttf"), TextureId(1), size).unwrap_err();
            assert!(matches!(err, FontLoadError::InvalidSize { .. }), "size {size}");
        }
    }

    #[test]
    fn missing_file_cannot_be_opened() {
        let path = PathBuf::from("/definitely/not/here/font.ttf");
        let err = Font::read_file(&path).unwrap_err();
        assert!(matches!(err, FontLoadError::CouldNotOpenFile { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_bytes_are_an_invalid_file() {
        let err = Font::bake(Path::new("e.ttf"), &[], TextureId(1), 16.0, &FontConfig::default())
            .unwrap_err();
        assert!(matches!(err, FontLoadError::InvalidFile { .. }));
    }

    #[test]
    fn garbage_bytes_are_an_invalid_file() {
        let err = Font::bake(
            Path::new("g.ttf"),
            b"definitely not a font",
            TextureId(1),
            16.0,
            &FontConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FontLoadError::InvalidFile { .. }));
    }

    // ── baking ────────────────────────────────────────────────────────────

    #[test]
    fn bake_keeps_only_used_rows() {
        let config = FontConfig::default();
        let (font, bitmap) = bake_fixture(20.0, &config).unwrap();

        assert_eq!(font.glyph_count(), 96);
        assert_eq!(font.texture(), TextureId(1));
        assert_eq!(bitmap.width, config.atlas_width);
        assert!(bitmap.height > 0 && bitmap.height <= config.atlas_height);
        assert_eq!(bitmap.pixels.len(), (bitmap.width * bitmap.height) as usize);
        assert!(bitmap.pixels.iter().any(|&p| p > 0));
    }

    #[test]
    fn baked_glyphs_are_padded_and_disjoint() {
        let (font, bitmap) = bake_fixture(20.0, &FontConfig::default()).unwrap();
        let boxes: Vec<BakedGlyph> = font.glyphs.iter().copied().filter(|g| g.x1 > g.x0 && g.y1 > g.y0).collect();
        assert!(boxes.len() > 80);

        for g in &boxes {
            assert!(g.x0 >= GLYPH_PADDING && g.y0 >= GLYPH_PADDING, "{g:?}");
            assert!(g.x1 + GLYPH_PADDING < bitmap.width, "{g:?}");
            assert!(g.y1 + GLYPH_PADDING <= bitmap.height, "{g:?}");
        }
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                let apart = a.x1 + GLYPH_PADDING <= b.x0
                    || b.x1 + GLYPH_PADDING <= a.x0
                    || a.y1 + GLYPH_PADDING <= b.y0
                    || b.y1 + GLYPH_PADDING <= a.y0;
                assert!(apart, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn baked_glyph_pixels_land_inside_their_box() {
        let (font, bitmap) = bake_fixture(20.0, &FontConfig::default()).unwrap();
        let g = font.glyph('H').copied().unwrap();
        let w = bitmap.width as usize;
        let inked = (g.y0..g.y1)
            .flat_map(|y| (g.x0..g.x1).map(move |x| (x as usize, y as usize)))
            .filter(|&(x, y)| bitmap.pixels[y * w + x] > 0)
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn texture_coords_use_the_used_height() {
        let (font, bitmap) = bake_fixture(20.0, &FontConfig::default()).unwrap();
        let g = font.glyph('W').copied().unwrap();
        let mut pen = Point::new(0.0, 100.0);
        let q = font.quad('W', &mut pen).unwrap();
        let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
        assert!(close(q.t1, g.y1 as f32 / bitmap.height as f32));
        assert!(close(q.s1, g.x1 as f32 / bitmap.width as f32));
        assert!(q.t1 <= 1.0);
    }

    #[test]
    fn oversized_glyphs_do_not_fit_the_atlas() {
        for size in [300.0, 2_000.0] {
            let err = bake_fixture(size, &FontConfig::default()).unwrap_err();
            assert!(matches!(err, FontLoadError::CouldNotFitCharacters { .. }), "size {size}: {err}");
        }
    }

    #[test]
    fn small_atlas_runs_out_of_rows() {
        let config = FontConfig { atlas_width: 64, atlas_height: 32, ..FontConfig::default() };
        let err = bake_fixture(20.0, &config).unwrap_err();
        match err {
            FontLoadError::CouldNotFitCharacters { width, height, .. } => assert_eq!((width, height), (64, 32)),
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn glyph_lookup_in_range() {
        let f = synthetic_font(10.0);
        assert_eq!(f.glyph('B').map(|g| g.x0), Some(8));
    }

    #[test]
    fn glyph_lookup_out_of_range_uses_fallback() {
        let f = synthetic_font(10.0);
        let fallback = f.glyph('E').copied();
        assert_eq!(f.glyph('z').copied(), fallback);
        assert_eq!(f.glyph(' ').copied(), fallback);
        assert_eq!(f.glyph('\u{1F600}').copied(), fallback);
    }

    #[test]
    fn unbaked_fallback_falls_back_to_last_glyph() {
        let config = FontConfig { first_char: 'a', char_count: 2, fallback_char: '~', ..FontConfig::default() };
        let glyphs = vec![BakedGlyph { x0: 1, ..Default::default() }, BakedGlyph { x0: 2, ..Default::default() }];
        let f = Font::from_baked(glyphs, TextureId(1), 12.0, &config, 10, 10);
        assert_eq!(f.glyph('q').map(|g| g.x0), Some(2));
    }

    // ── quads ─────────────────────────────────────────────────────────────

    #[test]
    fn quad_snaps_and_advances() {
        let f = synthetic_font(10.0);
        let mut pen = Point::new(10.25, 50.0);
        let q = f.quad('A', &mut pen).unwrap();
        assert_eq!((q.x0, q.y0, q.x1, q.y1), (10.0, 40.0, 16.0, 50.0));
        assert_eq!(pen, Point::new(18.25, 50.0));
        let close = |a: f32, b: f32| (a - b).abs() < 1e-6;
        assert!(close(q.s0, 0.01) && close(q.t0, 0.05));
        assert!(close(q.s1, 0.07) && close(q.t1, 0.55));
    }
}
