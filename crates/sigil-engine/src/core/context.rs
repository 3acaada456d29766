use std::any::Any;
use std::path::Path;

use crate::config::ContextConfig;
use crate::coords::{Point, Rectangle, Triangle};
use crate::error::{FontLoadError, NoRenderHandlerError};
use crate::focus::Focus;
use crate::input::Mouse;
use crate::paint::{colors, Color};
use crate::scene::{BatchScope, DrawBatch, Figure, TextureId};
use crate::text::{layout_text, Alignment, Font, FontBitmap};
use crate::window::{Window, WindowAnchor, WindowSummary};

/// Receives one batch of figures plus the host's user data.
pub type RenderHandler = Box<dyn FnMut(&[Figure], Option<&dyn Any>)>;

/// Row height used by lists and scrollbars when no font is loaded.
const DEFAULT_LINE_HEIGHT: f32 = 16.0;

/// Owns all per-frame GUI state.
///
/// Frame lifecycle:
/// 1. [`start_new_frame`](Self::start_new_frame)
/// 2. feed input into [`mouse`](Self::mouse)
/// 3. widget calls, optionally grouped with `start_window` / `end_window`
/// 4. [`render_all`](Self::render_all)
///
/// Mutated only through `&mut`; not `Send`.
pub struct Context {
    pub mouse: Mouse,
    pub focus: Focus,
    config: ContextConfig,
    font: Option<Font>,
    batch: DrawBatch,
    window: Option<Window>,
    render_handler: Option<RenderHandler>,
    user_data: Option<Box<dyn Any>>,
    frame_counter: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            mouse: Mouse::default(),
            focus: Focus::new(),
            config,
            font: None,
            batch: DrawBatch::new(),
            window: None,
            render_handler: None,
            user_data: None,
            frame_counter: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    // ── host wiring ───────────────────────────────────────────────────────

    pub fn set_render_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&[Figure], Option<&dyn Any>) + 'static,
    {
        self.render_handler = Some(Box::new(handler));
    }

    /// Stores host data handed back to the render handler.
    pub fn set_user_data<T: Any>(&mut self, data: T) {
        self.user_data = Some(Box::new(data));
    }

    pub fn user_data(&self) -> Option<&dyn Any> {
        self.user_data.as_deref()
    }

    pub fn take_user_data(&mut self) -> Option<Box<dyn Any>> {
        self.user_data.take()
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Clears both batches, ends click and wheel pulses and bumps the frame counter.
    pub fn start_new_frame(&mut self) {
        self.batch.clear();
        self.mouse.start_frame();
        self.focus.reset_counter();
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    #[inline]
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Figures emitted so far this frame.
    #[inline]
    pub fn draw_batch(&self) -> &DrawBatch {
        &self.batch
    }

    /// Ends any open window, then hands the window batch and the global batch
    /// (each only if non-empty, in that order) to the render handler.
    pub fn render_all(&mut self) -> Result<(), NoRenderHandlerError> {
        if self.render_handler.is_none() {
            return Err(NoRenderHandlerError);
        }
        if self.window.is_some() {
            log::debug!("render_all: ending open window");
            self.end_window();
        }

        let user_data = self.user_data.as_deref();
        if let Some(handler) = self.render_handler.as_mut() {
            log::debug!(
                "render_all: frame {}, {} window figures, {} global figures",
                self.frame_counter,
                self.batch.window().len(),
                self.batch.global().len()
            );
            if !self.batch.window().is_empty() {
                handler(self.batch.window(), user_data);
            }
            if !self.batch.global().is_empty() {
                handler(self.batch.global(), user_data);
            }
        }
        Ok(())
    }

    // ── font ──────────────────────────────────────────────────────────────

    /// Loads and bakes a font file. On success the returned bitmap must be
    /// uploaded by the host under `texture`; on failure the previous font stays.
    pub fn set_font(
        &mut self,
        path: impl AsRef<Path>,
        texture: TextureId,
        pixel_size: f32,
    ) -> Result<FontBitmap, FontLoadError> {
        let path = path.as_ref();
        let baked = Font::validate_request(path, texture, pixel_size)
            .and_then(|()| Font::read_file(path))
            .and_then(|bytes| Font::bake(path, &bytes, texture, pixel_size, &self.config.font));
        self.install_font(path, baked)
    }

    /// Like [`set_font`](Self::set_font) for font bytes the host already has.
    /// `label` only names the font in errors and logs.
    pub fn set_font_from_bytes(
        &mut self,
        label: impl AsRef<Path>,
        bytes: &[u8],
        texture: TextureId,
        pixel_size: f32,
    ) -> Result<FontBitmap, FontLoadError> {
        let label = label.as_ref();
        let baked = Font::bake(label, bytes, texture, pixel_size, &self.config.font);
        self.install_font(label, baked)
    }

    fn install_font(
        &mut self,
        path: &Path,
        baked: Result<(Font, FontBitmap), FontLoadError>,
    ) -> Result<FontBitmap, FontLoadError> {
        match baked {
            Ok((font, bitmap)) => {
                log::info!(
                    "font [{}] baked at {}px: {} glyphs, atlas {}x{}",
                    path.display(),
                    font.pixel_size(),
                    font.glyph_count(),
                    bitmap.width,
                    bitmap.height
                );
                self.font = Some(font);
                Ok(bitmap)
            }
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }

    #[inline]
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// Pixel size of the current font, `0.0` without one.
    pub fn font_size(&self) -> f32 {
        self.font.as_ref().map_or(0.0, Font::pixel_size)
    }

    /// Height of one text row; the font size, or a fixed default without a font.
    pub fn line_height(&self) -> f32 {
        let size = self.font_size();
        if size > 0.0 { size } else { DEFAULT_LINE_HEIGHT }
    }

    // ── windows ───────────────────────────────────────────────────────────

    /// Opens a window at `anchor`. A window that is still open is ended first.
    pub fn start_window(&mut self, title: &str, anchor: &WindowAnchor) {
        if let Some(open) = &self.window {
            log::debug!("start_window({title:?}): ending open window {:?}", open.title);
            self.end_window();
        }
        let batch_start = self.batch.len(BatchScope::Window);
        self.window = Some(Window::open(title, anchor, self.font_size(), batch_start));
    }

    /// Draws the open window's chrome under its widgets and handles title bar
    /// dragging. Returns `None` when no window is open.
    pub fn end_window(&mut self) -> Option<WindowSummary> {
        let mut window = self.window.take()?;
        let (outer, chrome) = window.finish();

        let before = self.batch.len(BatchScope::Window);
        self.push(BatchScope::Window, Figure::solid_rect(chrome.header, colors::MEDIUM_GREY.with_alpha(200)));
        self.push(BatchScope::Window, Figure::solid_triangle(chrome.triangle, colors::LIGHT_GREY));
        self.push_text(BatchScope::Window, &window.title, chrome.title_box, Alignment::CENTER, 1.0);
        self.push(BatchScope::Window, Figure::solid_rect(chrome.body, colors::MEDIUM_GREY.with_alpha(100)));
        let chrome_count = self.batch.len(BatchScope::Window) - before;
        self.batch.move_window_tail_to(window.batch_start, chrome_count);

        let id = Focus::window_id(&window.title);
        let left = &self.mouse.left;
        let moved = if left.is_pressed() && chrome.header.contains(left.clicked_pos()) && self.focus.claim(id) {
            let delta = self.mouse.cursor_pos() - self.mouse.left.clicked_pos();
            window.anchor.move_by(delta);
            self.mouse.left.shift_clicked_pos(delta);
            if delta != Point::zero() {
                log::trace!("window {:?} dragged by ({}, {})", window.title, delta.x, delta.y);
            }
            delta != Point::zero()
        } else {
            self.focus.release(id);
            false
        };

        Some(WindowSummary { title: window.title, rect: outer, moved })
    }

    #[inline]
    pub fn is_window_open(&self) -> bool {
        self.window.is_some()
    }

    /// Title bar height of the open window.
    pub fn title_bar_height(&self) -> Option<f32> {
        self.window.as_ref().map(Window::title_bar_height)
    }

    /// Maps a window-relative rectangle into the open window's content area,
    /// growing the window to fit. Without an open window `rect` is returned as is.
    pub fn fit_rect_in_window(&mut self, rect: Rectangle) -> Rectangle {
        match self.window.as_mut() {
            Some(window) => window.fit_rect(rect),
            None => rect,
        }
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Lays out and emits `text`; returns the pen x after the last glyph.
    /// Without a font nothing is drawn and `rect.x` is returned.
    pub fn render_text(&mut self, text: &str, rect: Rectangle, alignment: Alignment, scale: f32) -> f32 {
        self.push_text(self.scope(), text, rect, alignment, scale)
    }

    pub fn render_rectangle(&mut self, rect: Rectangle, color: Color) {
        self.push(self.scope(), Figure::solid_rect(rect, color));
    }

    pub fn render_textured_rectangle(&mut self, rect: Rectangle, texture: TextureId) {
        self.push(self.scope(), Figure::textured_rect(rect, texture));
    }

    pub fn render_triangle(&mut self, triangle: Triangle, color: Color) {
        self.push(self.scope(), Figure::solid_triangle(triangle, color));
    }

    fn scope(&self) -> BatchScope {
        if self.window.is_some() { BatchScope::Window } else { BatchScope::Global }
    }

    #[inline]
    fn push(&mut self, scope: BatchScope, figure: Figure) {
        self.batch.push(scope, figure);
    }

    fn push_text(&mut self, scope: BatchScope, text: &str, rect: Rectangle, alignment: Alignment, scale: f32) -> f32 {
        let Some(font) = self.font.as_ref() else {
            return rect.x;
        };
        let run = layout_text(font, text, rect, alignment, scale);
        let texture = font.texture();
        let tint = self.config.text_color;
        for q in &run.quads {
            let quad = Rectangle::new(q.x0, q.y0, q.x1 - q.x0, q.y1 - q.y0);
            let uv = (Point::new(q.s0, q.t0), Point::new(q.s1, q.t1));
            self.batch.push(scope, Figure::textured_quad(quad, uv, tint, texture));
        }
        run.pen_x
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
