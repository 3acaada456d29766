//! Window bookkeeping: caller-owned position, auto-grow while widgets are
//! placed, and the chrome geometry drawn when the window ends.

use std::cell::Cell;
use std::rc::Rc;

use crate::coords::{Point, Rectangle, Triangle};

/// Gap between the window edge and its content, and padding added at the end.
const INNER_PADDING: f32 = 4.0;
/// Title bar height on top of the font size.
const TITLE_BAR_EXTRA: f32 = 8.0;

/// Caller-owned window position.
///
/// Clones share the same cell, so the host keeps one anchor per window across
/// frames and the engine moves it when the title bar is dragged.
#[derive(Debug, Clone, Default)]
pub struct WindowAnchor(Rc<Cell<Point>>);

impl WindowAnchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Rc::new(Cell::new(Point::new(x, y))))
    }

    #[inline]
    pub fn get(&self) -> Point {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, p: Point) {
        self.0.set(p);
    }

    #[inline]
    pub fn move_by(&self, delta: Point) {
        self.0.set(self.0.get() + delta);
    }
}

/// What `end_window` produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    pub title: String,
    /// Outer rectangle as drawn this frame, before any drag was applied.
    pub rect: Rectangle,
    /// The title bar was dragged and the anchor moved.
    pub moved: bool,
}

/// Geometry of the decorations drawn for a finished window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct WindowChrome {
    pub header: Rectangle,
    pub triangle: Triangle,
    pub title_box: Rectangle,
    pub body: Rectangle,
}

/// The window currently being filled.
#[derive(Debug)]
pub(crate) struct Window {
    pub title: String,
    pub anchor: WindowAnchor,
    width: f32,
    height: f32,
    title_bar_height: f32,
    /// Window batch length when this window started.
    pub batch_start: usize,
}

impl Window {
    pub(crate) fn open(title: &str, anchor: &WindowAnchor, font_size: f32, batch_start: usize) -> Self {
        Self {
            title: title.to_owned(),
            anchor: anchor.clone(),
            width: 0.0,
            height: 0.0,
            title_bar_height: TITLE_BAR_EXTRA + font_size,
            batch_start,
        }
    }

    #[inline]
    pub(crate) fn title_bar_height(&self) -> f32 {
        self.title_bar_height
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Translates a window-relative rectangle to screen space and grows the
    /// window to contain it.
    pub(crate) fn fit_rect(&mut self, mut rect: Rectangle) -> Rectangle {
        let origin = self.anchor.get();
        rect.x += origin.x + INNER_PADDING;
        rect.y += origin.y + self.title_bar_height + INNER_PADDING;

        if origin.x + self.width < rect.x2() {
            self.width = rect.x2() - origin.x;
        }
        if origin.y + self.height < rect.y2() {
            self.height = rect.y2() - origin.y;
        }
        if rect.x < origin.x {
            rect.x = origin.x + INNER_PADDING;
        }
        if rect.y < origin.y {
            rect.y = origin.y + INNER_PADDING;
        }
        rect
    }

    /// Adds the closing padding and lays out the decorations.
    pub(crate) fn finish(&mut self) -> (Rectangle, WindowChrome) {
        self.width += INNER_PADDING;
        self.height += INNER_PADDING;

        let Point { x, y } = self.anchor.get();
        let (w, h, tb) = (self.width, self.height, self.title_bar_height);

        let chrome = WindowChrome {
            header: Rectangle::new(x, y, w, tb),
            triangle: Triangle::from_coords(
                x + 3.0,
                y + 3.0,
                x + 3.0 + tb,
                y + 3.0,
                x + 3.0 + tb / 2.0,
                y + tb - 3.0,
            ),
            title_box: Rectangle::new(x + tb + 4.0, y + 4.0, w - tb - 4.0, tb - 4.0),
            body: Rectangle::new(x, y + tb, w, h - tb),
        };
        (Rectangle::new(x, y, w, h), chrome)
    }
}
