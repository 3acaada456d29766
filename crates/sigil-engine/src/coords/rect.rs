use super::Point;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Point) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge.
    #[inline]
    pub fn x2(self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn y2(self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rectangle by `by` on each axis, keeping it centered.
    ///
    /// Width and height lose exactly `by`; the origin moves by `by / 2`.
    #[inline]
    pub fn shrink(self, by: f32) -> Self {
        let half = by * 0.5;
        Rectangle::new(self.x + half, self.y + half, self.width - by, self.height - by)
    }

    /// Open containment: points on the border are outside.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x > self.x && p.x < self.x2() && p.y > self.y && p.y < self.y2()
    }

    /// Clips `self` to `bounds`. Sizes never go negative; a rectangle that lies
    /// completely outside collapses to zero width and/or height.
    #[inline]
    pub fn trimmed_to(self, bounds: Rectangle) -> Self {
        let x0 = self.x.max(bounds.x);
        let y0 = self.y.max(bounds.y);
        let x1 = self.x2().min(bounds.x2());
        let y1 = self.y2().min(bounds.y2());
        Rectangle::new(x0, y0, (x1 - x0).max(0.0), (y1 - y0).max(0.0))
    }
}
