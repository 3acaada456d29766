use super::Point;

/// Three corners of a solid triangle, in emission order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Triangle {
    #[inline]
    pub const fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    #[inline]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.p0, self.p1, self.p2]
    }
}
