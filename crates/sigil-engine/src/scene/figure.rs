use bytemuck::{Pod, Zeroable};

use crate::coords::{Point, Rectangle, Triangle};
use crate::paint::{colors, Color};

/// Backend texture handle chosen by the host. `0` means "solid color".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// One vertex of a figure.
///
/// Layout (20 bytes):
///
///  offset  0  position   [f32; 2]
///  offset  8  tex_coord  [f32; 2]
///  offset 16  color      [u8; 4]  (r, g, b, a)
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Point,
    pub tex_coord: Point,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Point, tex_coord: Point, color: Color) -> Self {
        Self { position, tex_coord, color }
    }
}

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// One drawable mesh: a triangle list plus the texture to sample.
///
/// Figures are only built by the engine's emit functions, so the index list
/// always has a multiple of three entries, each within the vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    texture: TextureId,
}

impl Figure {
    fn new(vertices: Vec<Vertex>, indices: Vec<u32>, texture: TextureId) -> Self {
        debug_assert!(indices.len() % 3 == 0, "figure index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "figure index out of bounds"
        );
        Self { vertices, indices, texture }
    }

    /// Solid rectangle, corners clockwise from top-left.
    pub(crate) fn solid_rect(rect: Rectangle, color: Color) -> Self {
        let vertices = vec![
            Vertex::new(Point::new(rect.x, rect.y), Point::zero(), color),
            Vertex::new(Point::new(rect.x2(), rect.y), Point::zero(), color),
            Vertex::new(Point::new(rect.x2(), rect.y2()), Point::zero(), color),
            Vertex::new(Point::new(rect.x, rect.y2()), Point::zero(), color),
        ];
        Self::new(vertices, QUAD_INDICES.to_vec(), TextureId::NONE)
    }

    /// Rectangle with the whole texture stretched over it, untinted (white).
    pub(crate) fn textured_rect(rect: Rectangle, texture: TextureId) -> Self {
        Self::textured_quad(
            rect,
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            colors::WHITE,
            texture,
        )
    }

    /// Rectangle sampling the `uv` sub-range `(min, max)` of `texture`, tinted by `color`.
    pub(crate) fn textured_quad(
        rect: Rectangle,
        uv: (Point, Point),
        color: Color,
        texture: TextureId,
    ) -> Self {
        let (s0t0, s1t1) = uv;
        let vertices = vec![
            Vertex::new(Point::new(rect.x, rect.y), s0t0, color),
            Vertex::new(Point::new(rect.x2(), rect.y), Point::new(s1t1.x, s0t0.y), color),
            Vertex::new(Point::new(rect.x2(), rect.y2()), s1t1, color),
            Vertex::new(Point::new(rect.x, rect.y2()), Point::new(s0t0.x, s1t1.y), color),
        ];
        Self::new(vertices, QUAD_INDICES.to_vec(), texture)
    }

    pub(crate) fn solid_triangle(tri: Triangle, color: Color) -> Self {
        let vertices = tri
            .points()
            .iter()
            .map(|&p| Vertex::new(p, Point::zero(), color))
            .collect();
        Self::new(vertices, vec![0, 1, 2], TextureId::NONE)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }
}
