//! Draw stream types.
//!
//! Responsibilities:
//! - build figures (vertices, triangle indices, texture) for each primitive
//! - keep window-scoped and global figures in call order

mod batch;
mod figure;

pub use batch::{BatchScope, DrawBatch, DrawData};
pub use figure::{Figure, TextureId, Vertex};
