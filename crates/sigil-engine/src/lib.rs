//! Sigil engine crate.
//!
//! Immediate-mode GUI core: input and focus tracking, window layout, font
//! baking and the draw batches handed to a host-provided render handler.
//! Widgets live in `sigil-ui`.

pub mod config;
pub mod coords;
pub mod core;
pub mod error;
pub mod focus;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod window;

pub use crate::core::Context;
