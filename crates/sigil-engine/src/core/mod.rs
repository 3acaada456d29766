//! The per-frame GUI context.
//!
//! Everything a widget needs (input, focus, the open window, the font and the
//! draw batches) hangs off [`Context`]; widgets borrow it mutably for the
//! duration of one call.

mod context;

pub use context::{Context, RenderHandler};
