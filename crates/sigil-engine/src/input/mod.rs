//! Input subsystem.
//!
//! The host feeds pointer state into [`Mouse`] between `start_new_frame` and
//! the widget calls, either directly (`press`, `place`, `scroll`) or through
//! [`InputEvent`]s produced by a platform adapter.

mod mouse;
mod types;

pub mod platform {
    pub mod winit;
}

pub use mouse::{Mouse, MouseButton};
pub use types::{Button, ButtonState, InputEvent};
