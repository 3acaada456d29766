//! Color model shared between widgets and render handlers.
//!
//! Colors are straight-alpha bytes. Blending policy belongs to the backend.

pub mod color;

pub use color::Color;

/// Named colors used by the built-in window chrome and by hosts.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 57, 70);
    pub const GREEN: Color = Color::rgb(42, 157, 143);
    pub const BLUE: Color = Color::rgb(69, 123, 157);
    pub const YELLOW: Color = Color::rgb(233, 196, 106);
    pub const ORANGE: Color = Color::rgb(244, 162, 97);
    pub const VIOLET: Color = Color::rgb(124, 77, 255);
    pub const LIGHT_GREY: Color = Color::rgb(200, 200, 200);
    pub const MEDIUM_GREY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GREY: Color = Color::rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}
