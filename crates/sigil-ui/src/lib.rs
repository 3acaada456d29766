//! Sigil UI: the immediate-mode widget library on top of `sigil-engine`.
//!
//! Every widget is a short-lived value: build it, call [`Widget::draw`] once
//! per frame, read the result. Persistent state (slider values, checkbox
//! flags, list scroll offsets, window anchors) stays with the caller.
//!
//! ```rust,ignore
//! use sigil_ui::prelude::*;
//!
//! ctx.start_new_frame();
//! ctx.start_window("Tools", &anchor);
//! if Button::new("Reset", Rectangle::new(0.0, 0.0, 120.0, 32.0), colors::BLUE).draw(&mut ctx) {
//!     value = 0.0;
//! }
//! Checkbox::new(Rectangle::new(0.0, 40.0, 24.0, 24.0), &mut enabled).draw(&mut ctx);
//! ctx.end_window();
//! ctx.render_all()?;
//! ```

pub mod widget;
pub mod widgets;

pub use widget::{Interaction, Widget};

/// Widgets plus the engine types needed to call them.
pub mod prelude {
    pub use crate::widget::{Interaction, Widget};
    pub use crate::widgets::{
        button::{Button, TexturedButton},
        checkbox::{Checkbox, TexturedCheckbox},
        label::Label,
        list::{List, ScrollState},
        scrollbar::Scrollbar,
        slider::{Slider, TexturedSlider},
    };

    pub use sigil_engine::coords::{Point, Rectangle, Triangle};
    pub use sigil_engine::paint::{colors, Color};
    pub use sigil_engine::scene::{Figure, TextureId};
    pub use sigil_engine::text::{Alignment, HAlign, VAlign};
    pub use sigil_engine::window::{WindowAnchor, WindowSummary};
    pub use sigil_engine::Context;
}
