//! Headless showcase: drives one window of widgets through a scripted pointer
//! session and logs what the render handler receives each frame.
//!
//! Usage: `sigil-testbed [FONT_PATH]`; without a path a system DejaVu or Noto
//! font is tried.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use sigil_engine::input::{Button as MouseButton, ButtonState, InputEvent};
use sigil_engine::logging::{init_logging, LoggingConfig};
use sigil_ui::prelude::*;

const FONT_TEXTURE: TextureId = TextureId(1);
const FONT_SIZE: f32 = 20.0;

/// What the fake backend saw during one `render_all`.
#[derive(Debug, Default)]
struct FrameStats {
    batches: usize,
    figures: usize,
    triangles: usize,
    glyphs: usize,
}

/// Values the widgets edit, kept across frames.
struct Showcase {
    anchor: WindowAnchor,
    sliders: [f32; 3],
    checkboxes: [bool; 3],
    scroll: ScrollState,
    picked: Option<usize>,
}

impl Showcase {
    fn new() -> Self {
        Self {
            anchor: WindowAnchor::new(10.0, 10.0),
            sliders: [20.0, 5.4, 0.3],
            checkboxes: [false, true, false],
            scroll: ScrollState::default(),
            picked: None,
        }
    }

    fn frame(&mut self, ctx: &mut Context) {
        let mut rect = Rectangle::new(40.0, 0.0, 100.0, 30.0);
        let mut color = Color::rgb(120, 100, 150);

        ctx.start_window("testbed", &self.anchor);
        for i in 0..4u8 {
            rect.x -= 10.0;
            rect.y = 40.0 * f32::from(i);
            color = Color::rgb(color.r.saturating_add(25), color.g.saturating_add(25), color.b);
            let caption = format!("some {}", i + 1);
            if Button::new(&caption, rect, color).draw(ctx) {
                log::info!("button {}: pressed", i + 1);
            }
        }

        rect.y += 40.0;
        rect.width += 50.0;
        if Slider::new(rect, &mut self.sliders[0]).color(color).range(20.0, 40.0).step(5.0).draw(ctx) {
            log::info!("slider 1: new value {}", self.sliders[0]);
        }

        rect.y += 40.0;
        rect.width += 50.0;
        if Slider::new(rect, &mut self.sliders[1]).color(color).range(3.0, 7.0).step(0.1).draw(ctx) {
            log::info!("slider 2: new value {}", self.sliders[1]);
        }

        rect.y += 40.0;
        rect.width += 50.0;
        rect.height += 10.0;
        if Slider::new(rect, &mut self.sliders[2])
            .color(Color::rgb(220, 200, 150))
            .range(0.1, 0.5)
            .step(0.05)
            .draw(ctx)
        {
            log::info!("slider 3: new value {}", self.sliders[2]);
        }

        rect.x += 270.0;
        let boxes = [
            Rectangle::new(rect.x, rect.y, 40.0, 20.0),
            Rectangle::new(rect.x, rect.y - 100.0, 50.0, 50.0),
            Rectangle::new(rect.x, rect.y - 40.0, 25.0, 25.0),
        ];
        for (i, (area, value)) in boxes.iter().zip(self.checkboxes.iter_mut()).enumerate() {
            let before = *value;
            Checkbox::new(*area, &mut *value).color(color).draw(ctx);
            if *value != before {
                log::info!("checkbox {}: new value {}", i + 1, *value);
            }
        }

        let names = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
        let picked = &mut self.picked;
        List::new(
            Rectangle::new(0.0, rect.y + 40.0, 220.0, 80.0),
            &names,
            |name| (*name).to_string(),
            |i, name| {
                log::info!("list: picked {name}");
                *picked = Some(i);
            },
            &mut self.scroll,
        )
        .draw(ctx);

        if let Some(summary) = ctx.end_window() {
            if summary.moved {
                log::info!("window moved to ({}, {})", summary.rect.x, summary.rect.y);
            }
        }

        Label::new("sigil testbed", Rectangle::new(400.0, 10.0, 200.0, 30.0))
            .alignment(Alignment::TOP_LEFT)
            .draw(ctx);
    }
}

/// Pointer script: (frame, event). Presses a button, drags the title bar,
/// wheels over a slider and clicks a checkbox.
fn script() -> Vec<(u64, InputEvent)> {
    let at = |x, y| InputEvent::PointerMoved { x, y };
    let by = |dx, dy| InputEvent::PointerMovedBy { dx, dy };
    let left = |state| InputEvent::Button { button: MouseButton::Left, state };
    let wheel = |delta| InputEvent::Wheel { delta };
    vec![
        (2, at(80.0, 40.0)),
        (2, left(ButtonState::Pressed)),
        (3, left(ButtonState::Released)),
        // title bar drag: the window ends up 40 right, 20 down
        (4, at(20.0, 15.0)),
        (4, left(ButtonState::Pressed)),
        (5, by(30.0, 20.0)),
        (6, by(10.0, 0.0)),
        (7, left(ButtonState::Released)),
        (8, at(100.0, 215.0)),
        (8, wheel(1.0)),
        (9, wheel(-2.0)),
        (10, at(340.0, 290.0)),
        (10, left(ButtonState::Pressed)),
        (11, left(ButtonState::Released)),
    ]
}

/// First DejaVu or Noto sans font found in the usual system locations.
fn system_font() -> Option<String> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find(|p| Path::new(p).is_file())
    .map(|p| p.to_string())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut ctx = Context::new();

    let stats = Rc::new(RefCell::new(FrameStats::default()));
    let sink = Rc::clone(&stats);
    ctx.set_render_handler(move |figures: &[Figure], _user: Option<&dyn std::any::Any>| {
        let mut s = sink.borrow_mut();
        s.batches += 1;
        s.figures += figures.len();
        for fig in figures {
            s.triangles += fig.indices().len() / 3;
            if fig.texture() == FONT_TEXTURE {
                s.glyphs += 1;
            }
        }
    });

    match std::env::args().nth(1).or_else(system_font) {
        Some(path) => {
            let bitmap = ctx
                .set_font(&path, FONT_TEXTURE, FONT_SIZE)
                .with_context(|| format!("loading font {path}"))?;
            log::info!("font atlas {}x{} ({} bytes)", bitmap.width, bitmap.height, bitmap.pixels.len());
        }
        None => log::warn!("no font given and no system font found, text will not be drawn"),
    }

    let script = script();
    let mut showcase = Showcase::new();
    for frame in 1..=12u64 {
        ctx.start_new_frame();
        for (_, event) in script.iter().filter(|(f, _)| *f == frame) {
            ctx.mouse.apply_event(*event);
        }

        showcase.frame(&mut ctx);
        ctx.render_all().context("rendering frame")?;

        let s = std::mem::take(&mut *stats.borrow_mut());
        log::info!(
            "frame {frame}: {} batches, {} figures, {} triangles, {} glyphs",
            s.batches,
            s.figures,
            s.triangles,
            s.glyphs
        );
    }

    let anchor = showcase.anchor.get();
    log::info!(
        "done: window at ({}, {}), sliders {:?}, checkboxes {:?}, list pick {:?}",
        anchor.x,
        anchor.y,
        showcase.sliders,
        showcase.checkboxes,
        showcase.picked
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_font_points_at_a_loadable_file() {
        let Some(path) = system_font() else {
            return;
        };
        let mut ctx = Context::new();
        let bitmap = ctx.set_font(&path, FONT_TEXTURE, FONT_SIZE).unwrap();
        assert!(bitmap.height > 0);
        assert_eq!(ctx.font_size(), FONT_SIZE);
    }
}
