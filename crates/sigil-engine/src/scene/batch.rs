use super::Figure;

/// Ordered figures submitted for one render pass. Order is paint order.
pub type DrawData = Vec<Figure>;

/// Where emitted figures go for the rest of the frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchScope {
    /// A window is open; figures belong to the window pass.
    Window,
    Global,
}

/// The two per-frame batches: everything drawn inside windows, then
/// everything drawn outside them.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for the next frame
#[derive(Debug, Default)]
pub struct DrawBatch {
    window: DrawData,
    global: DrawData,
}

impl DrawBatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.window.clear();
        self.global.clear();
    }

    #[inline]
    pub fn push(&mut self, scope: BatchScope, figure: Figure) {
        self.scope_mut(scope).push(figure);
    }

    #[inline]
    pub fn window(&self) -> &[Figure] {
        &self.window
    }

    #[inline]
    pub fn global(&self) -> &[Figure] {
        &self.global
    }

    #[inline]
    pub fn len(&self, scope: BatchScope) -> usize {
        match scope {
            BatchScope::Window => self.window.len(),
            BatchScope::Global => self.global.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty() && self.global.is_empty()
    }

    /// Moves the last `count` window figures so they start at `at`, keeping
    /// their relative order and shifting the figures they jump over back.
    ///
    /// Used to slide window chrome, emitted at `end_window`, underneath the
    /// widgets that window already emitted.
    pub(crate) fn move_window_tail_to(&mut self, at: usize, count: usize) {
        let len = self.window.len();
        if at >= len || count == 0 {
            return;
        }
        let count = count.min(len - at);
        self.window[at..].rotate_right(count);
    }

    fn scope_mut(&mut self, scope: BatchScope) -> &mut DrawData {
        match scope {
            BatchScope::Window => &mut self.window,
            BatchScope::Global => &mut self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rectangle;
    use crate::paint::Color;

    fn fig(tag: u8) -> Figure {
        Figure::solid_rect(Rectangle::new(0.0, 0.0, 1.0, 1.0), Color::rgb(tag, 0, 0))
    }

    fn tags(figs: &[Figure]) -> Vec<u8> {
        figs.iter().map(|f| f.vertices()[0].color.r).collect()
    }

    #[test]
    fn push_routes_by_scope_in_call_order() {
        let mut b = DrawBatch::new();
        b.push(BatchScope::Global, fig(1));
        b.push(BatchScope::Window, fig(2));
        b.push(BatchScope::Global, fig(3));
        assert_eq!(tags(b.window()), vec![2]);
        assert_eq!(tags(b.global()), vec![1, 3]);
    }

    #[test]
    fn clear_empties_both() {
        let mut b = DrawBatch::new();
        b.push(BatchScope::Global, fig(1));
        b.push(BatchScope::Window, fig(2));
        b.clear();
        assert!(b.is_empty());
    }

    #[test]
    fn move_window_tail_keeps_relative_order() {
        let mut b = DrawBatch::new();
        for t in [1, 2, 3, 4, 5] {
            b.push(BatchScope::Window, fig(t));
        }
        // figures 4 and 5 slide in front of 2 and 3
        b.move_window_tail_to(1, 2);
        assert_eq!(tags(b.window()), vec![1, 4, 5, 2, 3]);
    }

    #[test]
    fn move_window_tail_out_of_range_is_noop() {
        let mut b = DrawBatch::new();
        b.push(BatchScope::Window, fig(1));
        b.move_window_tail_to(5, 2);
        b.move_window_tail_to(0, 0);
        assert_eq!(tags(b.window()), vec![1]);
    }
}
