//! Exclusive drag ownership.
//!
//! Overlapping windows all see the same press on their headers. The first one
//! to [`Focus::claim`] the gesture owns it until it releases; everyone else's
//! claim fails for as long as the owner keeps claiming.
//!
//! # Per-frame flow
//!
//! 1. `Context::start_new_frame` calls [`Focus::reset_counter`].
//! 2. Each `end_window` claims with its title-derived id while its header is
//!    being dragged, otherwise releases.
//! 3. Ownership persists across frames; only the per-frame claim count resets.

/// Identifier of a focus participant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FocusId(u64);

/// Ids derived from window titles live above this bit, created ids below.
const WINDOW_ID_BIT: u64 = 1 << 63;

impl FocusId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Focus {
    current: Option<FocusId>,
    next_id: u64,
    claims_this_frame: u32,
}

impl Focus {
    pub fn new() -> Self {
        Self { current: None, next_id: 1, claims_this_frame: 0 }
    }

    /// Allocates a fresh id. Ids increase monotonically per registration.
    pub fn create_id(&mut self) -> FocusId {
        let id = FocusId(self.next_id);
        self.next_id = (self.next_id + 1) & !WINDOW_ID_BIT;
        id
    }

    /// Stable id for a window title. The same title always yields the same id.
    pub fn window_id(title: &str) -> FocusId {
        // FNV-1a
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in title.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        FocusId(hash | WINDOW_ID_BIT)
    }

    #[inline]
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.current == Some(id)
    }

    #[inline]
    pub fn owner(&self) -> Option<FocusId> {
        self.current
    }

    /// Takes ownership if nobody holds it or `id` already does.
    pub fn claim(&mut self, id: FocusId) -> bool {
        match self.current {
            Some(owner) if owner != id => {
                log::trace!("focus claim by {id:?} refused, held by {owner:?}");
                false
            }
            _ => {
                if self.current.is_none() {
                    log::trace!("focus claimed by {id:?}");
                }
                self.current = Some(id);
                self.claims_this_frame += 1;
                true
            }
        }
    }

    /// Drops ownership if `id` holds it; otherwise does nothing.
    pub fn release(&mut self, id: FocusId) {
        if self.current == Some(id) {
            log::trace!("focus released by {id:?}");
            self.current = None;
        }
    }

    /// Successful claims since the last frame start.
    #[inline]
    pub fn claims_this_frame(&self) -> u32 {
        self.claims_this_frame
    }

    /// Clears per-frame bookkeeping. Ownership is kept.
    pub fn reset_counter(&mut self) {
        self.claims_this_frame = 0;
    }
}

impl Default for Focus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_ids_increase() {
        let mut f = Focus::new();
        let a = f.create_id();
        let b = f.create_id();
        assert!(b.raw() > a.raw());
        assert_ne!(a, b);
    }

    #[test]
    fn claim_unowned_succeeds() {
        let mut f = Focus::new();
        let a = f.create_id();
        assert!(f.claim(a));
        assert!(f.is_focused(a));
    }

    #[test]
    fn claim_by_other_fails_and_keeps_owner() {
        let mut f = Focus::new();
        let a = f.create_id();
        let b = f.create_id();
        assert!(f.claim(a));
        assert!(!f.claim(b));
        assert_eq!(f.owner(), Some(a));
        assert!(!f.is_focused(b));
    }

    #[test]
    fn reclaim_by_owner_succeeds() {
        let mut f = Focus::new();
        let a = f.create_id();
        assert!(f.claim(a));
        assert!(f.claim(a));
        assert_eq!(f.claims_this_frame(), 2);
    }

    #[test]
    fn release_by_non_owner_is_noop() {
        let mut f = Focus::new();
        let a = f.create_id();
        let b = f.create_id();
        f.claim(a);
        f.release(b);
        assert!(f.is_focused(a));
        f.release(a);
        assert_eq!(f.owner(), None);
        assert!(f.claim(b));
    }

    #[test]
    fn reset_counter_keeps_ownership() {
        let mut f = Focus::new();
        let a = f.create_id();
        f.claim(a);
        f.reset_counter();
        assert_eq!(f.claims_this_frame(), 0);
        assert!(f.is_focused(a));
    }

    #[test]
    fn window_ids_are_stable_and_distinct() {
        assert_eq!(Focus::window_id("Tools"), Focus::window_id("Tools"));
        assert_ne!(Focus::window_id("Tools"), Focus::window_id("Palette"));

        let mut f = Focus::new();
        let created = f.create_id();
        assert_ne!(created, Focus::window_id(""));
    }
}
