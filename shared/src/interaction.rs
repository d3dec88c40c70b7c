//! Pure interaction state machines.
//!
//! The frontend wraps these in reactive state (`zoon::Mutable`); the
//! transitions themselves are synchronous and platform-free so the invariants
//! can run under native `cargo test`.

/// Single-open disclosure list (accordion) state.
///
/// At most one item is expanded at any time. Selecting the open item again
/// collapses it; selecting any other item replaces the open one. Out-of-range
/// indices leave the state untouched so a stale click can never corrupt it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    open: Option<usize>,
    len: usize,
}

impl DisclosureState {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Carousel index state. The length is clamped to at least 1 at construction,
/// matching the fallback-image policy, so `advance` can never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

/// Mobile navigation menu state. Toggled by the menu button; force-closed by
/// every navigation link so following a link also dismisses the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Viewport width below which scroll-triggered animations are disabled.
pub const MOBILE_VIEWPORT_MAX_PX: f64 = 768.0;

/// Gate for the scroll reveal bridge. A reduced-motion preference or a narrow
/// viewport disables the animations entirely; this is an accessibility
/// requirement, not an optimization.
pub fn reveal_allowed(prefers_reduced_motion: bool, viewport_width_px: f64) -> bool {
    !prefers_reduced_motion && viewport_width_px >= MOBILE_VIEWPORT_MAX_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_starts_closed() {
        let state = DisclosureState::new(5);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn disclosure_select_opens_single_item() {
        let mut state = DisclosureState::new(5);
        state.select(2);
        assert_eq!(state.open_index(), Some(2));
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn disclosure_reselect_closes() {
        let mut state = DisclosureState::new(5);
        state.select(3);
        state.select(3);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn disclosure_select_other_replaces_open_item() {
        let mut state = DisclosureState::new(5);
        state.select(2);
        state.select(4);
        assert_eq!(state.open_index(), Some(4));
        assert!(!state.is_open(2));
    }

    #[test]
    fn disclosure_faq_scenario() {
        // FAQ list of 5: open item 2, then item 4, then close item 4.
        let mut state = DisclosureState::new(5);
        state.select(2);
        state.select(4);
        assert_eq!(state.open_index(), Some(4));
        state.select(4);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn disclosure_at_most_one_open_over_any_sequence() {
        let mut state = DisclosureState::new(10);
        for index in [0, 7, 7, 3, 9, 9, 0, 5] {
            state.select(index);
            let open_count = (0..10).filter(|i| state.is_open(*i)).count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn disclosure_ignores_out_of_range_index() {
        let mut state = DisclosureState::new(3);
        state.select(1);
        state.select(3);
        assert_eq!(state.open_index(), Some(1));
        state.select(usize::MAX);
        assert_eq!(state.open_index(), Some(1));
    }

    #[test]
    fn disclosure_empty_list_never_opens() {
        let mut state = DisclosureState::new(0);
        state.select(0);
        assert_eq!(state.open_index(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn carousel_advances_modulo_length() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.index(), 0);
        state.advance();
        assert_eq!(state.index(), 1);
        state.advance();
        state.advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn carousel_index_is_tick_count_modulo_length() {
        let mut state = CarouselState::new(3);
        for tick in 1..=20 {
            state.advance();
            assert_eq!(state.index(), tick % 3);
        }
    }

    #[test]
    fn carousel_single_image_is_noop_advance() {
        let mut state = CarouselState::new(1);
        state.advance();
        state.advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn carousel_zero_length_clamps_to_one() {
        let mut state = CarouselState::new(0);
        assert_eq!(state.len(), 1);
        state.advance();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn reveal_gating() {
        assert!(reveal_allowed(false, 1280.0));
        assert!(!reveal_allowed(true, 1280.0));
        assert!(!reveal_allowed(false, 500.0));
        assert!(!reveal_allowed(true, 500.0));
        assert!(reveal_allowed(false, MOBILE_VIEWPORT_MAX_PX));
    }
}
