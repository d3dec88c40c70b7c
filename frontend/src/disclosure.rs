//! Reactive wrapper around the single-open accordion state machine.
//!
//! Both the FAQ and the tour schedule render through this controller; each
//! accordion owns its own instance so the two never interfere.

use shared::DisclosureState;
use zoon::*;

#[derive(Clone)]
pub struct DisclosureList {
    state: Mutable<DisclosureState>,
}

impl DisclosureList {
    pub fn new(len: usize) -> Self {
        Self {
            state: Mutable::new(DisclosureState::new(len)),
        }
    }

    /// Toggle-or-replace selection. Synchronous; the only side effect is the
    /// state change itself.
    pub fn select(&self, index: usize) {
        self.state.lock_mut().select(index);
    }

    /// Current open index, for event handlers. Views should bind signals.
    pub fn open_index(&self) -> Option<usize> {
        self.state.get().open_index()
    }

    pub fn is_open_signal(&self, index: usize) -> impl Signal<Item = bool> + use<> {
        self.state
            .signal()
            .map(move |state| state.is_open(index))
            .dedupe()
    }

    pub fn open_index_signal(&self) -> impl Signal<Item = Option<usize>> + use<> {
        self.state.signal().map(|state| state.open_index()).dedupe()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn select_routes_through_state_machine() {
        let list = DisclosureList::new(5);
        list.select(2);
        assert_eq!(list.open_index(), Some(2));
        list.select(4);
        assert_eq!(list.open_index(), Some(4));
        list.select(4);
        assert_eq!(list.open_index(), None);
    }

    #[test]
    fn independent_lists_do_not_interfere() {
        let faq = DisclosureList::new(5);
        let schedule = DisclosureList::new(10);
        faq.select(1);
        schedule.select(7);
        assert_eq!(faq.open_index(), Some(1));
        assert_eq!(schedule.open_index(), Some(7));
    }
}
