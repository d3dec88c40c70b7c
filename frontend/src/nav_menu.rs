//! Mobile navigation menu controller.

use shared::MenuState;
use zoon::*;

#[derive(Clone, Default)]
pub struct NavMenu {
    state: Mutable<MenuState>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self) {
        self.state.lock_mut().toggle();
    }

    /// Invoked by every navigation link in the panel, not only the toggle
    /// button, so following a link also dismisses the menu.
    pub fn close(&self) {
        self.state.lock_mut().close();
    }

    pub fn is_open_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal().map(|state| state.is_open()).dedupe()
    }
}
