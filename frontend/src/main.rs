//! Legends Road Rally landing page entry point.

use std::sync::OnceLock;
use zoon::*;

/// Stores the root task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod carousel;
mod disclosure;
mod faq;
mod header;
mod hero;
mod nav_menu;
mod perf_monitor;
mod schedule;
mod scroll_reveal;
mod sections;
mod theme;
mod viewport;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = app::LandingApp::new();
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
