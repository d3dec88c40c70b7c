//! Scroll-triggered reveal animations.
//!
//! Sections tagged with `data-reveal` fade and slide in the first time they
//! enter the viewport, driven by an `IntersectionObserver`. Construction does
//! no DOM work; observation starts through `activation()` once the page view
//! is inserted into the document, so the target query always sees the mounted
//! sections. Activation is skipped entirely when the user prefers reduced
//! motion or the viewport is narrow; in that case no element style is ever
//! touched, so content stays visible without animation. That gate is an
//! accessibility requirement.

use gloo_timers::callback::Timeout;
use shared::interaction::reveal_allowed;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use zoon::*;

const REVEAL_DURATION_MS: u32 = 600;
const REVEAL_OFFSET_PX: u32 = 100;
const REVEAL_SHIFT_PX: u32 = 24;
const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Owns the observer, the listeners and any pending debounce timer.
/// Dropping it (page-view teardown) releases them all.
pub struct ScrollReveal {
    shared: Rc<RevealShared>,
}

#[derive(Default)]
struct RevealShared {
    active: RefCell<Option<Active>>,
    load_listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

struct Active {
    observer: web_sys::IntersectionObserver,
    _observer_callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    resize_listener: Closure<dyn FnMut()>,
    pending_refresh: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RevealShared::default()),
        }
    }

    /// Hook for the root element's `after_insert`. Runs the accessibility
    /// gate and starts observing; before the page has fully loaded it only
    /// registers a `load` listener and observation starts from there.
    pub fn activation(&self) -> impl FnOnce() + use<> {
        let shared = self.shared.clone();
        move || shared.activate()
    }
}

impl RevealShared {
    fn activate(self: Rc<Self>) {
        let prefers_reduced_motion = web_sys::window()
            .and_then(|window| {
                window
                    .match_media("(prefers-reduced-motion: reduce)")
                    .ok()
                    .flatten()
            })
            .is_some_and(|query| query.matches());
        let viewport_width = web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0);

        if !reveal_allowed(prefers_reduced_motion, viewport_width) {
            return;
        }

        let document_complete = web_sys::window()
            .and_then(|window| window.document())
            .is_some_and(|document| document.ready_state() == "complete");
        if document_complete {
            *self.active.borrow_mut() = Active::init();
            return;
        }

        // Animations start only after the page has fully loaded.
        let load_listener: Closure<dyn FnMut()> = Closure::new({
            let shared = Rc::downgrade(&self);
            move || {
                let Some(shared) = Weak::upgrade(&shared) else {
                    return;
                };
                let mut active = shared.active.borrow_mut();
                if active.is_none() {
                    *active = Active::init();
                }
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("load", load_listener.as_ref().unchecked_ref());
        }
        *self.load_listener.borrow_mut() = Some(load_listener);
    }
}

impl Active {
    fn init() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let nodes = document.query_selector_all("[data-reveal]").ok()?;

        let pending_targets: Rc<RefCell<Vec<web_sys::Element>>> =
            Rc::new(RefCell::new(Vec::new()));
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            let style = element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", &format!("translateY({REVEAL_SHIFT_PX}px)"));
            let _ = style.set_property(
                "transition",
                &format!(
                    "opacity {REVEAL_DURATION_MS}ms ease-out, \
                     transform {REVEAL_DURATION_MS}ms ease-out"
                ),
            );
            pending_targets.borrow_mut().push(element.into());
        }

        let observer_callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)> =
            Closure::new({
                let pending_targets = pending_targets.clone();
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
                            let style = element.style();
                            let _ = style.set_property("opacity", "1");
                            let _ = style.set_property("transform", "none");
                        }
                        // Single fire per element.
                        observer.unobserve(&target);
                        pending_targets
                            .borrow_mut()
                            .retain(|element| element != &target);
                    }
                }
            });

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(&format!("0px 0px -{REVEAL_OFFSET_PX}px 0px"));
        let observer = web_sys::IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        for element in pending_targets.borrow().iter() {
            observer.observe(element);
        }

        let pending_refresh: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let resize_listener: Closure<dyn FnMut()> = Closure::new({
            let observer = observer.clone();
            let pending_targets = pending_targets.clone();
            let pending_refresh = pending_refresh.clone();
            move || {
                let observer = observer.clone();
                let pending_targets = pending_targets.clone();
                let refresh = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    // Recompute trigger positions for elements not yet revealed.
                    for element in pending_targets.borrow().iter() {
                        observer.unobserve(element);
                        observer.observe(element);
                    }
                });
                // Replacing the pending timeout cancels the previous one.
                *pending_refresh.borrow_mut() = Some(refresh);
            }
        });
        let _ = window
            .add_event_listener_with_callback("resize", resize_listener.as_ref().unchecked_ref());

        Some(Self {
            observer,
            _observer_callback: observer_callback,
            resize_listener,
            pending_refresh,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(listener) = self.shared.load_listener.borrow_mut().take() {
            let _ = window
                .remove_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
        }
        if let Some(active) = self.shared.active.borrow_mut().take() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                active.resize_listener.as_ref().unchecked_ref(),
            );
            // Dropping a pending Timeout cancels it.
            active.pending_refresh.borrow_mut().take();
            active.observer.disconnect();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn construction_does_no_dom_work() {
        let reveal = ScrollReveal::new();
        assert!(reveal.shared.active.borrow().is_none());
        assert!(reveal.shared.load_listener.borrow().is_none());
    }
}
