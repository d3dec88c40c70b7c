//! Auto-rotating hero image carousel controller.

use shared::CarouselState;
use std::cell::RefCell;
use std::rc::Rc;
use zoon::*;

/// Time each image is shown before advancing.
pub const DEFAULT_INTERVAL_MS: u32 = 4_000;

/// Cycles the visible hero image on a repeating timer. The timer is owned by
/// the controller, so dropping the page view cancels it on every exit path —
/// a torn-down view can never keep mutating carousel state.
#[derive(Clone)]
pub struct Carousel {
    images: Rc<Vec<String>>,
    state: Mutable<CarouselState>,
    timer: Rc<RefCell<Option<Timer>>>,
}

impl Carousel {
    /// An empty image list is substituted with a single fallback image so the
    /// `len >= 1` invariant always holds.
    pub fn new(images: Vec<String>, interval_ms: u32) -> Self {
        let images = if images.is_empty() {
            vec![shared::content::FALLBACK_HERO_IMAGE.to_owned()]
        } else {
            images
        };
        let carousel = Self {
            state: Mutable::new(CarouselState::new(images.len())),
            images: Rc::new(images),
            timer: Rc::new(RefCell::new(None)),
        };
        carousel.start(interval_ms);
        carousel
    }

    /// (Re)start the advance timer. Intervals are clamped to at least 1 ms.
    pub fn start(&self, interval_ms: u32) {
        let state = self.state.clone();
        *self.timer.borrow_mut() = Some(Timer::new(interval_ms.max(1), move || {
            state.lock_mut().advance();
        }));
    }

    /// Cancel the advance timer; the current image stays visible.
    pub fn stop(&self) {
        self.timer.borrow_mut().take();
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index_signal(&self) -> impl Signal<Item = usize> + use<> {
        self.state.signal().map(|state| state.index()).dedupe()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn empty_image_list_gets_fallback() {
        let carousel = Carousel::new(Vec::new(), DEFAULT_INTERVAL_MS);
        assert_eq!(carousel.images().len(), 1);
        assert_eq!(carousel.images()[0], shared::content::FALLBACK_HERO_IMAGE);
    }

    #[test]
    fn stop_releases_the_timer() {
        let carousel = Carousel::new(shared::content::hero_images(), DEFAULT_INTERVAL_MS);
        carousel.stop();
        assert!(carousel.timer.borrow().is_none());
    }
}
