//! Shared model, content and interaction logic for the Legends Road Rally
//! landing site.
//!
//! The frontend renders everything in this crate; keeping the content and the
//! pure interaction state machines here means they compile and test natively,
//! without a browser runtime.

pub mod content;
pub mod interaction;
pub mod model;

pub use interaction::{CarouselState, DisclosureState, MenuState};
pub use model::{DayItinerary, FaqEntry, IncludedItem, TourDate, TourLocation};
