//! Page composition root.
//!
//! `LandingApp` owns every piece of interactive state — the two accordions,
//! the carousel, the mobile menu, the viewport watcher and both browser-API
//! bridges. Nothing here is global: the whole bundle is moved into the root
//! element's `after_remove`, so removing the page view releases every timer,
//! observer and event listener with it.

use crate::carousel::{Carousel, DEFAULT_INTERVAL_MS};
use crate::disclosure::DisclosureList;
use crate::nav_menu::NavMenu;
use crate::perf_monitor::PerformanceMonitor;
use crate::scroll_reveal::ScrollReveal;
use crate::viewport::ViewportWatcher;
use crate::{faq, header, hero, schedule, sections};
use zoon::*;

pub struct LandingApp {
    nav_menu: NavMenu,
    hero_carousel: Carousel,
    schedule_list: DisclosureList,
    faq_list: DisclosureList,
    viewport: ViewportWatcher,
    scroll_reveal: ScrollReveal,
    _perf_monitor: PerformanceMonitor,
}

impl LandingApp {
    pub fn new() -> Self {
        Self {
            nav_menu: NavMenu::new(),
            hero_carousel: Carousel::new(shared::content::hero_images(), DEFAULT_INTERVAL_MS),
            schedule_list: DisclosureList::new(shared::content::tour_schedule().len()),
            faq_list: DisclosureList::new(shared::content::faq_entries().len()),
            viewport: ViewportWatcher::new(),
            scroll_reveal: ScrollReveal::new(),
            _perf_monitor: PerformanceMonitor::attach(),
        }
    }

    pub fn root(self) -> impl Element {
        let content = self.content();
        let page_header = header::header(self.nav_menu.clone(), &self.viewport);
        let activate_reveal = self.scroll_reveal.activation();
        Stack::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Font::new().family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .update_raw_el(|raw_el| raw_el.style("background", crate::theme::DARK_GRADIENT))
            .layer(content)
            .layer(page_header)
            // The reveal bridge queries `[data-reveal]`, so it must not start
            // before the sections are in the document.
            .after_insert(move |_| activate_reveal())
            .after_remove(move |_| drop(self))
    }

    fn content(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Scrollbars::both())
            .update_raw_el(|raw_el| raw_el.style("scroll-behavior", "smooth"))
            .child(
                Column::new()
                    .s(Width::fill())
                    .item(El::new().s(Height::exact(header::HEADER_HEIGHT)))
                    .item(hero::hero(&self.hero_carousel))
                    .item(sections::about_section())
                    .item(schedule::trip_dates_section(&self.schedule_list))
                    .item(sections::included_section())
                    .item(sections::pricing_section())
                    .item(faq::faq_section(&self.faq_list))
                    .item(sections::contact_section())
                    .item(sections::footer()),
            )
    }
}
