//! Passive performance telemetry.
//!
//! Observes largest-contentful-paint, first-input delay, cumulative layout
//! shift, navigation timing and slow resources, and warns on the console when
//! fixed budgets are exceeded. Every capability registration is allowed to
//! fail silently; observation never affects the rest of the page.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use zoon::*;

const PAGE_LOAD_BUDGET_MS: f64 = 3_000.0;
const LCP_BUDGET_MS: f64 = 2_500.0;
const FID_BUDGET_MS: f64 = 100.0;
const CLS_BUDGET: f64 = 0.1;
const SLOW_RESOURCE_MS: f64 = 1_000.0;

type ObserverCallback =
    Closure<dyn FnMut(web_sys::PerformanceObserverEntryList, web_sys::PerformanceObserver)>;

pub struct PerformanceMonitor {
    observers: Vec<web_sys::PerformanceObserver>,
    _callbacks: Vec<ObserverCallback>,
    load_listener: Option<Closure<dyn FnMut()>>,
}

fn warn(message: String) {
    web_sys::console::warn_1(&message.into());
}

fn entry_f64(entry: &web_sys::PerformanceEntry, key: &str) -> Option<f64> {
    js_sys::Reflect::get(entry.as_ref(), &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

fn entry_bool(entry: &web_sys::PerformanceEntry, key: &str) -> bool {
    js_sys::Reflect::get(entry.as_ref(), &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

impl PerformanceMonitor {
    pub fn attach() -> Self {
        let mut monitor = Self {
            observers: Vec::new(),
            _callbacks: Vec::new(),
            load_listener: None,
        };

        let lcp_ms = Rc::new(Cell::new(None::<f64>));
        let fid_ms = Rc::new(Cell::new(None::<f64>));
        let cls_total = Rc::new(Cell::new(0.0_f64));

        monitor.observe("largest-contentful-paint", {
            let lcp_ms = lcp_ms.clone();
            move |entries| {
                if let Some(last) = entries.last() {
                    lcp_ms.set(Some(last.start_time()));
                }
            }
        });

        monitor.observe("first-input", {
            let fid_ms = fid_ms.clone();
            move |entries| {
                for entry in &entries {
                    if let Some(processing_start) = entry_f64(entry, "processingStart") {
                        fid_ms.set(Some(processing_start - entry.start_time()));
                    }
                }
            }
        });

        monitor.observe("layout-shift", {
            let cls_total = cls_total.clone();
            move |entries| {
                for entry in &entries {
                    // Shifts right after user input are expected; skip them.
                    if entry_bool(entry, "hadRecentInput") {
                        continue;
                    }
                    if let Some(value) = entry_f64(entry, "value") {
                        cls_total.set(cls_total.get() + value);
                    }
                }
            }
        });

        monitor.observe("resource", |entries| {
            for entry in &entries {
                if entry.duration() > SLOW_RESOURCE_MS {
                    warn(format!(
                        "slow resource: {} ({:.0}ms)",
                        entry.name(),
                        entry.duration()
                    ));
                }
            }
        });

        monitor.install_load_report(lcp_ms, fid_ms, cls_total);
        monitor
    }

    /// Register one observer; an unsupported entry type degrades to a no-op.
    fn observe(
        &mut self,
        entry_type: &str,
        mut handle: impl FnMut(Vec<web_sys::PerformanceEntry>) + 'static,
    ) {
        let callback: ObserverCallback = Closure::new(
            move |list: web_sys::PerformanceObserverEntryList,
                  _observer: web_sys::PerformanceObserver| {
                let entries = list
                    .get_entries()
                    .iter()
                    .map(|entry| entry.unchecked_into::<web_sys::PerformanceEntry>())
                    .collect();
                handle(entries);
            },
        );
        let Ok(observer) = web_sys::PerformanceObserver::new(callback.as_ref().unchecked_ref())
        else {
            return;
        };
        let options = web_sys::PerformanceObserverInit::new();
        options.set_entry_types(&js_sys::Array::of1(&entry_type.into()));
        observer.observe(&options);
        self.observers.push(observer);
        self._callbacks.push(callback);
    }

    fn install_load_report(
        &mut self,
        lcp_ms: Rc<Cell<Option<f64>>>,
        fid_ms: Rc<Cell<Option<f64>>>,
        cls_total: Rc<Cell<f64>>,
    ) {
        let listener: Closure<dyn FnMut()> = Closure::new(move || {
            let Some(performance) = web_sys::window().and_then(|window| window.performance())
            else {
                return;
            };
            let navigation = performance
                .get_entries_by_type("navigation")
                .get(0)
                .dyn_into::<web_sys::PerformanceNavigationTiming>();
            if let Ok(navigation) = navigation {
                let load_ms = navigation.load_event_end() - navigation.load_event_start();
                let dom_ms = navigation.dom_content_loaded_event_end()
                    - navigation.dom_content_loaded_event_start();
                zoon::println!("page load: {load_ms:.0}ms, dom content loaded: {dom_ms:.0}ms");
                if load_ms > PAGE_LOAD_BUDGET_MS {
                    warn(format!("page load time exceeded 3s: {load_ms:.0}ms"));
                }
            }
            if let Some(lcp) = lcp_ms.get() {
                if lcp > LCP_BUDGET_MS {
                    warn(format!("LCP exceeds 2.5s: {lcp:.0}ms"));
                }
            }
            if let Some(fid) = fid_ms.get() {
                if fid > FID_BUDGET_MS {
                    warn(format!("FID exceeds 100ms: {fid:.0}ms"));
                }
            }
            if cls_total.get() > CLS_BUDGET {
                warn(format!("CLS exceeds 0.1: {:.3}", cls_total.get()));
            }
        });
        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
        }
        self.load_listener = Some(listener);
    }
}

impl Drop for PerformanceMonitor {
    fn drop(&mut self) {
        for observer in &self.observers {
            observer.disconnect();
        }
        if let Some(listener) = self.load_listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
            }
        }
    }
}
