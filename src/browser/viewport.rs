use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::js_error;
use crate::dom::DomResult;
use crate::viewport::{Viewport, ViewportWatcher, WatchCallback, WatchOptions};

/// Viewport backed by `IntersectionObserver`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewport;

struct ObserverWatcher {
    observer: IntersectionObserver,
}

impl ViewportWatcher<Element> for ObserverWatcher {
    fn watch(&self, node: &Element) {
        self.observer.observe(node);
    }

    fn unwatch(&self, node: &Element) {
        self.observer.unobserve(node);
    }
}

impl Drop for ObserverWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Viewport<Element> for BrowserViewport {
    fn watcher(
        &self,
        options: WatchOptions,
        callback: WatchCallback<Element>,
    ) -> DomResult<Box<dyn ViewportWatcher<Element>>> {
        let threshold = options.threshold;
        let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let visible: Vec<Element> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting() && entry.intersection_ratio() >= threshold)
                .map(|entry| entry.target())
                .collect();
            if !visible.is_empty() {
                callback(&visible);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&format!("0px 0px -{}px 0px", options.bottom_margin));
        let observer =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
                .map_err(|e| js_error("IntersectionObserver", e))?;
        // The observer calls back for the rest of the page's life.
        on_entries.forget();

        Ok(Box::new(ObserverWatcher { observer }))
    }
}
