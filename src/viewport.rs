//! Viewport intersection watching.
//!
//! A [`Viewport`] hands out watchers, each bound to one set of
//! [`WatchOptions`] and one callback, mirroring an IntersectionObserver. The
//! callback receives every watched element that became visible in one batch,
//! in the order the host reported them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dom::DomResult;

/// Called with the elements that started intersecting.
pub type WatchCallback<N> = Rc<dyn Fn(&[N])>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the element that must be visible, 0.0..=1.0.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport before testing.
    pub bottom_margin: f64,
}

impl WatchOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            bottom_margin: 0.0,
        }
    }

    pub fn with_bottom_margin(mut self, bottom_margin: f64) -> Self {
        self.bottom_margin = bottom_margin;
        self
    }
}

pub trait ViewportWatcher<N> {
    fn watch(&self, node: &N);
    /// Stop reporting `node`. Unknown nodes are ignored.
    fn unwatch(&self, node: &N);
}

pub trait Viewport<N> {
    fn watcher(
        &self,
        options: WatchOptions,
        callback: WatchCallback<N>,
    ) -> DomResult<Box<dyn ViewportWatcher<N>>>;
}

// ============================================================================
// Manual viewport (headless hosts and tests)
// ============================================================================

struct Registration<N> {
    options: WatchOptions,
    callback: WatchCallback<N>,
    watched: Vec<N>,
}

/// Viewport driven by hand: the host reports how much of each element is
/// visible and matching watchers fire synchronously.
pub struct ManualViewport<N> {
    registrations: Rc<RefCell<Vec<Registration<N>>>>,
}

impl<N> Default for ManualViewport<N> {
    fn default() -> Self {
        Self {
            registrations: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<N> fmt::Debug for ManualViewport<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualViewport")
            .field("watchers", &self.registrations.borrow().len())
            .finish()
    }
}

impl<N: Clone + PartialEq + 'static> ManualViewport<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report visible ratios for a batch of elements.
    ///
    /// Each watcher receives the elements it watches whose ratio meets its
    /// threshold. Callbacks run after the registry borrow is released, so
    /// they may unwatch freely.
    pub fn intersect(&self, entries: &[(N, f64)]) {
        let batches: Vec<(WatchCallback<N>, Vec<N>)> = self
            .registrations
            .borrow()
            .iter()
            .filter_map(|registration| {
                let hits: Vec<N> = entries
                    .iter()
                    .filter(|(node, ratio)| {
                        *ratio > 0.0
                            && *ratio >= registration.options.threshold
                            && registration.watched.contains(node)
                    })
                    .map(|(node, _)| node.clone())
                    .collect();
                (!hits.is_empty()).then(|| (registration.callback.clone(), hits))
            })
            .collect();

        for (callback, hits) in batches {
            callback(&hits);
        }
    }

    /// Report a batch of elements as fully visible.
    pub fn show(&self, nodes: &[N]) {
        let entries: Vec<(N, f64)> = nodes.iter().map(|node| (node.clone(), 1.0)).collect();
        self.intersect(&entries);
    }

    pub fn is_watched(&self, node: &N) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|registration| registration.watched.contains(node))
    }

    pub fn watched_count(&self) -> usize {
        self.registrations
            .borrow()
            .iter()
            .map(|registration| registration.watched.len())
            .sum()
    }

    pub fn options(&self) -> Vec<WatchOptions> {
        self.registrations
            .borrow()
            .iter()
            .map(|registration| registration.options)
            .collect()
    }
}

struct ManualWatcher<N> {
    index: usize,
    registrations: Rc<RefCell<Vec<Registration<N>>>>,
}

impl<N: PartialEq + Clone> ViewportWatcher<N> for ManualWatcher<N> {
    fn watch(&self, node: &N) {
        let mut registrations = self.registrations.borrow_mut();
        let watched = &mut registrations[self.index].watched;
        if !watched.contains(node) {
            watched.push(node.clone());
        }
    }

    fn unwatch(&self, node: &N) {
        self.registrations.borrow_mut()[self.index]
            .watched
            .retain(|watched| watched != node);
    }
}

impl<N: Clone + PartialEq + 'static> Viewport<N> for ManualViewport<N> {
    fn watcher(
        &self,
        options: WatchOptions,
        callback: WatchCallback<N>,
    ) -> DomResult<Box<dyn ViewportWatcher<N>>> {
        let mut registrations = self.registrations.borrow_mut();
        registrations.push(Registration {
            options,
            callback,
            watched: Vec::new(),
        });
        Ok(Box::new(ManualWatcher {
            index: registrations.len() - 1,
            registrations: self.registrations.clone(),
        }))
    }
}
