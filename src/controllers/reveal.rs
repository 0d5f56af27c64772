use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::RevealConfig;
use crate::dom::{Dom, DomResult};
use crate::markup::{REVEAL_CLASS, VISIBLE_CLASS};
use crate::viewport::{Viewport, ViewportWatcher, WatchOptions};

/// Scroll-triggered, one-way reveal of `.reveal` elements.
///
/// Cheap to clone; clones share one watcher.
pub struct RevealController<D: Dom> {
    inner: Rc<RevealInner<D>>,
}

impl<D: Dom> Clone for RevealController<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct RevealInner<D: Dom> {
    dom: Rc<D>,
    watcher: Box<dyn ViewportWatcher<D::Node>>,
    stagger_step: Duration,
}

impl<D: Dom + 'static> RevealController<D> {
    /// Start watching every `.reveal` element that is not visible yet.
    pub fn mount(
        dom: Rc<D>,
        viewport: &dyn Viewport<D::Node>,
        config: &RevealConfig,
    ) -> DomResult<Self> {
        let options = WatchOptions::threshold(config.threshold)
            .with_bottom_margin(config.bottom_margin);
        let stagger_step = config.stagger_step();

        let mut failure = None;
        let inner = Rc::new_cyclic(|weak: &Weak<RevealInner<D>>| {
            let weak = weak.clone();
            let callback = Rc::new(move |nodes: &[D::Node]| {
                if let Some(inner) = weak.upgrade() {
                    inner.reveal(nodes);
                }
            });
            let watcher: Box<dyn ViewportWatcher<D::Node>> =
                match viewport.watcher(options, callback) {
                    Ok(watcher) => watcher,
                    Err(e) => {
                        failure = Some(e);
                        Box::new(NoopWatcher)
                    }
                };
            RevealInner {
                dom,
                watcher,
                stagger_step,
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }

        let targets = inner.dom.query_class(&inner.dom.body(), REVEAL_CLASS);
        let mut watched = 0;
        for node in targets
            .iter()
            .filter(|node| !inner.dom.has_class(node, VISIBLE_CLASS))
        {
            inner.watcher.watch(node);
            watched += 1;
        }
        tracing::debug!(watched, "Reveal mounted");
        Ok(Self { inner })
    }
}

impl<D: Dom> RevealController<D> {
    /// Reveal a batch of elements that entered the viewport together.
    pub fn reveal(&self, nodes: &[D::Node]) {
        self.inner.reveal(nodes);
    }

    /// Show every hidden `.reveal` element inside `container` at once.
    ///
    /// Used when a panel is shown without scrolling, so its content does not
    /// wait for a fresh intersection.
    pub fn retrigger(&self, container: &D::Node) {
        let inner = &self.inner;
        let mut shown = 0;
        for node in inner.dom.query_class(container, REVEAL_CLASS) {
            if !inner.dom.has_class(&node, VISIBLE_CLASS) {
                inner.dom.add_class(&node, VISIBLE_CLASS);
                shown += 1;
            }
            inner.watcher.unwatch(&node);
        }
        tracing::debug!(shown, "Reveal re-triggered");
    }

    pub fn is_visible(&self, node: &D::Node) -> bool {
        self.inner.dom.has_class(node, VISIBLE_CLASS)
    }
}

impl<D: Dom> RevealInner<D> {
    fn reveal(&self, nodes: &[D::Node]) {
        // Delays are computed against the state before this batch so that
        // siblings entering together fan out.
        let delays: Vec<(D::Node, Duration)> = nodes
            .iter()
            .filter(|node| !self.dom.has_class(node, VISIBLE_CLASS))
            .map(|node| (node.clone(), self.stagger_delay(node)))
            .collect();

        for (node, delay) in &delays {
            self.dom
                .set_style(node, "transition-delay", &format!("{}ms", delay.as_millis()));
            self.dom.add_class(node, VISIBLE_CLASS);
        }
        for node in nodes {
            self.watcher.unwatch(node);
        }
        if !delays.is_empty() {
            tracing::trace!(revealed = delays.len(), "Revealed elements");
        }
    }

    /// Position among the parent's hidden `.reveal` children times the step.
    fn stagger_delay(&self, node: &D::Node) -> Duration {
        let Some(parent) = self.dom.parent(node) else {
            return Duration::ZERO;
        };
        let position = self
            .dom
            .query_class(&parent, REVEAL_CLASS)
            .into_iter()
            .filter(|sibling| self.dom.parent(sibling).as_ref() == Some(&parent))
            .filter(|sibling| !self.dom.has_class(sibling, VISIBLE_CLASS))
            .position(|sibling| sibling == *node)
            .unwrap_or(0);
        self.stagger_step * position as u32
    }
}

struct NoopWatcher;

impl<N> ViewportWatcher<N> for NoopWatcher {
    fn watch(&self, _node: &N) {}
    fn unwatch(&self, _node: &N) {}
}
