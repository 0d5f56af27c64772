use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::SectionConfig;
use crate::dom::{Dom, DomResult};
use crate::markup::NAV_LINKS_ID;
use crate::viewport::{Viewport, ViewportWatcher, WatchOptions};

/// Highlights the nav link of the section currently filling the viewport.
pub struct ActiveSectionController<D: Dom> {
    inner: Rc<SectionInner<D>>,
}

struct SectionInner<D: Dom> {
    dom: Rc<D>,
    /// In-page anchors with their `href`
    anchors: Vec<(D::Node, String)>,
    active_weight: String,
    idle_weight: String,
    current: RefCell<Option<String>>,
    // Kept alive for as long as the controller is.
    _watcher: RefCell<Option<Box<dyn ViewportWatcher<D::Node>>>>,
}

impl<D: Dom + 'static> ActiveSectionController<D> {
    /// Watch every `section[id]` of the page.
    pub fn mount(
        dom: Rc<D>,
        viewport: &dyn Viewport<D::Node>,
        config: &SectionConfig,
    ) -> DomResult<Self> {
        let links = dom.element_by_id_or_err(NAV_LINKS_ID)?;
        let anchors = dom
            .query_tag(&links, "a")
            .into_iter()
            .filter_map(|anchor| {
                let href = dom.attribute(&anchor, "href")?;
                href.starts_with('#').then_some((anchor, href))
            })
            .collect();
        let sections: Vec<D::Node> = dom
            .query_tag(&dom.body(), "section")
            .into_iter()
            .filter(|section| dom.id(section).is_some())
            .collect();

        let inner = Rc::new(SectionInner {
            dom,
            anchors,
            active_weight: config.active_weight.clone(),
            idle_weight: config.idle_weight.clone(),
            current: RefCell::new(None),
            _watcher: RefCell::new(None),
        });

        let weak: Weak<SectionInner<D>> = Rc::downgrade(&inner);
        let watcher = viewport.watcher(
            WatchOptions::threshold(config.threshold),
            Rc::new(move |nodes: &[D::Node]| {
                if let Some(inner) = weak.upgrade() {
                    for node in nodes {
                        inner.activate(node);
                    }
                }
            }),
        )?;
        for section in &sections {
            watcher.watch(section);
        }
        *inner._watcher.borrow_mut() = Some(watcher);

        tracing::debug!(
            sections = sections.len(),
            anchors = inner.anchors.len(),
            "Active section tracking mounted"
        );
        Ok(Self { inner })
    }
}

impl<D: Dom> ActiveSectionController<D> {
    /// Id of the section last seen filling the viewport.
    pub fn current(&self) -> Option<String> {
        self.inner.current.borrow().clone()
    }

    /// Make `section` the current one.
    pub fn activate(&self, section: &D::Node) {
        self.inner.activate(section);
    }
}

impl<D: Dom> SectionInner<D> {
    fn activate(&self, section: &D::Node) {
        let Some(id) = self.dom.id(section) else {
            return;
        };
        let target = format!("#{id}");
        for (anchor, href) in &self.anchors {
            let weight = if *href == target {
                &self.active_weight
            } else {
                &self.idle_weight
            };
            self.dom.set_style(anchor, "font-weight", weight);
        }
        tracing::trace!(section = %id, "Current section");
        *self.current.borrow_mut() = Some(id);
    }
}
