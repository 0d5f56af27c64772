//! The whole page: mounts every controller and routes page events to them.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::controllers::{
    reveal_hero, ActiveSectionController, ContactFormController, LightboxController,
    NavigationController, RevealController, Submitter, TabController,
};
use crate::dom::{Dom, DomResult};
use crate::keyboard::{self, Key, KeyRoute};
use crate::scheduler::Scheduler;
use crate::viewport::Viewport;

/// Events the host forwards from the browser
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    Load,
    Scroll,
    Click { target: N },
    KeyDown { key: Key, target: N },
    Submit,
}

/// How the host should treat the event afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Handled,
    /// Handled, and the browser default action must be cancelled.
    PreventDefault,
}

pub struct Site<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    navigation: Option<NavigationController<D>>,
    reveal: Option<RevealController<D>>,
    tabs: TabController<D>,
    lightbox: Option<LightboxController<D>>,
    contact_form: Option<ContactFormController<D>>,
    active_section: Option<ActiveSectionController<D>>,
}

impl<D: Dom + 'static> Site<D> {
    /// Mount every controller the page has markup for.
    ///
    /// A controller whose elements are missing is skipped; the others still
    /// mount.
    pub fn mount(
        dom: Rc<D>,
        viewport: &dyn Viewport<D::Node>,
        scheduler: Rc<dyn Scheduler>,
        submitter: Rc<dyn Submitter>,
        config: &SiteConfig,
    ) -> Self {
        let navigation = mounted(
            "navigation",
            NavigationController::mount(dom.clone(), &config.nav),
        );
        let reveal = mounted(
            "reveal",
            RevealController::mount(dom.clone(), viewport, &config.reveal),
        );
        let tabs = TabController::mount(dom.clone());
        let lightbox = mounted("lightbox", LightboxController::mount(dom.clone()));
        let contact_form = mounted(
            "contact form",
            ContactFormController::mount(dom.clone(), scheduler.clone(), submitter, &config.form),
        );
        let active_section = mounted(
            "active section",
            ActiveSectionController::mount(dom.clone(), viewport, &config.sections),
        );

        let site = Self {
            dom,
            scheduler,
            navigation,
            reveal,
            tabs,
            lightbox,
            contact_form,
            active_section,
        };
        tracing::info!(
            navigation = site.navigation.is_some(),
            reveal = site.reveal.is_some(),
            lightbox = site.lightbox.is_some(),
            contact_form = site.contact_form.is_some(),
            active_section = site.active_section.is_some(),
            "Site mounted"
        );
        site
    }

    pub fn dispatch(&mut self, event: PageEvent<D::Node>) -> Outcome {
        match event {
            PageEvent::Load => {
                if reveal_hero(&self.dom, self.scheduler.as_ref()) {
                    Outcome::Handled
                } else {
                    Outcome::Ignored
                }
            }
            PageEvent::Scroll => match &self.navigation {
                Some(navigation) => {
                    navigation.on_scroll();
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
            PageEvent::Click { target } => self.on_click(&target),
            PageEvent::KeyDown { key, target } => self.on_key(key, &target),
            PageEvent::Submit => match &self.contact_form {
                Some(form) => {
                    form.submit();
                    Outcome::PreventDefault
                }
                None => Outcome::Ignored,
            },
        }
    }
}

impl<D: Dom> Site<D> {
    pub fn navigation(&self) -> Option<&NavigationController<D>> {
        self.navigation.as_ref()
    }

    pub fn reveal(&self) -> Option<&RevealController<D>> {
        self.reveal.as_ref()
    }

    pub fn tabs(&self) -> &TabController<D> {
        &self.tabs
    }

    pub fn lightbox(&self) -> Option<&LightboxController<D>> {
        self.lightbox.as_ref()
    }

    pub fn contact_form(&self) -> Option<&ContactFormController<D>> {
        self.contact_form.as_ref()
    }

    pub fn active_section(&self) -> Option<&ActiveSectionController<D>> {
        self.active_section.as_ref()
    }

    /// Walk up from the clicked element until a controller claims a node.
    fn on_click(&mut self, target: &D::Node) -> Outcome {
        let mut current = Some(target.clone());
        while let Some(node) = current {
            if self.claim_click(&node, target) {
                return Outcome::Handled;
            }
            current = self.dom.parent(&node);
        }
        Outcome::Ignored
    }

    fn claim_click(&mut self, node: &D::Node, target: &D::Node) -> bool {
        if let Some(lightbox) = &mut self.lightbox {
            if lightbox.handle_click(node, target) {
                self.keep_menu_scroll_lock();
                return true;
            }
        }
        if let Some(navigation) = &mut self.navigation {
            if navigation.handle_click(node) {
                return true;
            }
        }
        if self.tabs.tab_for(node).is_some() {
            let panel = self.tabs.select_button(node);
            if let (Some(panel), Some(reveal)) = (panel, &self.reveal) {
                reveal.retrigger(&panel);
            }
            return true;
        }
        false
    }

    fn on_key(&mut self, key: Key, target: &D::Node) -> Outcome {
        let lightbox_open = self.lightbox.as_ref().is_some_and(|l| l.is_open());
        let menu_open = self.navigation.as_ref().is_some_and(|n| n.is_open());
        let gallery_index = self.lightbox.as_ref().and_then(|l| l.item_index(target));

        let route = keyboard::route(key, lightbox_open, menu_open, gallery_index);
        tracing::trace!(?key, ?route, "Key routed");
        match route {
            KeyRoute::CloseLightbox => self.with_lightbox(LightboxController::close),
            KeyRoute::PrevImage => self.with_lightbox(LightboxController::prev),
            KeyRoute::NextImage => self.with_lightbox(LightboxController::next),
            KeyRoute::OpenLightbox(index) => {
                self.with_lightbox(|lightbox| lightbox.open(index));
                Outcome::PreventDefault
            }
            KeyRoute::CloseMenu => {
                if let Some(navigation) = &mut self.navigation {
                    navigation.close_menu();
                }
                Outcome::Handled
            }
            KeyRoute::Consumed => Outcome::Handled,
            KeyRoute::Ignore => Outcome::Ignored,
        }
    }

    fn with_lightbox(&mut self, action: impl FnOnce(&mut LightboxController<D>)) -> Outcome {
        match &mut self.lightbox {
            Some(lightbox) => {
                action(lightbox);
                self.keep_menu_scroll_lock();
                Outcome::Handled
            }
            None => Outcome::Ignored,
        }
    }

    /// Closing the lightbox releases the scroll lock even when the menu
    /// underneath still holds it.
    fn keep_menu_scroll_lock(&self) {
        let lightbox_open = self.lightbox.as_ref().is_some_and(|l| l.is_open());
        let menu_open = self.navigation.as_ref().is_some_and(|n| n.is_open());
        if menu_open && !lightbox_open {
            self.dom.lock_scroll();
        }
    }
}

fn mounted<T>(name: &str, result: DomResult<T>) -> Option<T> {
    match result {
        Ok(controller) => Some(controller),
        Err(e) => {
            tracing::warn!(controller = name, error = %e, "Controller not mounted");
            None
        }
    }
}
