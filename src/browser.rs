//! Browser host: wires the site to the live document.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, KeyboardEvent};

use crate::config::{ConfigError, SiteConfig};
use crate::controllers::SimulatedSubmitter;
use crate::keyboard::Key;
use crate::logging;
use crate::markup::{CONTACT_FORM_ID, SITE_CONFIG_ID};
use crate::scheduler::Scheduler;
use crate::site::{Outcome, PageEvent, Site};

mod console;
mod dom;
mod scheduler;
mod viewport;

pub use console::{ConsoleLine, ConsoleWriter};
pub use dom::BrowserDom;
pub use scheduler::BrowserScheduler;
pub use viewport::BrowserViewport;

type SharedSite = Rc<RefCell<Site<BrowserDom>>>;

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = run() {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "Irani Cafe scripts failed to start: {e:#}"
        )));
    }
}

fn run() -> anyhow::Result<()> {
    let window = web_sys::window().context("No window")?;
    let document = window.document().context("No document")?;

    let (config, config_error) = read_config(&document);
    logging::init_tracing(config.log_level.as_deref());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring site config");
    }

    let dom = Rc::new(BrowserDom::new(window.clone(), document.clone())?);
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));
    let submitter = Rc::new(SimulatedSubmitter::new(
        scheduler.clone(),
        config.form.submit_delay(),
    ));
    let site: SharedSite = Rc::new(RefCell::new(Site::mount(
        dom,
        &BrowserViewport,
        scheduler,
        submitter,
        &config,
    )));

    listen(&site, &document, "click", false, |event| {
        event_element(event).map(|target| PageEvent::Click { target })
    })?;
    listen(&site, &document, "keydown", false, |event| {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        event_element(event).map(|target| PageEvent::KeyDown {
            key: Key::from_dom(&key),
            target,
        })
    })?;
    listen(&site, &window, "scroll", true, |_| Some(PageEvent::Scroll))?;
    match document.get_element_by_id(CONTACT_FORM_ID) {
        Some(form) => listen(&site, &form, "submit", false, |_| Some(PageEvent::Submit))?,
        None => tracing::debug!("No contact form, submit listener skipped"),
    }

    if document.ready_state() == "complete" {
        dispatch(&site, PageEvent::Load, None);
    } else {
        listen(&site, &window, "load", false, |_| Some(PageEvent::Load))?;
    }

    tracing::info!("Irani Cafe scripts started");
    Ok(())
}

/// Config from the optional inline `<script id="site-config">` JSON block.
fn read_config(document: &Document) -> (SiteConfig, Option<ConfigError>) {
    let Some(script) = document.get_element_by_id(SITE_CONFIG_ID) else {
        return (SiteConfig::default(), None);
    };
    let text = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn listen(
    site: &SharedSite,
    target: &EventTarget,
    kind: &'static str,
    passive: bool,
    translate: impl Fn(&Event) -> Option<PageEvent<Element>> + 'static,
) -> anyhow::Result<()> {
    let site = site.clone();
    let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        if let Some(page_event) = translate(&event) {
            dispatch(&site, page_event, Some(&event));
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("Failed to listen for {kind}: {e:?}"))?;
    // Listeners stay installed for the page's lifetime.
    callback.forget();
    Ok(())
}

fn dispatch(site: &SharedSite, page_event: PageEvent<Element>, event: Option<&Event>) {
    let Ok(mut site) = site.try_borrow_mut() else {
        tracing::warn!(?page_event, "Site busy, event dropped");
        return;
    };
    if site.dispatch(page_event) == Outcome::PreventDefault {
        if let Some(event) = event {
            event.prevent_default();
        }
    }
}
