//! Client-side behaviour of the Irani Cafe landing page.
//!
//! The page markup is static; this crate adds the mobile menu, scroll reveal,
//! menu tabs, gallery lightbox, contact form and section highlighting on top
//! of it. Controllers are generic over [`dom::Dom`] so the same logic runs in
//! the browser (`wasm32`, see `browser`) and against [`dom::MemoryDom`].

pub mod config;
pub mod controllers;
pub mod dom;
pub mod keyboard;
pub mod logging;
pub mod markup;
pub mod scheduler;
pub mod site;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
mod test_support;

pub use config::SiteConfig;
pub use site::{Outcome, PageEvent, Site};
