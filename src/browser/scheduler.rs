use std::time::Duration;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::scheduler::{Scheduler, Task};

/// `setTimeout` / `requestAnimationFrame` timers
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        {
            tracing::warn!(error = ?e, "setTimeout failed");
        }
    }

    fn next_frame(&self, task: Task) {
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            tracing::warn!(error = ?e, "requestAnimationFrame failed");
        }
    }
}
