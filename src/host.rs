use crate::navigation::{PageHost, Scheduler};
use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::time::Duration;
use web_sys as web;

/// Page host backed by the gallery's own root element and `window.location`.
pub struct DocumentPage {
    root: web::HtmlElement,
    opacity: Cell<f64>,
}

impl DocumentPage {
    pub fn new(root: web::HtmlElement, opacity: f64) -> Self {
        Self {
            root,
            opacity: Cell::new(opacity),
        }
    }
}

impl PageHost for DocumentPage {
    fn page_opacity(&self) -> f64 {
        self.opacity.get()
    }

    fn set_page_opacity(&self, opacity: f64) {
        self.opacity.set(opacity);
        _ = self
            .root
            .style()
            .set_property("opacity", &format!("{}", opacity));
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("[nav] location change to {} failed: {:?}", path, e);
        }
    }
}

/// Browser timer; the returned `Timeout` cancels on drop.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}
