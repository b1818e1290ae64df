//! Click-driven page transition: fade the page out, then change location once
//! the fade has had time to finish.

use crate::constants::{NAVIGATION_DELAY_MS, PAGE_OPACITY_HIDDEN};
use std::rc::Rc;
use std::time::Duration;

/// The page that hosts the gallery and performs the actual transition.
pub trait PageHost {
    fn page_opacity(&self) -> f64;
    fn set_page_opacity(&self, opacity: f64);
    fn navigate(&self, path: &str);
}

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not run yet.
pub trait Scheduler {
    type Handle;
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct Navigator<H: PageHost + 'static, S: Scheduler> {
    host: Rc<H>,
    scheduler: S,
    delay: Duration,
    pending: Option<(String, S::Handle)>,
}

impl<H: PageHost + 'static, S: Scheduler> Navigator<H, S> {
    pub fn new(host: Rc<H>, scheduler: S) -> Self {
        Self {
            host,
            scheduler,
            delay: Duration::from_millis(NAVIGATION_DELAY_MS as u64),
            pending: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Hide the page now and navigate to `path` after the delay. A newer
    /// request replaces (and cancels) an older one.
    pub fn request(&mut self, path: &str) {
        self.host.set_page_opacity(PAGE_OPACITY_HIDDEN);
        log::info!("[nav] leaving for {} in {:?}", path, self.delay);
        let host = Rc::clone(&self.host);
        let target = path.to_string();
        let handle = self
            .scheduler
            .schedule(self.delay, Box::new(move || host.navigate(&target)));
        self.pending = Some((path.to_string(), handle));
    }

    /// Path of the most recent request still held by this navigator.
    pub fn requested_path(&self) -> Option<&str> {
        self.pending.as_ref().map(|(path, _)| path.as_str())
    }

    /// Drop the pending request; returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some((path, _handle)) => {
                log::info!("[nav] cancelled navigation to {}", path);
                true
            }
            None => false,
        }
    }
}
