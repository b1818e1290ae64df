use crate::config::{self, GalleryConfig};
use crate::constants::CONFIG_ELEMENT_ID;
use crate::dom;
use crate::events::{self, Wiring};
use crate::host::{DocumentPage, TimeoutScheduler};
use crate::navigation::Navigator;
use crate::render;
use crate::scene::GalleryScene;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted gallery. Subscriptions, the pending navigation and the DOM
/// subtree all live exactly as long as this value.
pub struct GalleryView {
    wiring: Wiring,
    listeners: Vec<EventListener>,
}

impl GalleryView {
    /// Mount using the page's embedded config (or the built-in catalog).
    pub fn mount_from_page(container: &web::Element) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let json = dom::embedded_text(&document, CONFIG_ELEMENT_ID);
        Self::mount(container, config::load_or_default(json.as_deref()), 1.0)
    }

    pub fn mount(
        container: &web::Element,
        config: GalleryConfig,
        page_opacity: f64,
    ) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (projects, doodles) = (config.projects.len(), config.doodles.len());

        let scene = GalleryScene::new(config);
        let rendered = render::build(&document, container, &scene, page_opacity)?;
        let host = Rc::new(DocumentPage::new(rendered.root.clone(), page_opacity));

        let wiring = Wiring {
            scene: Rc::new(RefCell::new(scene)),
            rendered: Rc::new(rendered),
            navigator: Rc::new(RefCell::new(Navigator::new(host, TimeoutScheduler))),
        };
        let listeners = events::subscribe(&document, &wiring);
        log::info!(
            "[gallery] mounted projects={} doodles={} listeners={}",
            projects,
            doodles,
            listeners.len()
        );
        Ok(Self { wiring, listeners })
    }

    pub fn toggle(&self) {
        events::activate_toggle(&self.wiring);
    }

    pub fn projects_foreground(&self) -> bool {
        self.wiring.scene.borrow().projects_foreground()
    }
}

impl Drop for GalleryView {
    fn drop(&mut self) {
        self.listeners.clear();
        self.wiring.navigator.borrow_mut().cancel();
        self.wiring.rendered.remove();
        log::info!("[gallery] unmounted");
    }
}
