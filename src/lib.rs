//! Portfolio projects gallery: two stacked image layers with pointer-driven
//! parallax, a toggler that swaps the interactive layer, hover captions and a
//! fade-out page transition on click.
//!
//! Layer roles, parallax math, styles, configuration and navigation timing
//! are plain Rust and build on any target; the DOM wiring is wasm32-only.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod input;
pub mod navigation;
pub mod parallax;
pub mod scene;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::ROOT_ELEMENT_ID;
    use crate::dom;
    use crate::view::GalleryView;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    thread_local! {
        // Gallery auto-mounted by `start`; kept alive for the page's lifetime.
        static AUTO_MOUNTED: RefCell<Option<GalleryView>> = const { RefCell::new(None) };
    }

    fn to_js(e: anyhow::Error) -> JsValue {
        js_sys::Error::new(&format!("{:#}", e)).into()
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("projects-gallery starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let Some(container) = document.get_element_by_id(ROOT_ELEMENT_ID) else {
            log::info!("no #{} on this page; waiting for GalleryHandle::mount", ROOT_ELEMENT_ID);
            return Ok(());
        };
        let view = GalleryView::mount_from_page(&container)?;
        AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(view));
        Ok(())
    }

    /// Handle for pages that mount the gallery themselves.
    #[wasm_bindgen]
    pub struct GalleryHandle {
        view: Option<GalleryView>,
    }

    #[wasm_bindgen]
    impl GalleryHandle {
        pub fn mount(container_id: &str) -> Result<GalleryHandle, JsValue> {
            let document =
                dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
            let container = document
                .get_element_by_id(container_id)
                .ok_or_else(|| JsValue::from_str(&format!("missing #{}", container_id)))?;
            let view = GalleryView::mount_from_page(&container).map_err(to_js)?;
            Ok(GalleryHandle { view: Some(view) })
        }

        pub fn toggle(&self) {
            if let Some(view) = &self.view {
                view.toggle();
            }
        }

        #[wasm_bindgen(getter, js_name = projectsForeground)]
        pub fn projects_foreground(&self) -> bool {
            self.view
                .as_ref()
                .map(GalleryView::projects_foreground)
                .unwrap_or(false)
        }

        /// Remove the gallery, release its listeners and cancel any pending
        /// navigation.
        pub fn unmount(&mut self) {
            self.view = None;
        }
    }
}
