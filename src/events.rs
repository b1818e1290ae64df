use crate::constants::FADE_OUT_CLASS;
use crate::host::{DocumentPage, TimeoutScheduler};
use crate::input;
use crate::navigation::Navigator;
use crate::render::RenderedGallery;
use crate::scene::GalleryScene;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type GalleryNavigator = Navigator<DocumentPage, TimeoutScheduler>;

#[derive(Clone)]
pub struct Wiring {
    pub scene: Rc<RefCell<GalleryScene>>,
    pub rendered: Rc<RenderedGallery>,
    pub navigator: Rc<RefCell<GalleryNavigator>>,
}

const ACTIVE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

/// Toggler click and space bar both land here.
pub fn activate_toggle(w: &Wiring) {
    let mut scene = w.scene.borrow_mut();
    scene.toggle();
    log::debug!(
        "[toggle] foreground={:?} thumb={}",
        scene.foreground(),
        scene.thumb_position()
    );
    w.rendered.apply(&scene);
}

/// Every subscription the view holds; dropping the returned listeners
/// unsubscribes all of them.
pub fn subscribe(document: &web::Document, w: &Wiring) -> Vec<EventListener> {
    let mut listeners = vec![
        wire_pointermove(document, w),
        wire_keydown(document, w),
        wire_toggler(w),
    ];
    for nodes in &w.rendered.elements {
        listeners.push(wire_hover(&nodes.wrapper, &nodes.key, w, true));
        listeners.push(wire_hover(&nodes.wrapper, &nodes.key, w, false));
        if let Some(caption) = &nodes.caption {
            listeners.push(wire_caption_end(caption, &nodes.key, w));
        }
        if w.scene.borrow().navigation_target(&nodes.key).is_some() {
            listeners.push(wire_click(&nodes.wrapper, &nodes.key, w));
        }
    }
    listeners
}

fn wire_pointermove(document: &web::Document, w: &Wiring) -> EventListener {
    let w = w.clone();
    EventListener::new(document, "mousemove", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = input::pointer_page_position(ev);
        let viewport = input::viewport_size();
        let mut scene = w.scene.borrow_mut();
        scene.pointer_moved(pointer, viewport);
        w.rendered.apply_transforms(&scene);
    })
}

fn wire_keydown(document: &web::Document, w: &Wiring) -> EventListener {
    let w = w.clone();
    EventListener::new_with_options(document, "keydown", ACTIVE, move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if input::is_toggle_key(&ev.key()) {
            ev.prevent_default();
            activate_toggle(&w);
        }
    })
}

fn wire_toggler(w: &Wiring) -> EventListener {
    let target = w.rendered.toggler.clone();
    let w = w.clone();
    EventListener::new(&target, "click", move |_event: &web::Event| {
        activate_toggle(&w);
    })
}

fn wire_hover(target: &web::HtmlElement, key: &str, w: &Wiring, enter: bool) -> EventListener {
    let w = w.clone();
    let key = key.to_string();
    let event_type = if enter { "mouseenter" } else { "mouseleave" };
    EventListener::new(target, event_type, move |_event: &web::Event| {
        let mut scene = w.scene.borrow_mut();
        let changed = if enter {
            scene.hover_enter(&key)
        } else {
            scene.hover_leave(&key)
        };
        if changed {
            w.rendered.apply(&scene);
        }
    })
}

fn wire_caption_end(target: &web::HtmlElement, key: &str, w: &Wiring) -> EventListener {
    let w = w.clone();
    let key = key.to_string();
    EventListener::new(target, "animationend", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::AnimationEvent>() else {
            return;
        };
        if ev.animation_name() != FADE_OUT_CLASS {
            return;
        }
        let mut scene = w.scene.borrow_mut();
        if scene.caption_animation_ended(&key) {
            w.rendered.apply(&scene);
        }
    })
}

fn wire_click(target: &web::HtmlElement, key: &str, w: &Wiring) -> EventListener {
    let w = w.clone();
    let key = key.to_string();
    EventListener::new(target, "click", move |_event: &web::Event| {
        let path = w.scene.borrow().navigation_target(&key).map(str::to_string);
        if let Some(path) = path {
            w.navigator.borrow_mut().request(&path);
        }
    })
}
