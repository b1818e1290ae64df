use crate::config::GalleryEntry;
use crate::constants::{
    ANIMATED_CLASS, CAPTION_CLASS, ELEMENT_ID_PREFIX, FADE_IN_CLASS, FADE_OUT_CLASS,
    PARALLAX_CHILD_CLASS, PARALLAX_ELEMENT_CLASS, SHAKE_CLASS,
};
use crate::dom;
use crate::scene::{GalleryScene, Layer};
use crate::style;
use web_sys as web;

pub struct ElementNodes {
    pub key: String,
    pub wrapper: web::HtmlElement,
    pub image: web::HtmlElement,
    pub caption: Option<web::HtmlElement>,
}

/// DOM owned by one mounted gallery. Nodes are created once; scene state is
/// written onto them by [`RenderedGallery::apply`].
pub struct RenderedGallery {
    pub root: web::HtmlElement,
    pub toggler: web::HtmlElement,
    pub thumb: web::HtmlElement,
    pub elements: Vec<ElementNodes>,
}

fn entry_for(scene: &GalleryScene, layer: Layer, index: usize) -> Option<&GalleryEntry> {
    let config = scene.config();
    match layer {
        Layer::Projects => config.projects.get(index),
        Layer::Doodles => config.doodles.get(index),
    }
}

fn build_caption(
    document: &web::Document,
    entry: &GalleryEntry,
) -> anyhow::Result<web::HtmlElement> {
    let caption = dom::create_html(document, "div")?;
    caption.set_class_name(&format!("{} {}", CAPTION_CLASS, ANIMATED_CLASS));
    dom::apply_style(&caption, &style::caption_style());

    let title = dom::create_html(document, "h6")?;
    title.set_text_content(entry.title.as_deref());
    let subtitle = dom::create_html(document, "p")?;
    subtitle.set_text_content(entry.subtitle.as_deref());
    dom::set_style(&subtitle, "font-size", "12px");
    dom::set_style(&subtitle, "color", "#999");

    dom::append(&caption, &title)?;
    dom::append(&caption, &subtitle)?;
    Ok(caption)
}

fn build_element(
    document: &web::Document,
    entry: &GalleryEntry,
    layer: Layer,
) -> anyhow::Result<ElementNodes> {
    let wrapper = dom::create_html(document, "div")?;
    wrapper.set_id(&format!("{}{}", ELEMENT_ID_PREFIX, entry.key));
    wrapper.set_class_name(&format!("{} relative", PARALLAX_ELEMENT_CLASS));
    _ = wrapper.set_attribute("data-key", &entry.key);

    let image = dom::create_html(document, "img")?;
    image.set_class_name(&format!("{} {}", PARALLAX_CHILD_CLASS, ANIMATED_CLASS));
    _ = image.set_attribute("src", &entry.image_source);
    _ = image.set_attribute("alt", entry.title.as_deref().unwrap_or(""));
    dom::append(&wrapper, &image)?;

    let caption = match layer {
        Layer::Projects => {
            let caption = build_caption(document, entry)?;
            dom::append(&wrapper, &caption)?;
            Some(caption)
        }
        Layer::Doodles => None,
    };

    Ok(ElementNodes {
        key: entry.key.clone(),
        wrapper,
        image,
        caption,
    })
}

pub fn build(
    document: &web::Document,
    container: &web::Element,
    scene: &GalleryScene,
    page_opacity: f64,
) -> anyhow::Result<RenderedGallery> {
    let root = dom::create_html(document, "div")?;
    root.set_class_name("flex flex-column full-vh relative");
    dom::apply_style(&root, &style::page_style(page_opacity));

    let toggler = dom::create_html(document, "button")?;
    toggler.set_class_name("toggler");
    _ = toggler.set_attribute("type", "button");
    _ = toggler.set_attribute("aria-label", "Swap projects and doodles");
    let thumb = dom::create_html(document, "span")?;
    thumb.set_class_name("toggler-thumb");
    dom::append(&toggler, &thumb)?;
    dom::append(&root, &toggler)?;

    let body = dom::create_html(document, "div")?;
    body.set_class_name("flex flex-column flex-grow relative");
    let projects_layer = dom::create_html(document, "div")?;
    projects_layer.set_class_name("flex flex-column flex-grow relative");
    let doodles_layer = dom::create_html(document, "div")?;
    doodles_layer.set_class_name("absolute flex flex-column flex-grow");
    dom::set_style(&doodles_layer, "height", "90%");
    dom::set_style(&doodles_layer, "width", "100%");
    dom::set_style(&doodles_layer, "top", "0");

    let mut elements = Vec::with_capacity(scene.elements().len());
    for visual in scene.elements() {
        let entry = entry_for(scene, visual.layer, visual.index)
            .ok_or_else(|| anyhow::anyhow!("no config entry for `{}`", visual.key))?;
        let nodes = build_element(document, entry, visual.layer)?;
        let parent = match visual.layer {
            Layer::Projects => &projects_layer,
            Layer::Doodles => &doodles_layer,
        };
        dom::append(parent, &nodes.wrapper)?;
        elements.push(nodes);
    }

    dom::append(&body, &projects_layer)?;
    dom::append(&body, &doodles_layer)?;
    dom::append(&root, &body)?;
    dom::append(container, &root)?;

    let rendered = RenderedGallery {
        root,
        toggler,
        thumb,
        elements,
    };
    rendered.apply(scene);
    Ok(rendered)
}

impl RenderedGallery {
    /// Write the full scene: role styles, markers, captions, transforms, thumb.
    pub fn apply(&self, scene: &GalleryScene) {
        for (nodes, visual) in self.elements.iter().zip(scene.elements()) {
            let role = scene.role_of(visual.layer);
            if let Some(entry) = entry_for(scene, visual.layer, visual.index) {
                dom::apply_style(
                    &nodes.wrapper,
                    &style::element_style(entry, visual.layer, visual.index, role),
                );
            }
            let toggled = if role.is_foreground() { "true" } else { "false" };
            _ = nodes.wrapper.set_attribute("data-toggled", toggled);
            _ = nodes.image.set_attribute("data-toggled", toggled);
            dom::apply_style(&nodes.image, &style::image_style(role));
            dom::set_class(&nodes.image, SHAKE_CLASS, visual.shaking);

            if let (Some(caption), Some(state)) = (&nodes.caption, visual.caption) {
                dom::set_style(caption, "display", state.display());
                if let Some(class) = state.animation_class() {
                    dom::set_class(caption, FADE_IN_CLASS, class == FADE_IN_CLASS);
                    dom::set_class(caption, FADE_OUT_CLASS, class == FADE_OUT_CLASS);
                }
            }
        }
        self.apply_transforms(scene);
        dom::apply_style(&self.thumb, &style::thumb_style(scene.thumb_position()));
    }

    /// Pointer-move fast path: only transforms change.
    pub fn apply_transforms(&self, scene: &GalleryScene) {
        for (nodes, visual) in self.elements.iter().zip(scene.elements()) {
            dom::set_style(&nodes.wrapper, "transform", &visual.transform.to_css());
        }
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}
