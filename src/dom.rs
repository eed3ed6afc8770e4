use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;
use zerog_core::{FloatingObjectPayload, HostRect};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> anyhow::Result<web::Document> {
    window_document().ok_or_else(|| anyhow!("no document"))
}

/// Create an element of `tag`, cast to `HtmlElement`.
pub fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Set several style properties, ignoring rejected values.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// A full-viewport fixed layer that never takes input.
pub fn fixed_layer(
    document: &web::Document,
    id: &str,
    z_index: i32,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, "div")?;
    el.set_id(id);
    let z = z_index.to_string();
    set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("inset", "0"),
            ("pointer-events", "none"),
            ("z-index", &z),
        ],
    );
    Ok(el)
}

pub fn append_to_body(document: &web::Document, el: &web::Element) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(el)
        .map_err(|e| anyhow!("append to body: {:?}", e))?;
    Ok(())
}

/// Host section rectangle in viewport coordinates, if it is in the document.
pub fn host_rect(document: &web::Document, host_id: &str) -> Option<HostRect> {
    let el = document.get_element_by_id(host_id)?;
    let r = el.get_bounding_client_rect();
    Some(HostRect::from_edges(
        r.left() as f32,
        r.top() as f32,
        r.right() as f32,
        r.bottom() as f32,
    ))
}

#[inline]
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(w.inner_width()), dim(w.inner_height()))
}

fn text_node(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, tag)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

fn image(document: &web::Document, src: &str, alt: &str) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, "img")?;
    _ = el.set_attribute("src", src);
    _ = el.set_attribute("alt", alt);
    _ = el.set_attribute("draggable", "false");
    Ok(el)
}

/// Fill a card element with the markup for its payload.
pub fn fill_card(
    document: &web::Document,
    card: &web::HtmlElement,
    payload: &FloatingObjectPayload,
) -> anyhow::Result<()> {
    let mut children: Vec<web::HtmlElement> = Vec::new();
    match payload {
        FloatingObjectPayload::Project {
            title,
            description,
            image: src,
        } => {
            children.push(image(document, src, title)?);
            children.push(text_node(document, "h3", "zerog-card__title", title)?);
            children.push(text_node(document, "p", "zerog-card__body", description)?);
        }
        FloatingObjectPayload::TechIcon { label, image: src } => {
            children.push(image(document, src, label)?);
            children.push(text_node(document, "span", "zerog-card__label", label)?);
        }
        FloatingObjectPayload::Image { src, caption } => {
            children.push(image(document, src, caption.as_deref().unwrap_or(""))?);
            if let Some(c) = caption {
                children.push(text_node(document, "span", "zerog-card__caption", c)?);
            }
        }
        FloatingObjectPayload::AudioPlayer {
            track_id,
            title,
            artist,
            cover,
        } => {
            _ = card.set_attribute("data-track", track_id);
            if let Some(src) = cover {
                children.push(image(document, src, title)?);
            }
            children.push(text_node(document, "h3", "zerog-card__title", title)?);
            children.push(text_node(document, "span", "zerog-card__artist", artist)?);
        }
        FloatingObjectPayload::Video { src, poster } => {
            let video = create(document, "video")?;
            _ = video.set_attribute("src", src);
            if let Some(p) = poster {
                _ = video.set_attribute("poster", p);
            }
            for flag in ["muted", "loop", "playsinline", "controls"] {
                _ = video.set_attribute(flag, "");
            }
            children.push(video);
        }
    }
    for child in &children {
        card.append_child(child)
            .map_err(|e| anyhow!("append card child: {:?}", e))?;
    }
    Ok(())
}
