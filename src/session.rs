//! One activation of the space: the DOM it created, the listeners it
//! registered and the frame loop it runs. Dropping a `Session` undoes all of
//! it.

use crate::audio::AudioTap;
use crate::constants::*;
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, Clock, FrameContext, FrameLoop};
use crate::input::PointerTracker;
use crate::overlay::AudioOverlay;
use crate::style;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;
use zerog_core::{
    AnimationController, AudioReactiveOverlay, ObjectId, OverlayProjector, SpaceConfig,
};

pub struct Session {
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

fn build_surface(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let surface = dom::fixed_layer(document, SURFACE_ID, SURFACE_Z_INDEX)?;
    dom::set_styles(&surface, &[("opacity", "0"), ("overflow", "visible")]);
    let content = dom::create(document, "div")?;
    content.set_id(CONTENT_ID);
    let perspective = style::px(PERSPECTIVE_PX);
    dom::set_styles(
        &content,
        &[
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("perspective", &perspective),
            ("transform-style", "preserve-3d"),
            ("will-change", "transform"),
        ],
    );
    surface
        .append_child(&content)
        .map_err(|e| anyhow::anyhow!("append content: {:?}", e))?;
    Ok((surface, content))
}

fn build_caption(
    document: &web::Document,
    content: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let caption = dom::create(document, "div")?;
    caption.set_id(CAPTION_ID);
    caption.set_text_content(Some(CAPTION_TEXT));
    dom::set_styles(
        &caption,
        &[
            ("position", "absolute"),
            ("left", "0"),
            ("right", "0"),
            ("bottom", "8%"),
            ("text-align", "center"),
            ("opacity", "0"),
            ("pointer-events", "none"),
        ],
    );
    content
        .append_child(&caption)
        .map_err(|e| anyhow::anyhow!("append caption: {:?}", e))?;
    Ok(caption)
}

fn build_cards(
    document: &web::Document,
    content: &web::HtmlElement,
    config: &SpaceConfig,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut cards = Vec::with_capacity(config.objects.len());
    for spec in &config.objects {
        let card = dom::create(document, "div")?;
        let kind = spec.payload.kind().as_str();
        card.set_class_name(&format!("{} {}--{}", CARD_CLASS, CARD_CLASS, kind));
        let width = style::px(spec.placement.width_px);
        let z = spec.placement.z_index.to_string();
        dom::set_styles(
            &card,
            &[
                ("position", "absolute"),
                ("left", "0"),
                ("top", "0"),
                ("width", &width),
                ("z-index", &z),
                ("opacity", "0"),
                ("pointer-events", "auto"),
                ("touch-action", "none"),
                ("user-select", "none"),
                ("will-change", "transform, opacity"),
            ],
        );
        dom::fill_card(document, &card, &spec.payload)?;
        content
            .append_child(&card)
            .map_err(|e| anyhow::anyhow!("append card: {:?}", e))?;
        cards.push(card);
    }
    Ok(cards)
}

impl Session {
    pub fn new(
        host_id: &str,
        config: &SpaceConfig,
        audio: Rc<RefCell<Option<AudioTap>>>,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let document = dom::document()?;
        let (surface, content) = build_surface(&document)?;
        let caption = build_caption(&document, &content)?;
        let cards = match build_cards(&document, &content, config) {
            Ok(c) => c,
            Err(e) => {
                surface.remove();
                return Err(e);
            }
        };
        dom::append_to_body(&document, &surface)?;
        let painter = match AudioOverlay::new(&document) {
            Ok(p) => p,
            Err(e) => {
                surface.remove();
                return Err(e);
            }
        };

        let clock = Clock::new();
        let mut controller = AnimationController::new(config.clone(), seed);
        let (viewport_width, _) = dom::viewport_size();
        controller.start(clock.now_ms(), viewport_width);

        let handles: Vec<(ObjectId, web::HtmlElement)> = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (ObjectId(i), c.clone()))
            .collect();
        let ctx = Rc::new(RefCell::new(FrameContext {
            document,
            host_id: host_id.to_string(),
            clock,
            controller,
            projector: OverlayProjector::new(),
            tracker: PointerTracker::new(),
            rendered: Vec::with_capacity(cards.len()),
            surface,
            content,
            caption,
            cards,
            reactive: AudioReactiveOverlay::new(&config.tracks),
            painter,
            audio,
            last_chrome: None,
        }));
        let listeners = events::wire_pointer_handlers(&ctx, &handles);
        let frame_loop = frame::start_loop(ctx.clone());
        Ok(Self {
            ctx,
            frame_loop,
            listeners,
        })
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Forget fired strikes and flashes; used when the active cue changes.
    pub fn reset_audio_state(&self) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.reactive.reset();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.listeners.clear();
        match self.ctx.try_borrow_mut() {
            Ok(mut ctx) => {
                ctx.cancel_all();
                ctx.surface.remove();
                ctx.painter.remove();
            }
            Err(_) => log::error!("[space] session torn down while a frame was running"),
        }
    }
}
