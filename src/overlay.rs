use crate::constants::{AUDIO_LAYER_ID, AUDIO_LAYER_Z_INDEX};
use crate::dom;
use crate::style;
use web_sys as web;
use zerog_core::{OverlayFrame, TrackTheme};

const WHITE: [u8; 3] = [255, 255, 255];
const PARASITE_TINT: [u8; 3] = [120, 20, 10];

/// The full-screen audio-reactive layer: one div per effect, stacked.
pub struct AudioOverlay {
    root: web::HtmlElement,
    darkness: web::HtmlElement,
    parasite: web::HtmlElement,
    vignette: web::HtmlElement,
    energy: web::HtmlElement,
    flash: web::HtmlElement,
    strike: web::HtmlElement,
    theme: Option<TrackTheme>,
    visible: bool,
}

fn layer(document: &web::Document, parent: &web::HtmlElement) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create(document, "div")?;
    dom::set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("opacity", "0"),
            ("will-change", "opacity, transform"),
        ],
    );
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append overlay layer: {:?}", e))?;
    Ok(el)
}

impl AudioOverlay {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::fixed_layer(document, AUDIO_LAYER_ID, AUDIO_LAYER_Z_INDEX)?;
        dom::set_style(&root, "display", "none");
        let darkness = layer(document, &root)?;
        let parasite = layer(document, &root)?;
        dom::set_style(&parasite, "mix-blend-mode", "multiply");
        dom::set_style(&parasite, "background", &style::glow_gradient(PARASITE_TINT));
        let vignette = layer(document, &root)?;
        let energy = layer(document, &root)?;
        dom::set_style(&energy, "mix-blend-mode", "screen");
        dom::set_style(&energy, "background", &style::glow_gradient(WHITE));
        let flash = layer(document, &root)?;
        dom::set_style(&flash, "background", &style::rgb(WHITE));
        let strike = layer(document, &root)?;
        dom::set_style(&strike, "background", &style::rgb(WHITE));
        dom::append_to_body(document, &root)?;
        Ok(Self {
            root,
            darkness,
            parasite,
            vignette,
            energy,
            flash,
            strike,
            theme: None,
            visible: false,
        })
    }

    fn apply_theme(&mut self, theme: TrackTheme) {
        if self.theme == Some(theme) {
            return;
        }
        dom::set_style(&self.darkness, "background", &style::rgb(theme.overlay_tint));
        dom::set_style(
            &self.vignette,
            "background",
            &style::vignette_gradient(theme.vignette_tint),
        );
        self.theme = Some(theme);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            dom::set_style(&self.root, "display", if visible { "block" } else { "none" });
            self.visible = visible;
        }
    }

    pub fn paint(&mut self, frame: &OverlayFrame) {
        if frame.is_blank() {
            self.set_visible(false);
            return;
        }
        self.set_visible(true);
        self.apply_theme(frame.theme);
        dom::set_style(&self.darkness, "opacity", &style::opacity(frame.darkness));
        dom::set_style(&self.parasite, "opacity", &style::opacity(frame.parasite_opacity));
        dom::set_style(&self.vignette, "opacity", &style::opacity(frame.vignette_opacity));
        dom::set_style(&self.vignette, "transform", &style::scale(frame.vignette_scale));
        dom::set_style(&self.energy, "opacity", &style::opacity(frame.energy_opacity));
        dom::set_style(&self.energy, "transform", &style::scale(frame.energy_scale));
        dom::set_style(&self.flash, "opacity", &style::opacity(frame.flash_opacity));
        dom::set_style(&self.strike, "opacity", &style::opacity(frame.strike_opacity));
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}
