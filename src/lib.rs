#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use zerog_core::SpaceConfig;

mod audio;
mod cache;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod session;
mod style;

use audio::{AudioGraphs, AudioTap};
use session::Session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zerog-web starting");
    Ok(())
}

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn parse_config(value: JsValue) -> anyhow::Result<SpaceConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(SpaceConfig::default());
    }
    let config: SpaceConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| anyhow!("config: {}", e))?;
    config.validate()?;
    Ok(config)
}

#[inline]
fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

/// The interactive space, driven by the host page.
///
/// `activate` builds the floating layer over the host section and starts the
/// frame loop; `deactivate` (or dropping the value) tears everything down.
#[wasm_bindgen]
pub struct ZeroGravitySpace {
    host_id: String,
    config: SpaceConfig,
    audio: Rc<RefCell<Option<AudioTap>>>,
    graphs: AudioGraphs,
    session: Option<Session>,
}

#[wasm_bindgen]
impl ZeroGravitySpace {
    /// `config` may be `undefined` for the built-in layout.
    #[wasm_bindgen(constructor)]
    pub fn new(host_id: String, config: JsValue) -> Result<ZeroGravitySpace, JsValue> {
        let config = parse_config(config).map_err(to_js)?;
        log::info!(
            "[space] configured: {} objects, {} tracks, host #{}",
            config.objects.len(),
            config.tracks.len(),
            host_id
        );
        Ok(Self {
            host_id,
            config,
            audio: Rc::new(RefCell::new(None)),
            graphs: AudioGraphs::new(),
            session: None,
        })
    }

    pub fn activate(&mut self) -> Result<(), JsValue> {
        if self.session.as_ref().map_or(false, |s| s.is_running()) {
            return Ok(());
        }
        let session = Session::new(&self.host_id, &self.config, self.audio.clone(), random_seed())
            .map_err(|e| {
                log::error!("[space] activation failed: {:#}", e);
                to_js(e)
            })?;
        self.session = Some(session);
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.session = None;
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Follow the `<audio>` element `element_id` as track `track_id`.
    #[wasm_bindgen(js_name = attachAudio)]
    pub fn attach_audio(&mut self, element_id: &str, track_id: &str) -> Result<(), JsValue> {
        let document = dom::document().map_err(to_js)?;
        let Ok(mut slot) = self.audio.try_borrow_mut() else {
            return Err(JsValue::from_str("audio tap is busy"));
        };
        // The previous tap unhooks its analyser on drop; do that before the
        // new tap hooks onto what may be the same element graph.
        slot.take();
        let tap = AudioTap::attach(&document, &mut self.graphs, element_id, track_id)
            .map_err(to_js)?;
        if !tap.has_analysis() {
            log::warn!("[audio] #{} has no spectral analysis", element_id);
        }
        *slot = Some(tap);
        drop(slot);
        self.warn_unknown_track(track_id);
        if let Some(s) = &self.session {
            s.reset_audio_state();
        }
        Ok(())
    }

    /// Switch the cue followed by the attached element.
    #[wasm_bindgen(js_name = setTrack)]
    pub fn set_track(&mut self, track_id: &str) {
        self.warn_unknown_track(track_id);
        if let Ok(mut slot) = self.audio.try_borrow_mut() {
            match slot.as_mut() {
                Some(tap) => tap.track_id = track_id.to_string(),
                None => log::warn!("[audio] setTrack(`{}`) before attachAudio", track_id),
            }
        }
        if let Some(s) = &self.session {
            s.reset_audio_state();
        }
    }

    /// Stop following the element. Its playback is left untouched.
    #[wasm_bindgen(js_name = detachAudio)]
    pub fn detach_audio(&mut self) {
        if let Ok(mut slot) = self.audio.try_borrow_mut() {
            slot.take();
        }
    }
}

impl ZeroGravitySpace {
    fn warn_unknown_track(&self, track_id: &str) {
        if self.config.track(track_id).is_none() {
            log::warn!("[audio] track `{}` has no cue; continuous effects only", track_id);
        }
    }
}
