use crate::audio::AudioTap;
use crate::constants::CARD_DRAGGING_CLASS;
use crate::dom;
use crate::input::PointerTracker;
use crate::overlay::AudioOverlay;
use crate::style;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zerog_core::{
    AnimationController, AudioCue, AudioReactiveOverlay, ChromeState, ObjectId, OverlayEvent,
    OverlayProjector, RenderedTransform,
};

/// Millisecond clock shared by the frame loop and the input handlers, so
/// drag samples and tweens are measured on the same timeline.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    epoch: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub document: web::Document,
    pub host_id: String,
    pub clock: Clock,

    pub controller: AnimationController,
    pub projector: OverlayProjector,
    pub tracker: PointerTracker,
    pub rendered: Vec<RenderedTransform>,

    pub surface: web::HtmlElement,
    pub content: web::HtmlElement,
    pub caption: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,

    pub reactive: AudioReactiveOverlay,
    pub painter: AudioOverlay,
    pub audio: Rc<RefCell<Option<AudioTap>>>,

    pub last_chrome: Option<ChromeState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let (_, viewport_height) = dom::viewport_size();

        let rect = dom::host_rect(&self.document, &self.host_id);
        let projection = self.projector.update(rect, viewport_height);
        if let Some(p) = projection {
            dom::set_style(&self.content, "transform", &style::translate(p.translate));
            dom::set_style(&self.content, "width", &style::px(p.size.x));
            dom::set_style(&self.content, "height", &style::px(p.size.y));
            dom::set_style(&self.surface, "clip-path", &style::clip_inset(&p.clip));
        }

        let chrome = self
            .controller
            .tick(now, projection.map(|p| p.play_area()), &mut self.rendered);
        for t in &self.rendered {
            if let Some(card) = self.cards.get(t.id.0) {
                dom::set_style(card, "transform", &style::card_transform(t));
                dom::set_style(card, "opacity", &style::opacity(t.opacity));
            }
        }
        self.paint_chrome(chrome);
        self.paint_audio(now);
    }

    fn paint_chrome(&mut self, chrome: ChromeState) {
        if self.last_chrome == Some(chrome) {
            return;
        }
        dom::set_style(&self.surface, "opacity", &style::opacity(chrome.container_opacity));
        dom::set_style(&self.caption, "opacity", &style::opacity(chrome.caption_opacity));
        dom::set_style(
            &self.caption,
            "transform",
            &style::translate(Vec2::new(0.0, chrome.caption_offset_y)),
        );
        self.last_chrome = Some(chrome);
    }

    fn paint_audio(&mut self, now: f64) {
        let Ok(mut audio) = self.audio.try_borrow_mut() else {
            return;
        };
        let Some(tap) = audio.as_mut() else {
            self.painter.hide();
            return;
        };
        let sample = tap.sample();
        let cue = AudioCue {
            track_id: &tap.track_id,
            current_time: sample.current_time,
            duration: sample.duration,
            playing: sample.playing,
            levels: sample.levels,
        };
        let frame = self.reactive.update(&cue, now);
        for ev in &frame.events {
            if let OverlayEvent::Hit(tier) = ev {
                log::debug!("[overlay] {:?} hit at {:.2}s", tier, sample.current_time);
            }
        }
        self.painter.paint(&frame);
    }

    /// Pointer pressed on card `id`.
    pub fn press(&mut self, id: ObjectId, pointer_id: i32, at: Vec2) -> bool {
        if !self.tracker.begin(pointer_id, id, at) {
            return false;
        }
        if !self.controller.press(id, self.clock.now_ms()) {
            self.tracker.end(pointer_id);
            return false;
        }
        if let Some(card) = self.cards.get(id.0) {
            _ = card.class_list().add_1(CARD_DRAGGING_CLASS);
        }
        true
    }

    pub fn drag(&mut self, pointer_id: i32, at: Vec2) -> bool {
        match self.tracker.move_to(pointer_id, at) {
            Some((id, delta)) => self.controller.drag(id, delta, self.clock.now_ms()),
            None => false,
        }
    }

    pub fn release(&mut self, pointer_id: i32) {
        let Some(id) = self.tracker.end(pointer_id) else {
            return;
        };
        self.controller.release(id, self.clock.now_ms());
        if let Some(card) = self.cards.get(id.0) {
            _ = card.class_list().remove_1(CARD_DRAGGING_CLASS);
        }
    }

    /// Stop every driver and forget held pointers.
    pub fn cancel_all(&mut self) {
        self.tracker.clear();
        self.controller.cancel_all();
        self.rendered.clear();
        self.painter.hide();
    }
}

/// Handle to a running `requestAnimationFrame` loop. Cancelling (or
/// dropping) the handle stops the loop and frees its closure.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.frame();
        }
        raf_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));
    FrameLoop { tick, raf_id }
}
