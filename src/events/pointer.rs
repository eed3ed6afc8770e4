use crate::frame::FrameContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zerog_core::ObjectId;

/// A registered pointer listener. Dropping it unregisters the callback, so a
/// session that drops its listeners leaves nothing behind on the page.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[input] failed to add {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Wire press on every card, plus move/release on the window so a drag keeps
/// tracking after the pointer leaves the card.
pub fn wire_pointer_handlers(
    ctx: &Rc<RefCell<FrameContext>>,
    cards: &[(ObjectId, web::HtmlElement)],
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(cards.len() + 3);
    for (id, card) in cards {
        let id = *id;
        let ctx_down = ctx.clone();
        let card_down = card.clone();
        let handler = move |ev: web::PointerEvent| {
            let Ok(mut c) = ctx_down.try_borrow_mut() else {
                return;
            };
            if c.press(id, ev.pointer_id(), client_pos(&ev)) {
                _ = card_down.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }
        };
        listeners.extend(Listener::add(card, "pointerdown", handler));
    }

    let Some(window) = web::window() else {
        return listeners;
    };
    let target: &web::EventTarget = window.as_ref();

    let ctx_move = ctx.clone();
    listeners.extend(Listener::add(target, "pointermove", move |ev| {
        if let Ok(mut c) = ctx_move.try_borrow_mut() {
            if c.drag(ev.pointer_id(), client_pos(&ev)) {
                ev.prevent_default();
            }
        }
    }));
    for event in ["pointerup", "pointercancel"] {
        let ctx_up = ctx.clone();
        listeners.extend(Listener::add(target, event, move |ev| {
            if let Ok(mut c) = ctx_up.try_borrow_mut() {
                c.release(ev.pointer_id());
            }
        }));
    }
    log::debug!("[input] {} pointer listeners wired", listeners.len());
    listeners
}
