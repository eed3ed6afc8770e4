//! Per-session owner of every floating object and its animation driver.
//!
//! Each object has exactly one [`Driver`] at any instant. Handing an object
//! to a new driver replaces the old one in place, so a cancelled slide or
//! drift can never write to the transform again. The controller is an
//! ordinary value: create one per activation and drop it (or call
//! [`AnimationController::cancel_all`]) on deactivation.

use crate::choreography::{self, ChromeState, EntryTween, IdleDrift, SpaceChrome};
use crate::config::{SpaceConfig, Tuning};
use crate::constants::PRESS_LIFT_SEC;
use crate::easing::Ease;
use crate::object::{FloatingObject, ObjectId, RenderedTransform, Transform};
use crate::physics::{SlidePlan, SlideTween};
use crate::tween::Tween;
use crate::velocity::DragSession;
use crate::wrap::PlayArea;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub enum Driver {
    Entering(EntryTween),
    Idle(IdleDrift),
    Resting,
    Dragging(DragSession),
    Sliding(SlideTween),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverKind {
    Entering,
    Idle,
    Resting,
    Dragging,
    Sliding,
}

impl Driver {
    pub fn kind(&self) -> DriverKind {
        match self {
            Driver::Entering(_) => DriverKind::Entering,
            Driver::Idle(_) => DriverKind::Idle,
            Driver::Resting => DriverKind::Resting,
            Driver::Dragging(_) => DriverKind::Dragging,
            Driver::Sliding(_) => DriverKind::Sliding,
        }
    }
}

struct Slot {
    object: FloatingObject,
    driver: Driver,
    /// Press feedback; multiplies the driver-owned scale, never touches position.
    lift: Option<Tween>,
    rest_scale: f32,
    /// Last wrapped center, in play-area pixels.
    rendered: Vec2,
}

impl Slot {
    fn lift_factor(&self, now_ms: f64) -> f32 {
        self.lift.as_ref().map_or(1.0, |t| t.value(now_ms))
    }
}

pub struct AnimationController {
    config: SpaceConfig,
    tuning: Tuning,
    slots: Vec<Slot>,
    rng: StdRng,
    chrome: Option<SpaceChrome>,
    area: PlayArea,
    active: bool,
}

impl AnimationController {
    pub fn new(config: SpaceConfig, seed: u64) -> Self {
        let tuning = config.tuning;
        Self {
            config,
            tuning,
            slots: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            chrome: None,
            area: PlayArea::default(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Spawn every configured object in its hidden entry state. Calling
    /// `start` on an already active controller does nothing, so re-renders
    /// never replay the entry.
    pub fn start(&mut self, now_ms: f64, viewport_width: f32) {
        if self.active {
            return;
        }
        let rest_scale = choreography::rest_scale(
            viewport_width,
            self.tuning.small_viewport_max_width_px,
            self.tuning.small_viewport_scale,
        );
        let mut slots = Vec::with_capacity(self.config.objects.len());
        for (i, spec) in self.config.objects.iter().enumerate() {
            let delay = choreography::entry_delay_sec(&spec.placement, &mut self.rng);
            let entry = EntryTween::new(now_ms, delay, rest_scale);
            let first = entry.sample(now_ms);
            slots.push(Slot {
                object: FloatingObject {
                    id: ObjectId(i),
                    payload: spec.payload.clone(),
                    placement: spec.placement,
                    transform: Transform {
                        offset: Vec2::ZERO,
                        depth: first.depth,
                        rotation_deg: spec.placement.rotation_deg,
                        scale: first.scale,
                        opacity: first.opacity,
                    },
                },
                driver: Driver::Entering(entry),
                lift: None,
                rest_scale,
                rendered: Vec2::ZERO,
            });
        }
        self.slots = slots;
        self.chrome = Some(SpaceChrome::new(now_ms));
        self.active = true;
        log::info!("[space] activated with {} objects", self.slots.len());
    }

    /// Drop every object, driver and tween.
    pub fn cancel_all(&mut self) {
        if !self.active && self.slots.is_empty() {
            return;
        }
        let n = self.slots.len();
        self.slots.clear();
        self.chrome = None;
        self.active = false;
        log::info!("[space] deactivated; cancelled {} drivers", n);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn object(&self, id: ObjectId) -> Option<&FloatingObject> {
        self.slots.get(id.0).map(|s| &s.object)
    }

    pub fn objects(&self) -> impl Iterator<Item = &FloatingObject> {
        self.slots.iter().map(|s| &s.object)
    }

    pub fn driver_kind(&self, id: ObjectId) -> Option<DriverKind> {
        self.slots.get(id.0).map(|s| s.driver.kind())
    }

    pub fn drag_session(&self, id: ObjectId) -> Option<&DragSession> {
        match self.slots.get(id.0).map(|s| &s.driver) {
            Some(Driver::Dragging(session)) => Some(session),
            _ => None,
        }
    }

    /// Begin a drag. Cancels any drift or slide first. Returns `false` when
    /// the object is unknown, still entering, or already being dragged.
    pub fn press(&mut self, id: ObjectId, now_ms: f64) -> bool {
        let area = self.area;
        let wrap = self.tuning.wrap_bounds();
        let lift_scale = self.tuning.press_lift_scale;
        let smoothing = self.tuning.smoothing_alpha;
        let Some(slot) = self.slots.get_mut(id.0) else {
            return false;
        };
        match slot.driver.kind() {
            DriverKind::Entering | DriverKind::Dragging => return false,
            DriverKind::Sliding => log::debug!("[drag] press on {} cancelled slide", id.0),
            DriverKind::Idle => log::debug!("[drag] press on {} cancelled drift", id.0),
            DriverKind::Resting => {}
        }
        // Settle the outgoing driver at its current value, then rebase the
        // raw offset onto the wrapped position so the drag starts where the
        // object is drawn.
        sample_driver(slot, now_ms);
        let anchor = slot.object.placement.anchor(area.width, area.height);
        let on_screen = wrap.apply(anchor + slot.object.transform.offset, area);
        slot.object.transform.offset = on_screen - anchor;
        slot.driver = Driver::Dragging(DragSession::with_alpha(now_ms, smoothing));
        let from = slot.lift_factor(now_ms);
        slot.lift = Some(Tween::new(from, lift_scale, now_ms, PRESS_LIFT_SEC, Ease::Power2Out));
        true
    }

    /// Apply one pointer move to a dragged object.
    pub fn drag(&mut self, id: ObjectId, delta: Vec2, now_ms: f64) -> bool {
        let Some(slot) = self.slots.get_mut(id.0) else {
            return false;
        };
        let Driver::Dragging(session) = &mut slot.driver else {
            return false;
        };
        session.sample(delta, now_ms);
        slot.object.transform.offset += delta;
        true
    }

    /// End a drag and hand the object to a release slide.
    pub fn release(&mut self, id: ObjectId, now_ms: f64) -> Option<SlidePlan> {
        let slide = self.tuning.slide();
        let slot = self.slots.get_mut(id.0)?;
        let session = match std::mem::replace(&mut slot.driver, Driver::Resting) {
            Driver::Dragging(session) => session,
            other => {
                slot.driver = other;
                return None;
            }
        };
        let plan = SlidePlan::from_release(session.finish(), &slide);
        slot.driver = Driver::Sliding(SlideTween::start(slot.object.transform.offset, plan, now_ms));
        let from = slot.lift_factor(now_ms);
        slot.lift = Some(Tween::new(from, 1.0, now_ms, PRESS_LIFT_SEC, Ease::Power2Out));
        log::debug!(
            "[drag] release {}: slide {:.1}px over {:.2}s",
            id.0,
            plan.displacement.length(),
            plan.duration_sec
        );
        Some(plan)
    }

    /// Advance every driver to `now_ms` and write one rendered transform per
    /// object into `out`. `area` is `None` while the play area cannot be
    /// measured; the last known size is reused and wrapping is skipped for a
    /// degenerate size.
    pub fn tick(
        &mut self,
        now_ms: f64,
        area: Option<PlayArea>,
        out: &mut Vec<RenderedTransform>,
    ) -> ChromeState {
        out.clear();
        if !self.active {
            return ChromeState::default();
        }
        if let Some(a) = area {
            self.area = a;
        }
        let area = self.area;
        let wrap = self.tuning.wrap_bounds();
        for slot in &mut self.slots {
            sample_driver(slot, now_ms);
            advance_driver(slot, now_ms, &mut self.rng);
            if slot.lift.as_ref().map_or(false, |t| t.is_complete(now_ms) && t.to == 1.0) {
                slot.lift = None;
            }
            let anchor = slot.object.placement.anchor(area.width, area.height);
            slot.rendered = wrap.apply(anchor + slot.object.transform.offset, area);
            let t = &slot.object.transform;
            out.push(RenderedTransform {
                id: slot.object.id,
                position: slot.rendered,
                depth: t.depth,
                rotation_deg: t.rotation_deg,
                scale: t.scale * slot.lift_factor(now_ms),
                opacity: t.opacity,
                z_index: slot.object.placement.z_index,
                width_px: slot.object.placement.width_px,
            });
        }
        self.chrome
            .as_ref()
            .map(|c| c.sample(now_ms))
            .unwrap_or_default()
    }
}

/// Write the current driver's value into the transform.
fn sample_driver(slot: &mut Slot, now_ms: f64) {
    let t = &mut slot.object.transform;
    match &slot.driver {
        Driver::Entering(entry) => {
            let s = entry.sample(now_ms);
            t.depth = s.depth;
            t.scale = s.scale;
            t.opacity = s.opacity;
        }
        Driver::Idle(drift) => {
            let (offset, rotation) = drift.sample(now_ms);
            t.offset = offset;
            t.rotation_deg = rotation;
        }
        Driver::Sliding(slide) => t.offset = slide.position(now_ms),
        Driver::Resting | Driver::Dragging(_) => {}
    }
}

/// Hand finished drivers to their successor.
fn advance_driver(slot: &mut Slot, now_ms: f64, rng: &mut StdRng) {
    let done = match &slot.driver {
        Driver::Entering(entry) => entry.is_complete(now_ms),
        Driver::Sliding(slide) => slide.is_complete(now_ms),
        _ => false,
    };
    if !done {
        return;
    }
    if let Driver::Entering(_) = slot.driver {
        let t = &mut slot.object.transform;
        t.depth = 0.0;
        t.scale = slot.rest_scale;
        t.opacity = 1.0;
    }
    slot.driver = settle(&slot.object, now_ms, rng);
}

fn settle(object: &FloatingObject, now_ms: f64, rng: &mut StdRng) -> Driver {
    if object.kind().drifts() {
        let t = &object.transform;
        let base = object.placement.rotation_deg;
        Driver::Idle(IdleDrift::random(t.offset, base, t.rotation_deg, now_ms, rng))
    } else {
        Driver::Resting
    }
}
