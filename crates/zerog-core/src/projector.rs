//! Viewport-synced overlay projection.
//!
//! The draggable layer lives on a fixed, full-viewport surface so cards can
//! cross over later page sections. Each frame the host section's on-screen
//! rectangle is turned into a [`Projection`]: where to translate the content
//! layer, how big to make it, and how much of the surface to clip at the
//! bottom so content disappears below the host's visible lower edge.

use crate::wrap::PlayArea;
use glam::Vec2;

/// Inset used for the three sides that are never clipped.
pub const CLIP_UNBOUNDED_PX: f32 = 9999.0;

/// Consecutive unmeasurable frames tolerated before a warning is logged.
const SKIP_WARN_FRAMES: u32 = 120;

/// Host section rectangle in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl HostRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Laid out with a usable, finite size.
    pub fn is_measurable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// CSS `inset()` clip amounts, clockwise from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipInset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub translate: Vec2,
    pub size: Vec2,
    pub clip: ClipInset,
}

impl Projection {
    pub fn play_area(&self) -> PlayArea {
        PlayArea::new(self.size.x, self.size.y)
    }
}

/// Portion of the fixed surface hidden below the host section's bottom edge.
#[inline]
pub fn bottom_clip(rect_bottom: f32, viewport_height: f32) -> f32 {
    (viewport_height - rect_bottom).max(0.0)
}

/// Project `rect` onto the fixed surface, or `None` while it cannot be measured.
pub fn project(rect: HostRect, viewport_height: f32) -> Option<Projection> {
    if !rect.is_measurable() || !viewport_height.is_finite() {
        return None;
    }
    Some(Projection {
        translate: Vec2::new(rect.left, rect.top),
        size: Vec2::new(rect.width, rect.height),
        clip: ClipInset {
            top: -CLIP_UNBOUNDED_PX,
            right: -CLIP_UNBOUNDED_PX,
            bottom: bottom_clip(rect.bottom(), viewport_height),
            left: -CLIP_UNBOUNDED_PX,
        },
    })
}

/// Frame-to-frame projector state: counts frames skipped because the host was
/// not measurable. A skipped frame leaves the surface where it was.
#[derive(Debug, Default)]
pub struct OverlayProjector {
    skipped: u32,
    warned: bool,
}

impl OverlayProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the projection to apply this frame; `None` means leave the
    /// surface as it is and try again next frame.
    pub fn update(&mut self, rect: Option<HostRect>, viewport_height: f32) -> Option<Projection> {
        match rect.and_then(|r| project(r, viewport_height)) {
            Some(p) => {
                if self.warned {
                    log::info!("[projector] host measurable again after {} frames", self.skipped);
                }
                self.skipped = 0;
                self.warned = false;
                Some(p)
            }
            None => {
                self.skipped = self.skipped.saturating_add(1);
                if self.skipped >= SKIP_WARN_FRAMES && !self.warned {
                    log::warn!("[projector] host section unmeasurable for {} frames", self.skipped);
                    self.warned = true;
                }
                None
            }
        }
    }

    pub fn skipped_frames(&self) -> u32 {
        self.skipped
    }
}
