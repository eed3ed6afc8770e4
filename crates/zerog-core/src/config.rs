//! Static configuration supplied by the host page.
//!
//! The host hands over an ordered list of objects with their placements and a
//! table of audio tracks with their themes and scripted timelines. Both are
//! validated once; the engine never mutates them.

use crate::audio::timeline::{CueTimeline, ScriptedWindow};
use crate::constants::*;
use crate::error::ConfigError;
use crate::object::{FloatingObjectPayload, Placement};
use crate::physics::SlideTuning;
use crate::wrap::WrapBounds;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

pub const HANS_ZIMMER_TRACK: &str = "hans-zimmer";
pub const AMBIENT_TRACK: &str = "ambient";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    #[serde(flatten)]
    pub payload: FloatingObjectPayload,
    pub placement: Placement,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackTheme {
    pub overlay_tint: [u8; 3],
    pub vignette_tint: [u8; 3],
}

impl Default for TrackTheme {
    fn default() -> Self {
        Self {
            overlay_tint: [0, 0, 0],
            vignette_tint: [8, 8, 12],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackCue {
    pub id: String,
    #[serde(default)]
    pub theme: TrackTheme,
    #[serde(default)]
    pub timeline: Option<CueTimeline>,
}

/// Numeric feel of the space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    pub smoothing_alpha: f32,
    pub slide_factor: f32,
    pub slide_speed_to_seconds: f32,
    pub slide_min_duration_sec: f32,
    pub slide_max_duration_sec: f32,
    pub wrap_buffer_px: f32,
    pub bottom_margin_px: f32,
    pub press_lift_scale: f32,
    pub small_viewport_max_width_px: f32,
    pub small_viewport_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing_alpha: VELOCITY_SMOOTHING_ALPHA,
            slide_factor: SLIDE_FACTOR,
            slide_speed_to_seconds: SLIDE_SPEED_TO_SECONDS,
            slide_min_duration_sec: SLIDE_MIN_DURATION_SEC,
            slide_max_duration_sec: SLIDE_MAX_DURATION_SEC,
            wrap_buffer_px: WRAP_BUFFER_PX,
            bottom_margin_px: BOTTOM_MARGIN_PX,
            press_lift_scale: PRESS_LIFT_SCALE,
            small_viewport_max_width_px: SMALL_VIEWPORT_MAX_WIDTH_PX,
            small_viewport_scale: SMALL_VIEWPORT_SCALE,
        }
    }
}

impl Tuning {
    pub fn slide(&self) -> SlideTuning {
        SlideTuning {
            slide_factor: self.slide_factor,
            speed_to_seconds: self.slide_speed_to_seconds,
            min_duration_sec: self.slide_min_duration_sec,
            max_duration_sec: self.slide_max_duration_sec,
        }
    }

    pub fn wrap_bounds(&self) -> WrapBounds {
        WrapBounds {
            buffer: self.wrap_buffer_px,
            bottom_margin: self.bottom_margin_px,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.smoothing_alpha,
            self.slide_factor,
            self.slide_speed_to_seconds,
            self.slide_min_duration_sec,
            self.slide_max_duration_sec,
            self.wrap_buffer_px,
            self.bottom_margin_px,
            self.press_lift_scale,
            self.small_viewport_max_width_px,
            self.small_viewport_scale,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Tuning("all values must be finite"));
        }
        if !(0.0..1.0).contains(&self.smoothing_alpha) {
            return Err(ConfigError::Tuning("smoothingAlpha must be in [0, 1)"));
        }
        if self.slide_min_duration_sec <= 0.0
            || self.slide_min_duration_sec > self.slide_max_duration_sec
        {
            return Err(ConfigError::Tuning("slide duration bounds must satisfy 0 < min <= max"));
        }
        if self.wrap_buffer_px < 0.0 || self.bottom_margin_px < 0.0 {
            return Err(ConfigError::Tuning("wrap buffer and bottom margin must be >= 0"));
        }
        if self.press_lift_scale <= 0.0 || self.small_viewport_scale <= 0.0 {
            return Err(ConfigError::Tuning("scales must be positive"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceConfig {
    pub objects: Vec<ObjectSpec>,
    #[serde(default)]
    pub tracks: Vec<TrackCue>,
    #[serde(default)]
    pub tuning: Tuning,
}

impl SpaceConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SpaceConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn track(&self, id: &str) -> Option<&TrackCue> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, spec) in self.objects.iter().enumerate() {
            validate_placement(index, &spec.placement)?;
        }
        let mut seen = FnvHashSet::default();
        for (index, track) in self.tracks.iter().enumerate() {
            if track.id.trim().is_empty() {
                return Err(ConfigError::EmptyTrackId(index));
            }
            if !seen.insert(track.id.as_str()) {
                return Err(ConfigError::DuplicateTrack(track.id.clone()));
            }
            if let Some(timeline) = &track.timeline {
                validate_timeline(&track.id, timeline)?;
            }
        }
        self.tuning.validate()
    }
}

fn validate_placement(index: usize, p: &Placement) -> Result<(), ConfigError> {
    let out_of_range = |field: &'static str, value: f32| ConfigError::PlacementOutOfRange {
        index,
        field,
        value,
    };
    if !(0.0..=100.0).contains(&p.left_percent) {
        return Err(out_of_range("leftPercent", p.left_percent));
    }
    if !(0.0..=100.0).contains(&p.top_percent) {
        return Err(out_of_range("topPercent", p.top_percent));
    }
    if !p.rotation_deg.is_finite() {
        return Err(out_of_range("rotationDeg", p.rotation_deg));
    }
    if !(p.width_px.is_finite() && p.width_px > 0.0) {
        return Err(out_of_range("widthPx", p.width_px));
    }
    if let Some(delay) = p.entry_delay_sec {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(out_of_range("entryDelaySec", delay));
        }
    }
    Ok(())
}

fn validate_timeline(track: &str, t: &CueTimeline) -> Result<(), ConfigError> {
    for (name, w) in [
        ("build", &t.build),
        ("fullDark", &t.full_dark),
        ("reveal", &t.reveal),
    ] {
        if !(w.start_sec.is_finite() && w.end_sec.is_finite() && w.start_sec < w.end_sec) {
            return Err(ConfigError::InvalidWindow {
                track: track.to_string(),
                window: name,
                start: w.start_sec,
                end: w.end_sec,
            });
        }
    }
    if t.build.end_sec > t.full_dark.start_sec || t.full_dark.end_sec > t.reveal.start_sec {
        return Err(ConfigError::WindowOrder(track.to_string()));
    }
    Ok(())
}

fn place(left: f32, top: f32, rotation: f32, width: f32, z: i32) -> Placement {
    Placement {
        left_percent: left,
        top_percent: top,
        rotation_deg: rotation,
        width_px: width,
        z_index: z,
        entry_delay_sec: None,
    }
}

fn project(title: &str, description: &str, image: &str, placement: Placement) -> ObjectSpec {
    ObjectSpec {
        payload: FloatingObjectPayload::Project {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        },
        placement,
    }
}

fn tech(label: &str, image: &str, placement: Placement) -> ObjectSpec {
    ObjectSpec {
        payload: FloatingObjectPayload::TechIcon {
            label: label.to_string(),
            image: image.to_string(),
        },
        placement,
    }
}

fn photo(src: &str, placement: Placement) -> ObjectSpec {
    ObjectSpec {
        payload: FloatingObjectPayload::Image {
            src: src.to_string(),
            caption: None,
        },
        placement,
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        let mut objects = vec![
            project(
                "Portfolio Website",
                "Personal portfolio to showcase my design and coding projects.",
                "images/portfolio1.png",
                place(18.0, 26.0, -6.0, 320.0, 20),
            ),
            project(
                "Hershey Product Site",
                "A scrollytelling product experience turning a static page into a narrative.",
                "images/site-pic.png",
                place(72.0, 22.0, 5.0, 320.0, 20),
            ),
            project(
                "Groomup",
                "Grooming service platform with bookings and online payments.",
                "images/groomup.png",
                place(30.0, 68.0, 4.0, 320.0, 20),
            ),
            project(
                "MenuAR",
                "QR-based menu that previews dishes in augmented reality.",
                "images/menuar.png",
                place(80.0, 64.0, -4.0, 320.0, 20),
            ),
        ];
        let icons = [
            ("Java", 8.0, 50.0),
            ("Python", 46.0, 12.0),
            ("MySQL", 90.0, 40.0),
            ("GitHub", 55.0, 46.0),
            ("SpringBoot", 12.0, 86.0),
            ("JavaScript", 62.0, 86.0),
            ("React", 40.0, 36.0),
            ("PremierePro", 92.0, 88.0),
        ];
        for (i, (label, left, top)) in icons.iter().enumerate() {
            let rotation = if i % 2 == 0 { -8.0 } else { 8.0 };
            objects.push(tech(
                label,
                &format!("icons/{}.png", label.to_lowercase()),
                place(*left, *top, rotation, 112.0, 10),
            ));
        }
        for (i, (left, top)) in [(24.0, 44.0), (66.0, 56.0), (48.0, 78.0), (86.0, 12.0)]
            .iter()
            .enumerate()
        {
            objects.push(photo(
                &format!("photos/shot-{:02}.jpeg", i + 1),
                place(*left, *top, (i as f32 - 1.5) * 4.0, 200.0, 15),
            ));
        }
        objects.push(ObjectSpec {
            payload: FloatingObjectPayload::AudioPlayer {
                track_id: HANS_ZIMMER_TRACK.to_string(),
                title: "Time".to_string(),
                artist: "Hans Zimmer".to_string(),
                cover: Some("covers/inception.jpg".to_string()),
            },
            placement: Placement {
                entry_delay_sec: Some(1.2),
                ..place(50.0, 58.0, -2.0, 280.0, 30)
            },
        });
        objects.push(ObjectSpec {
            payload: FloatingObjectPayload::Video {
                src: "video/reel.mp4".to_string(),
                poster: Some("video/reel.jpg".to_string()),
            },
            placement: Placement {
                entry_delay_sec: Some(1.4),
                ..place(8.0, 16.0, 3.0, 300.0, 25)
            },
        });

        let tracks = vec![
            TrackCue {
                id: HANS_ZIMMER_TRACK.to_string(),
                theme: TrackTheme {
                    overlay_tint: [4, 6, 14],
                    vignette_tint: [40, 22, 6],
                },
                timeline: Some(CueTimeline {
                    build: ScriptedWindow::new(134.0, 158.0),
                    full_dark: ScriptedWindow::new(158.0, 166.0),
                    reveal: ScriptedWindow::new(166.0, 176.0),
                }),
            },
            TrackCue {
                id: AMBIENT_TRACK.to_string(),
                theme: TrackTheme {
                    overlay_tint: [10, 4, 18],
                    vignette_tint: [30, 10, 40],
                },
                timeline: None,
            },
        ];

        Self {
            objects,
            tracks,
            tuning: Tuning::default(),
        }
    }
}
