//! Floating objects: what is rendered, where it starts, and how it is transformed.
//!
//! The physics never looks inside [`FloatingObjectPayload`]; only the
//! rendering layer switches on it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FloatingObjectPayload {
    #[serde(rename = "project-card")]
    Project {
        title: String,
        description: String,
        image: String,
    },
    #[serde(rename = "tech-icon")]
    TechIcon { label: String, image: String },
    #[serde(rename = "image-card")]
    Image {
        src: String,
        #[serde(default)]
        caption: Option<String>,
    },
    #[serde(rename = "audio-player-card")]
    AudioPlayer {
        #[serde(rename = "trackId")]
        track_id: String,
        title: String,
        artist: String,
        #[serde(default)]
        cover: Option<String>,
    },
    #[serde(rename = "video-card")]
    Video {
        src: String,
        #[serde(default)]
        poster: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    ProjectCard,
    TechIcon,
    ImageCard,
    AudioPlayerCard,
    VideoCard,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::ProjectCard => "project-card",
            ObjectKind::TechIcon => "tech-icon",
            ObjectKind::ImageCard => "image-card",
            ObjectKind::AudioPlayerCard => "audio-player-card",
            ObjectKind::VideoCard => "video-card",
        }
    }

    /// Media cards carry their own controls and stay put between drags.
    pub fn drifts(self) -> bool {
        !matches!(self, ObjectKind::AudioPlayerCard | ObjectKind::VideoCard)
    }
}

impl FloatingObjectPayload {
    pub fn kind(&self) -> ObjectKind {
        match self {
            FloatingObjectPayload::Project { .. } => ObjectKind::ProjectCard,
            FloatingObjectPayload::TechIcon { .. } => ObjectKind::TechIcon,
            FloatingObjectPayload::Image { .. } => ObjectKind::ImageCard,
            FloatingObjectPayload::AudioPlayer { .. } => ObjectKind::AudioPlayerCard,
            FloatingObjectPayload::Video { .. } => ObjectKind::VideoCard,
        }
    }
}

/// Static initial placement. Percentages are of the play area and locate the
/// object's center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub left_percent: f32,
    pub top_percent: f32,
    #[serde(default)]
    pub rotation_deg: f32,
    pub width_px: f32,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub entry_delay_sec: Option<f32>,
}

impl Placement {
    pub fn anchor(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            self.left_percent / 100.0 * width.max(0.0),
            self.top_percent / 100.0 * height.max(0.0),
        )
    }
}

/// Live transform. `offset` is the driver-owned displacement from the
/// placement anchor; the wrapped on-screen position is derived per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub offset: Vec2,
    pub depth: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct FloatingObject {
    pub id: ObjectId,
    pub payload: FloatingObjectPayload,
    pub placement: Placement,
    pub transform: Transform,
}

impl FloatingObject {
    pub fn kind(&self) -> ObjectKind {
        self.payload.kind()
    }
}

/// Per-frame output consumed by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedTransform {
    pub id: ObjectId,
    /// Center of the object in play-area pixels, after wrapping.
    pub position: Vec2,
    pub depth: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub width_px: f32,
}
