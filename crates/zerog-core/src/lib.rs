pub mod audio;
pub mod choreography;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod object;
pub mod physics;
pub mod projector;
pub mod tween;
pub mod velocity;
pub mod wrap;

pub use audio::*;
pub use choreography::{ChromeState, EntryTween, IdleDrift, SpaceChrome};
pub use config::*;
pub use controller::{AnimationController, Driver, DriverKind};
pub use easing::Ease;
pub use error::ConfigError;
pub use object::*;
pub use physics::*;
pub use projector::*;
pub use tween::{Repeat, Tween};
pub use velocity::DragSession;
pub use wrap::*;
