//! Storyboard records animated presentations as deterministic, serializable timelines.
//!
//! A storyboard drives a [`Scene`]: it creates objects, places them with the layout
//! helpers and plays beats of animations. [`Scene::finish`] yields a [`Timeline`] that can
//! be dumped as JSON, fingerprinted and sampled at any instant with [`Evaluator`].
//!
//! - Pick a built-in storyboard from [`catalog`]
//! - Record it with a [`RenderConfig`]
//! - Inspect or export the resulting [`Timeline`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod foundation;
pub mod plot;
pub mod scene;
pub mod storyboards;
pub mod timeline;

pub use crate::animation::ease::RateFunc;
pub use crate::animation::verb::{Animation, Verb};
pub use crate::config::{Quality, RenderConfig};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{StoryboardError, StoryboardResult};
pub use crate::scene::mobject::{Mobject, MobjectId, MobjectKind};
pub use crate::scene::play::Play;
pub use crate::scene::recorder::{Scene, TextStyle};
pub use crate::storyboards::{StoryboardEntry, catalog, find};
pub use crate::timeline::eval::{EvaluatedMoment, Evaluator};
pub use crate::timeline::fingerprint::{TimelineFingerprint, fingerprint};
pub use crate::timeline::model::{Beat, Cue, Timeline};
