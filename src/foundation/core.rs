use crate::foundation::error::{StoryboardError, StoryboardResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Scene origin (frame center).
pub const ORIGIN: Vec2 = Vec2::ZERO;
/// Unit vector pointing up (scene y grows upward).
pub const UP: Vec2 = Vec2::new(0.0, 1.0);
/// Unit vector pointing down.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
/// Unit vector pointing left.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Unit vector pointing right.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// Up-left diagonal (not normalized).
pub const UL: Vec2 = Vec2::new(-1.0, 1.0);
/// Up-right diagonal (not normalized).
pub const UR: Vec2 = Vec2::new(1.0, 1.0);
/// Down-left diagonal (not normalized).
pub const DL: Vec2 = Vec2::new(-1.0, -1.0);
/// Down-right diagonal (not normalized).
pub const DR: Vec2 = Vec2::new(1.0, -1.0);

/// Visible frame height in scene units.
pub const FRAME_HEIGHT: f64 = 8.0;
/// Visible frame width in scene units (16:9).
pub const FRAME_WIDTH: f64 = FRAME_HEIGHT * 16.0 / 9.0;

/// Default gaps used by `next_to`/`arrange` callers.
pub const SMALL_BUFF: f64 = 0.1;
pub const MED_SMALL_BUFF: f64 = 0.25;
pub const MED_LARGE_BUFF: f64 = 0.5;

/// Angle of a full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Output size in pixels a renderer should target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> StoryboardResult<Self> {
        if den == 0 {
            return Err(StoryboardError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(StoryboardError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }

    /// Number of frames needed to cover `secs`, rounding partial frames up.
    ///
    /// A tiny epsilon absorbs float noise from summed run times (e.g. `0.1 + 0.2`).
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        let raw = secs * self.as_f64();
        (raw - 1e-9).ceil().max(0.0) as u64
    }

    /// Frame span covering `[start_secs, start_secs + len_secs)`.
    pub fn range_for(self, start_secs: f64, len_secs: f64) -> FrameRange {
        let start = self.secs_to_frames_floor(start_secs);
        let end = self.secs_to_frames_ceil(start_secs + len_secs).max(start);
        FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(end),
        }
    }
}

fn sign(v: f64) -> i8 {
    if v > 1e-12 {
        1
    } else if v < -1e-12 {
        -1
    } else {
        0
    }
}

/// Point on the boundary of `rect` in the direction `dir` from its center.
///
/// Components of `dir` are read by sign only, so `UL` picks the top-left corner and
/// `UP` the middle of the top edge.
pub fn critical_point(rect: Rect, dir: Vec2) -> Point {
    let c = rect.center();
    let x = match sign(dir.x) {
        -1 => rect.x0,
        1 => rect.x1,
        _ => c.x,
    };
    let y = match sign(dir.y) {
        -1 => rect.y0,
        1 => rect.y1,
        _ => c.y,
    };
    Point::new(x, y)
}

/// Visible frame rectangle centered on the origin.
pub fn frame_rect() -> Rect {
    Rect::new(
        -FRAME_WIDTH / 2.0,
        -FRAME_HEIGHT / 2.0,
        FRAME_WIDTH / 2.0,
        FRAME_HEIGHT / 2.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
