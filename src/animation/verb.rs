use crate::{
    animation::{ease::RateFunc, lag::Window},
    foundation::core::{Point, Vec2},
    scene::mobject::{MobjectId, Snapshot},
};

/// What an animation does to its target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    /// Fade from transparent, arriving from `-shift` and growing from `scale`.
    FadeIn { shift: Vec2, scale: f64 },
    /// Fade to transparent while drifting by `shift` and shrinking to `scale`.
    FadeOut { shift: Vec2, scale: f64 },
    /// Trace strokes progressively; group members start `lag_ratio` apart.
    Create { lag_ratio: f64 },
    /// Trace the outline, then flood the fill.
    DrawBorderThenFill,
    /// Grow an arrow out of its start point.
    GrowArrow,
    /// Rotate by `angle` radians about `about`.
    Rotate { angle: f64, about: Point },
    /// Move every leaf from one recorded state to another.
    Transform { from: Snapshot, to: Snapshot },
}

impl Verb {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FadeIn { .. } => "fade_in",
            Self::FadeOut { .. } => "fade_out",
            Self::Create { .. } => "create",
            Self::DrawBorderThenFill => "draw_border_then_fill",
            Self::GrowArrow => "grow_arrow",
            Self::Rotate { .. } => "rotate",
            Self::Transform { .. } => "transform",
        }
    }

    /// Whether playing the verb puts its target on stage.
    pub fn introduces(&self) -> bool {
        !self.removes()
    }

    /// Whether the target leaves the stage once the verb completes.
    pub fn removes(&self) -> bool {
        matches!(self, Self::FadeOut { .. })
    }
}

/// One animation inside a beat.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    pub target: MobjectId,
    pub verb: Verb,
    /// Own run time; ignored when the enclosing play fixes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_time: Option<f64>,
    /// Own rate function; overridden by the enclosing play's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<RateFunc>,
    /// Fraction of the beat during which this animation runs.
    pub window: Window,
}

impl Animation {
    pub fn new(target: MobjectId, verb: Verb) -> Self {
        Self {
            target,
            verb,
            run_time: None,
            rate: None,
            window: Window::FULL,
        }
    }

    pub fn run_time(mut self, secs: f64) -> Self {
        self.run_time = Some(secs);
        self
    }

    pub fn rate(mut self, rate: RateFunc) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Rate function in effect once the beat is assembled.
    pub fn effective_rate(&self) -> RateFunc {
        self.rate.unwrap_or_default()
    }
}

pub fn fade_in(target: MobjectId) -> Animation {
    Animation::new(
        target,
        Verb::FadeIn {
            shift: Vec2::ZERO,
            scale: 1.0,
        },
    )
}

pub fn fade_in_shift(target: MobjectId, shift: Vec2) -> Animation {
    Animation::new(target, Verb::FadeIn { shift, scale: 1.0 })
}

pub fn fade_in_scale(target: MobjectId, scale: f64) -> Animation {
    Animation::new(
        target,
        Verb::FadeIn {
            shift: Vec2::ZERO,
            scale,
        },
    )
}

pub fn fade_out(target: MobjectId) -> Animation {
    Animation::new(
        target,
        Verb::FadeOut {
            shift: Vec2::ZERO,
            scale: 1.0,
        },
    )
}

pub fn fade_out_shift(target: MobjectId, shift: Vec2) -> Animation {
    Animation::new(target, Verb::FadeOut { shift, scale: 1.0 })
}

pub fn create(target: MobjectId) -> Animation {
    Animation::new(target, Verb::Create { lag_ratio: 0.0 })
}

pub fn create_lagged(target: MobjectId, lag_ratio: f64) -> Animation {
    Animation::new(target, Verb::Create { lag_ratio })
}

pub fn draw_border_then_fill(target: MobjectId) -> Animation {
    Animation::new(target, Verb::DrawBorderThenFill)
}

pub fn grow_arrow(target: MobjectId) -> Animation {
    Animation::new(target, Verb::GrowArrow)
}

/// Rotation runs at a constant angular speed unless the play sets a rate.
pub fn rotate(target: MobjectId, angle: f64, about: Point) -> Animation {
    Animation::new(target, Verb::Rotate { angle, about }).rate(RateFunc::Linear)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/verb.rs"]
mod tests;
