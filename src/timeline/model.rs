use crate::{
    animation::verb::Animation,
    foundation::color::Color,
    foundation::core::{Canvas, Fps},
    foundation::error::{StoryboardError, StoryboardResult},
    scene::mobject::{Mobject, MobjectId},
};

/// Tolerance when checking that cues abut each other.
const CLOCK_EPS: f64 = 1e-9;

/// A recorded storyboard: every object that ever appears plus the cue list.
///
/// Times are in seconds from the start of the scene. Cues are contiguous: each starts where
/// the previous one ended.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub name: String,
    pub background: Color,
    pub canvas: Canvas,
    pub fps: Fps,
    pub mobjects: Vec<MobjectRecord>,
    pub cues: Vec<Cue>,
}

/// An arena entry as it looked when it first went on stage (or at the end of recording, for
/// objects that never did).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MobjectRecord {
    pub id: MobjectId,
    pub mobject: Mobject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced_at: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Objects placed on stage without animation.
    Add { at: f64, targets: Vec<MobjectId> },
    Play(Beat),
    Wait { start: f64, duration: f64 },
}

impl Cue {
    pub fn start(&self) -> f64 {
        match self {
            Self::Add { at, .. } => *at,
            Self::Play(beat) => beat.start,
            Self::Wait { start, .. } => *start,
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            Self::Add { .. } => 0.0,
            Self::Play(beat) => beat.run_time,
            Self::Wait { duration, .. } => *duration,
        }
    }

    pub fn end(&self) -> f64 {
        self.start() + self.duration()
    }
}

/// One `play`: animations sharing a start time and run time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Beat {
    pub start: f64,
    pub run_time: f64,
    pub animations: Vec<Animation>,
}

impl Beat {
    pub fn end(&self) -> f64 {
        self.start + self.run_time
    }

    pub fn verb_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for a in &self.animations {
            let n = a.verb.name();
            if !names.contains(&n) {
                names.push(n);
            }
        }
        names
    }
}

impl Timeline {
    pub fn duration(&self) -> f64 {
        self.cues.last().map(Cue::end).unwrap_or(0.0)
    }

    pub fn beats(&self) -> impl Iterator<Item = &Beat> {
        self.cues.iter().filter_map(|c| match c {
            Cue::Play(b) => Some(b),
            _ => None,
        })
    }

    pub fn beat_count(&self) -> usize {
        self.beats().count()
    }

    /// Frames needed to render the whole timeline at `fps`.
    pub fn frame_count(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_ceil(self.duration())
    }

    pub fn mobject(&self, id: MobjectId) -> Option<&MobjectRecord> {
        self.mobjects.get(id.index())
    }

    pub fn from_json(s: &str) -> StoryboardResult<Self> {
        let tl: Self = serde_json::from_str(s)?;
        tl.validate()?;
        Ok(tl)
    }

    pub fn to_json_pretty(&self) -> StoryboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> StoryboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoryboardError::validation("timeline name must be non-empty"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StoryboardError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(StoryboardError::validation(
                "fps must have num>0 and den>0",
            ));
        }

        let n = self.mobjects.len();
        for (idx, rec) in self.mobjects.iter().enumerate() {
            if rec.id.index() != idx {
                return Err(StoryboardError::timeline(format!(
                    "mobject record {idx} carries id {}",
                    rec.id
                )));
            }
            for child in &rec.mobject.children {
                // Children are always created before their group.
                if child.index() >= idx {
                    return Err(StoryboardError::timeline(format!(
                        "group {} references child {child} that is not older",
                        rec.id
                    )));
                }
            }
        }

        let check_target = |id: MobjectId| -> StoryboardResult<()> {
            if id.index() >= n {
                return Err(StoryboardError::timeline(format!(
                    "cue references unknown mobject {id}"
                )));
            }
            Ok(())
        };

        let mut clock = 0.0f64;
        for (idx, cue) in self.cues.iter().enumerate() {
            if (cue.start() - clock).abs() > CLOCK_EPS {
                return Err(StoryboardError::timeline(format!(
                    "cue {idx} starts at {} but the previous cue ended at {clock}",
                    cue.start()
                )));
            }
            match cue {
                Cue::Add { targets, .. } => {
                    for &t in targets {
                        check_target(t)?;
                    }
                }
                Cue::Wait { duration, .. } => {
                    if !duration.is_finite() || *duration < 0.0 {
                        return Err(StoryboardError::timeline(format!(
                            "cue {idx} waits for an invalid duration {duration}"
                        )));
                    }
                }
                Cue::Play(beat) => {
                    if !beat.run_time.is_finite() || beat.run_time <= 0.0 {
                        return Err(StoryboardError::timeline(format!(
                            "cue {idx} has non-positive run time {}",
                            beat.run_time
                        )));
                    }
                    if beat.animations.is_empty() {
                        return Err(StoryboardError::timeline(format!(
                            "cue {idx} plays no animations"
                        )));
                    }
                    for a in &beat.animations {
                        check_target(a.target)?;
                        a.window.validate()?;
                    }
                }
            }
            clock = cue.end();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
