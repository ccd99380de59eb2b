use std::collections::BTreeSet;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{StoryboardError, StoryboardResult},
    scene::mobject::MobjectId,
    timeline::model::{Cue, Timeline},
};

/// State of a timeline at one instant. Timing only: geometry is left to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedMoment {
    pub time: f64,
    /// Index of the cue running at `time`; `None` before the first timed cue.
    pub cue_index: Option<usize>,
    pub beat: Option<ActiveBeat>,
    /// Every drawable leaf visible at `time`, in id order.
    pub visible: Vec<MobjectId>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveBeat {
    pub start: f64,
    pub run_time: f64,
    /// Frames the beat is shown on at the timeline's frame rate.
    pub frames: FrameRange,
    /// Linear progress through the beat in `[0,1]`.
    pub progress: f64,
    pub animations: Vec<AnimationProgress>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationProgress {
    pub target: MobjectId,
    pub verb: &'static str,
    /// Progress through the animation's own window.
    pub local: f64,
    /// `local` passed through the rate function.
    pub eased: f64,
}

pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(timeline), fields(timeline = %timeline.name))]
    pub fn eval_at(timeline: &Timeline, secs: f64) -> StoryboardResult<EvaluatedMoment> {
        timeline.validate()?;
        let duration = timeline.duration();
        if !secs.is_finite() || secs < 0.0 || secs > duration + 1e-9 {
            return Err(StoryboardError::timeline(format!(
                "time {secs}s is outside the timeline [0, {duration}]"
            )));
        }

        let cue_index = active_cue(timeline, secs);
        let beat = cue_index.and_then(|idx| match &timeline.cues[idx] {
            Cue::Play(b) => {
                let progress = ((secs - b.start) / b.run_time).clamp(0.0, 1.0);
                let animations = b
                    .animations
                    .iter()
                    .map(|a| {
                        let local = a.window.local_alpha(progress);
                        AnimationProgress {
                            target: a.target,
                            verb: a.verb.name(),
                            local,
                            eased: a.effective_rate().apply(local),
                        }
                    })
                    .collect();
                Some(ActiveBeat {
                    start: b.start,
                    run_time: b.run_time,
                    frames: timeline.fps.range_for(b.start, b.run_time),
                    progress,
                    animations,
                })
            }
            _ => None,
        });

        Ok(EvaluatedMoment {
            time: secs,
            cue_index,
            beat,
            visible: visible_at(timeline, secs),
        })
    }

    /// Evaluate the instant at which `frame` is shown.
    pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> StoryboardResult<EvaluatedMoment> {
        let total = timeline.frame_count(timeline.fps);
        if frame.0 >= total {
            return Err(StoryboardError::timeline(format!(
                "frame {} is out of bounds ({total} frames)",
                frame.0
            )));
        }
        let secs = timeline.fps.frames_to_secs(frame.0).min(timeline.duration());
        Self::eval_at(timeline, secs)
    }
}

/// The timed cue covering `secs`; at the very end, the last timed cue.
fn active_cue(timeline: &Timeline, secs: f64) -> Option<usize> {
    let mut last = None;
    for (idx, cue) in timeline.cues.iter().enumerate() {
        if cue.duration() <= 0.0 {
            continue;
        }
        if cue.start() > secs {
            break;
        }
        last = Some(idx);
        if secs < cue.end() {
            break;
        }
    }
    last
}

fn family_of(timeline: &Timeline, id: MobjectId) -> BTreeSet<MobjectId> {
    let mut out = BTreeSet::new();
    let mut stack = vec![id];
    while let Some(cur) = stack.pop() {
        if !out.insert(cur) {
            continue;
        }
        if let Some(rec) = timeline.mobject(cur) {
            stack.extend(rec.mobject.children.iter().copied());
        }
    }
    out
}

/// Leaves on stage at `secs`: anything added or animated in by then and not yet faded
/// out. An object fading out stays visible until its beat ends.
pub fn visible_at(timeline: &Timeline, secs: f64) -> Vec<MobjectId> {
    let mut visible = BTreeSet::new();
    for cue in &timeline.cues {
        if cue.start() > secs {
            break;
        }
        match cue {
            Cue::Add { targets, .. } => {
                for &t in targets {
                    visible.extend(family_of(timeline, t));
                }
            }
            Cue::Play(beat) => {
                let done = secs >= beat.end();
                for a in &beat.animations {
                    if a.verb.introduces() {
                        visible.extend(family_of(timeline, a.target));
                    } else if done {
                        let gone = family_of(timeline, a.target);
                        visible.retain(|id| !gone.contains(id));
                    }
                }
            }
            Cue::Wait { .. } => {}
        }
    }
    visible
        .into_iter()
        .filter(|&id| {
            timeline
                .mobject(id)
                .is_some_and(|rec| !rec.mobject.kind.is_group())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/eval.rs"]
mod tests;
