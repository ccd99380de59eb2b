use crate::{
    animation::{
        ease::RateFunc,
        lag::{Window, lagged_windows},
        verb::Animation,
    },
    foundation::error::{StoryboardError, StoryboardResult},
    timeline::model::Beat,
};

/// Run time of an animation that does not set one.
pub const DEFAULT_RUN_TIME: f64 = 1.0;

#[derive(Clone, Debug)]
enum PlayItem {
    Single(Animation),
    Lagged {
        anims: Vec<Animation>,
        lag_ratio: f64,
    },
}

/// Arguments of one `play` call, assembled into a [`Beat`] when recorded.
///
/// Without an explicit run time the beat lasts as long as its longest item and shorter
/// items finish early. With one, every item is stretched to it. A play-level rate function
/// replaces the animations' own.
#[derive(Clone, Debug, Default)]
pub struct Play {
    items: Vec<PlayItem>,
    run_time: Option<f64>,
    rate: Option<RateFunc>,
}

fn check_secs(what: &str, secs: f64) -> StoryboardResult<f64> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(StoryboardError::validation(format!(
            "{what} must be a positive number of seconds, got {secs}"
        )));
    }
    Ok(secs)
}

impl Play {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, anim: Animation) -> Self {
        self.items.push(PlayItem::Single(anim));
        self
    }

    pub fn with_all(mut self, anims: impl IntoIterator<Item = Animation>) -> Self {
        self.items.extend(anims.into_iter().map(PlayItem::Single));
        self
    }

    /// Stagger `anims` so that each starts `lag_ratio` of the way through the previous one.
    pub fn lagged(mut self, anims: impl IntoIterator<Item = Animation>, lag_ratio: f64) -> Self {
        self.items.push(PlayItem::Lagged {
            anims: anims.into_iter().collect(),
            lag_ratio,
        });
        self
    }

    pub fn run_time(mut self, secs: f64) -> Self {
        self.run_time = Some(secs);
        self
    }

    pub fn rate(mut self, rate: RateFunc) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn item_run_time(item: &PlayItem) -> StoryboardResult<f64> {
        match item {
            PlayItem::Single(a) => check_secs(
                "animation run_time",
                a.run_time.unwrap_or(DEFAULT_RUN_TIME),
            ),
            PlayItem::Lagged { anims, lag_ratio } => {
                let mut sub = 0.0f64;
                for a in anims {
                    sub = sub.max(check_secs(
                        "animation run_time",
                        a.run_time.unwrap_or(DEFAULT_RUN_TIME),
                    )?);
                }
                Ok(sub * ((anims.len().saturating_sub(1)) as f64 * lag_ratio + 1.0))
            }
        }
    }

    /// Resolve windows and rates into a beat starting at `start`.
    pub(crate) fn assemble(self, start: f64) -> StoryboardResult<Beat> {
        if self.items.is_empty() {
            return Err(StoryboardError::timeline(
                "play needs at least one animation",
            ));
        }
        for item in &self.items {
            if let PlayItem::Lagged { anims, .. } = item
                && anims.is_empty()
            {
                return Err(StoryboardError::timeline(
                    "lagged group needs at least one animation",
                ));
            }
        }

        let fixed = self
            .run_time
            .map(|t| check_secs("play run_time", t))
            .transpose()?;

        let item_times = self
            .items
            .iter()
            .map(Self::item_run_time)
            .collect::<StoryboardResult<Vec<_>>>()?;
        let run_time = match fixed {
            Some(t) => t,
            None => item_times.iter().copied().fold(0.0, f64::max),
        };

        let play_rate = self.rate;
        let finish = |mut a: Animation, window: Window| -> Animation {
            a.rate = Some(play_rate.or(a.rate).unwrap_or_default());
            a.run_time = None;
            a.window = window;
            a
        };

        let mut animations = Vec::new();
        for (item, item_time) in self.items.into_iter().zip(item_times) {
            let outer = if fixed.is_some() {
                Window::FULL
            } else {
                Window {
                    start: 0.0,
                    end: (item_time / run_time).min(1.0),
                }
            };
            match item {
                PlayItem::Single(a) => animations.push(finish(a, outer)),
                PlayItem::Lagged { anims, lag_ratio } => {
                    let windows = lagged_windows(anims.len(), lag_ratio)?;
                    for (a, w) in anims.into_iter().zip(windows) {
                        animations.push(finish(a, outer.nest(w)));
                    }
                }
            }
        }

        Ok(Beat {
            start,
            run_time,
            animations,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/play.rs"]
mod tests;
