use crate::foundation::error::{StoryboardError, StoryboardResult};

/// Slice of a beat, as fractions of the beat's run time, during which one animation runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> StoryboardResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    pub fn validate(&self) -> StoryboardResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(StoryboardError::validation("window bounds must be finite"));
        }
        if self.start < 0.0 || self.end > 1.0 + 1e-9 || self.start > self.end {
            return Err(StoryboardError::validation(format!(
                "window [{}, {}] must satisfy 0 <= start <= end <= 1",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Map beat progress in `[0,1]` to this window's own progress in `[0,1]`.
    pub fn local_alpha(&self, beat_alpha: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return if beat_alpha >= self.end { 1.0 } else { 0.0 };
        }
        ((beat_alpha - self.start) / span).clamp(0.0, 1.0)
    }

    /// Nest `inner` (relative to this window) into beat-relative fractions.
    pub fn nest(&self, inner: Window) -> Window {
        let span = self.span();
        Window {
            start: self.start + inner.start * span,
            end: self.start + inner.end * span,
        }
    }
}

/// Windows for `n` staggered animations where each starts `lag_ratio` of the way through
/// its predecessor.
///
/// With sub-duration `d`, animation `i` spans `[i*r*d, i*r*d + d]` and the last one ends at 1,
/// so `d = 1 / ((n - 1) * r + 1)`.
pub fn lagged_windows(n: usize, lag_ratio: f64) -> StoryboardResult<Vec<Window>> {
    if !lag_ratio.is_finite() || !(0.0..=1.0).contains(&lag_ratio) {
        return Err(StoryboardError::validation(format!(
            "lag_ratio must be within [0, 1], got {lag_ratio}"
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let d = 1.0 / ((n as f64 - 1.0) * lag_ratio + 1.0);
    Ok((0..n)
        .map(|i| {
            let start = i as f64 * lag_ratio * d;
            Window {
                start,
                end: (start + d).min(1.0),
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lag.rs"]
mod tests;
