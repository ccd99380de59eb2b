use crate::{
    foundation::core::{Point, Rect},
    foundation::error::{StoryboardError, StoryboardResult},
    scene::text::UNITS_PER_POINT,
};

/// Data range of one axis: `[min, max]` with ticks every `step`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    fn validate(&self, axis: &str) -> StoryboardResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(StoryboardError::validation(format!(
                "{axis} range must be finite"
            )));
        }
        if self.max <= self.min {
            return Err(StoryboardError::validation(format!(
                "{axis} range must have max > min"
            )));
        }
        if self.step <= 0.0 {
            return Err(StoryboardError::validation(format!(
                "{axis} range step must be > 0"
            )));
        }
        Ok(())
    }

    /// Tick values from `min` every `step`, up to and including `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let n = ((self.span() / self.step) + 1e-9).floor() as usize;
        (0..=n).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// A pair of plotted axes.
///
/// The data box `[x.min, x.max] × [y.min, y.max]` maps linearly onto an
/// `x_length × y_length` rectangle centered on the local origin; the owning mobject's
/// transform places it in the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxesSpec {
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_length: f64,
    pub y_length: f64,
    pub tips: bool,
    pub tick_size: f64,
    pub include_numbers: bool,
    pub font_size: f64,
}

const TIP_LENGTH: f64 = 0.35;

impl AxesSpec {
    pub fn new(x_range: AxisRange, y_range: AxisRange, x_length: f64, y_length: f64) -> Self {
        Self {
            x_range,
            y_range,
            x_length,
            y_length,
            tips: true,
            tick_size: 0.1,
            include_numbers: false,
            font_size: 24.0,
        }
    }

    pub fn validate(&self) -> StoryboardResult<()> {
        self.x_range.validate("x")?;
        self.y_range.validate("y")?;
        if !(self.x_length > 0.0 && self.y_length > 0.0) {
            return Err(StoryboardError::validation(
                "axes lengths must be > 0",
            ));
        }
        Ok(())
    }

    /// Data coordinates to local point.
    pub fn c2p(&self, x: f64, y: f64) -> Point {
        let fx = (x - self.x_range.min) / self.x_range.span();
        let fy = (y - self.y_range.min) / self.y_range.span();
        Point::new(
            (fx - 0.5) * self.x_length,
            (fy - 0.5) * self.y_length,
        )
    }

    /// Local point to data coordinates.
    pub fn p2c(&self, p: Point) -> (f64, f64) {
        let fx = p.x / self.x_length + 0.5;
        let fy = p.y / self.y_length + 0.5;
        (
            self.x_range.min + fx * self.x_range.span(),
            self.y_range.min + fy * self.y_range.span(),
        )
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        self.x_range.ticks()
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        self.y_range.ticks()
    }

    /// Local segments of a background grid: verticals at `xs`, horizontals at `ys`,
    /// each spanning the full data box.
    pub fn grid_lines(&self, xs: &[f64], ys: &[f64]) -> Vec<(Point, Point)> {
        let (x0, x1) = (self.x_range.min, self.x_range.max);
        let (y0, y1) = (self.y_range.min, self.y_range.max);
        xs.iter()
            .map(|&x| (self.c2p(x, y0), self.c2p(x, y1)))
            .chain(ys.iter().map(|&y| (self.c2p(x0, y), self.c2p(x1, y))))
            .collect()
    }

    /// Rectangle covered by the data box in local space.
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            -self.x_length / 2.0,
            -self.y_length / 2.0,
            self.x_length / 2.0,
            self.y_length / 2.0,
        )
    }

    /// Local bounds including tips and number labels.
    pub fn local_bounds(&self) -> Rect {
        let mut r = self.plot_area();
        if self.tips {
            r.x1 += TIP_LENGTH;
            r.y1 += TIP_LENGTH;
        }
        if self.include_numbers {
            let em = self.font_size * UNITS_PER_POINT;
            let widest = self
                .y_ticks()
                .iter()
                .map(|v| format!("{v}").len())
                .max()
                .unwrap_or(1) as f64;
            r.x0 -= widest * 0.55 * em + self.tick_size + 0.1;
            r.y0 -= 0.75 * em + self.tick_size + 0.1;
        }
        r
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/axes.rs"]
mod tests;
