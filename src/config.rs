use std::path::Path;

use crate::{
    foundation::color::Color,
    foundation::core::{Canvas, Fps},
    foundation::error::{StoryboardError, StoryboardResult},
};

/// Output quality preset: pixel size and frame rate a renderer should target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// 854×480 at 15 fps.
    Low,
    /// 1280×720 at 30 fps.
    Medium,
    /// 1920×1080 at 60 fps.
    #[default]
    High,
    /// 2560×1440 at 60 fps.
    Production,
    /// 3840×2160 at 60 fps.
    Fourk,
}

impl Quality {
    pub fn pixel_size(self) -> (u32, u32) {
        match self {
            Self::Low => (854, 480),
            Self::Medium => (1280, 720),
            Self::High => (1920, 1080),
            Self::Production => (2560, 1440),
            Self::Fourk => (3840, 2160),
        }
    }

    pub fn frame_rate(self) -> u32 {
        match self {
            Self::Low => 15,
            Self::Medium => 30,
            Self::High | Self::Production | Self::Fourk => 60,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Production => "production",
            Self::Fourk => "fourk",
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = StoryboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            "production" | "p" => Ok(Self::Production),
            "fourk" | "4k" | "k" => Ok(Self::Fourk),
            other => Err(StoryboardError::validation(format!(
                "unknown quality '{other}' (expected low, medium, high, production or fourk)"
            ))),
        }
    }
}

/// Settings applied when a storyboard is recorded.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub quality: Quality,
    /// Overrides the preset frame rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    /// Overrides the storyboard's own background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl RenderConfig {
    pub fn with_quality(quality: Quality) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }

    pub fn from_json(s: &str) -> StoryboardResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> StoryboardResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            StoryboardError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> StoryboardResult<()> {
        if self.fps == Some(0) {
            return Err(StoryboardError::validation("config fps must be > 0"));
        }
        Ok(())
    }

    pub fn fps(&self) -> StoryboardResult<Fps> {
        Fps::new(self.fps.unwrap_or_else(|| self.quality.frame_rate()), 1)
    }

    /// Pixel size of the quality preset.
    pub fn canvas(&self) -> Canvas {
        let (width, height) = self.quality.pixel_size();
        Canvas { width, height }
    }

    pub fn background_or(&self, fallback: Color) -> Color {
        self.background.unwrap_or(fallback)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
