use crate::{
    foundation::color::Color,
    foundation::core::{Affine, Point, Rect, Vec2},
    plot::axes::AxesSpec,
    scene::text::{estimate_math_extent, estimate_text_extent},
};

/// Index of an object in a scene's arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct MobjectId(pub u32);

impl MobjectId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MobjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// Geometry of a drawable, in its local coordinates.
///
/// Shapes are centered on the local origin; lines and arrows carry their endpoints as
/// authored. World placement is the owning [`Mobject`]'s `transform`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobjectKind {
    Circle {
        radius: f64,
    },
    Dot {
        radius: f64,
    },
    Line {
        start: Point,
        end: Point,
    },
    Arrow {
        start: Point,
        end: Point,
        /// Distance trimmed from both ends.
        buff: f64,
        max_tip_ratio: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Text {
        content: String,
        font_size: f64,
        weight: Weight,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font: Option<String>,
    },
    Math {
        tex: String,
        font_size: f64,
    },
    Axes(AxesSpec),
    Group,
}

impl MobjectKind {
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Dot { .. } => "dot",
            Self::Line { .. } => "line",
            Self::Arrow { .. } => "arrow",
            Self::Rectangle { .. } => "rectangle",
            Self::Text { .. } => "text",
            Self::Math { .. } => "math",
            Self::Axes(_) => "axes",
            Self::Group => "group",
        }
    }

    /// Local-space bounding box. Groups have none of their own.
    pub fn local_bounds(&self) -> Option<Rect> {
        match self {
            Self::Circle { radius } | Self::Dot { radius } => {
                Some(Rect::new(-radius, -radius, *radius, *radius))
            }
            Self::Line { start, end } => Some(Rect::from_points(*start, *end)),
            Self::Arrow {
                start, end, buff, ..
            } => {
                let (s, e) = trimmed_segment(*start, *end, *buff);
                Some(Rect::from_points(s, e))
            }
            Self::Rectangle { width, height, .. } => Some(Rect::new(
                -width / 2.0,
                -height / 2.0,
                width / 2.0,
                height / 2.0,
            )),
            Self::Text {
                content,
                font_size,
                weight,
                font,
            } => {
                let size = estimate_text_extent(content, *font_size, *weight, font.as_deref());
                Some(Rect::new(
                    -size.x / 2.0,
                    -size.y / 2.0,
                    size.x / 2.0,
                    size.y / 2.0,
                ))
            }
            Self::Math { tex, font_size } => {
                let size = estimate_math_extent(tex, *font_size);
                Some(Rect::new(
                    -size.x / 2.0,
                    -size.y / 2.0,
                    size.x / 2.0,
                    size.y / 2.0,
                ))
            }
            Self::Axes(spec) => Some(spec.local_bounds()),
            Self::Group => None,
        }
    }
}

/// Segment from `start` to `end` shortened by `buff` at both ends.
///
/// Segments shorter than `2 * buff` collapse to their midpoint.
pub fn trimmed_segment(start: Point, end: Point, buff: f64) -> (Point, Point) {
    let d = end - start;
    let len = d.hypot();
    if buff <= 0.0 || len == 0.0 {
        return (start, end);
    }
    if len <= 2.0 * buff {
        let mid = start.midpoint(end);
        return (mid, mid);
    }
    let u = d / len;
    (start + u * buff, end - u * buff)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill: Color,
    pub fill_opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::WHITE,
            stroke_width: 4.0,
            stroke_opacity: 1.0,
            fill: Color::WHITE,
            fill_opacity: 0.0,
        }
    }
}

impl Style {
    /// Stroked outline, unfilled.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: color,
            stroke_width: width,
            fill: color,
            ..Self::default()
        }
    }

    /// Solid fill without an outline.
    pub fn filled(color: Color, opacity: f64) -> Self {
        Self {
            stroke: color,
            stroke_width: 0.0,
            stroke_opacity: 1.0,
            fill: color,
            fill_opacity: opacity,
        }
    }

    pub fn stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = opacity;
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }
}

/// A drawable element in the scene arena.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mobject {
    pub label: String,
    pub kind: MobjectKind,
    pub style: Style,
    /// Local-to-world placement. Unused for groups, whose children carry their own.
    pub transform: Affine,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MobjectId>,
}

impl Mobject {
    pub fn new(label: impl Into<String>, kind: MobjectKind, style: Style) -> Self {
        Self {
            label: label.into(),
            kind,
            style,
            transform: Affine::IDENTITY,
            children: Vec::new(),
        }
    }

    /// World-space bounding box of a leaf.
    pub fn world_bounds(&self) -> Option<Rect> {
        self.kind
            .local_bounds()
            .map(|r| self.transform.transform_rect_bbox(r))
    }
}

/// Saved placement and style of one leaf.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeafState {
    pub id: MobjectId,
    pub transform: Affine,
    pub style: Style,
}

/// Placement and style of every leaf under one object.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub leaves: Vec<LeafState>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mobject.rs"]
mod tests;
