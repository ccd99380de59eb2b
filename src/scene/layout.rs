//! Placement arithmetic on scene objects.
//!
//! Every operation acts on the leaves of an object's family: groups have no geometry of
//! their own, so moving a group moves each member once.

use crate::{
    foundation::color::Color,
    foundation::core::{Affine, Point, Rect, Vec2, critical_point, frame_rect},
    foundation::error::{StoryboardError, StoryboardResult},
    scene::mobject::{LeafState, MobjectId, Snapshot},
    scene::recorder::Scene,
};

/// Something to place relative to: another object's bounds or a fixed point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Mobject(MobjectId),
    Point(Point),
}

impl From<MobjectId> for Anchor {
    fn from(id: MobjectId) -> Self {
        Self::Mobject(id)
    }
}

impl From<Point> for Anchor {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

/// Keep only the components of `v` along which `dir` is non-zero.
fn mask(v: Vec2, dir: Vec2) -> Vec2 {
    Vec2::new(
        if dir.x.abs() > 1e-12 { v.x } else { 0.0 },
        if dir.y.abs() > 1e-12 { v.y } else { 0.0 },
    )
}

impl Scene {
    /// World bounding box of `id`; for groups, the union over all members.
    pub fn bounds(&self, id: MobjectId) -> StoryboardResult<Rect> {
        let mut acc: Option<Rect> = None;
        for leaf in self.leaves(id)? {
            if let Some(r) = self.entry(leaf)?.world_bounds() {
                acc = Some(match acc {
                    Some(a) => a.union(r),
                    None => r,
                });
            }
        }
        acc.ok_or_else(|| StoryboardError::layout(format!("mobject {id} has no extent")))
    }

    pub fn center(&self, id: MobjectId) -> StoryboardResult<Point> {
        Ok(self.bounds(id)?.center())
    }

    /// Point on `id`'s bounding box in direction `dir` from its center.
    pub fn edge_point(&self, id: MobjectId, dir: Vec2) -> StoryboardResult<Point> {
        Ok(critical_point(self.bounds(id)?, dir))
    }

    fn anchor_point(&self, anchor: Anchor, dir: Vec2) -> StoryboardResult<Point> {
        match anchor {
            Anchor::Mobject(id) => self.edge_point(id, dir),
            Anchor::Point(p) => Ok(p),
        }
    }

    /// Compose `affine` onto every leaf of `id`.
    pub fn apply(&mut self, id: MobjectId, affine: Affine) -> StoryboardResult<()> {
        for leaf in self.leaves(id)? {
            let m = self.entry_mut(leaf)?;
            m.transform = affine * m.transform;
        }
        Ok(())
    }

    pub fn shift(&mut self, id: MobjectId, by: Vec2) -> StoryboardResult<()> {
        self.apply(id, Affine::translate(by))
    }

    /// Center `id` on a point or on another object's center.
    pub fn move_to(&mut self, id: MobjectId, to: impl Into<Anchor>) -> StoryboardResult<()> {
        let target = self.anchor_point(to.into(), Vec2::ZERO)?;
        let here = self.center(id)?;
        self.shift(id, target - here)
    }

    /// Scale about the object's own center.
    pub fn scale(&mut self, id: MobjectId, factor: f64) -> StoryboardResult<()> {
        let c = self.center(id)?;
        self.scale_about(id, factor, c)
    }

    pub fn scale_about(&mut self, id: MobjectId, factor: f64, about: Point) -> StoryboardResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(StoryboardError::layout(format!(
                "scale factor must be finite and > 0, got {factor}"
            )));
        }
        let v = about.to_vec2();
        self.apply(
            id,
            Affine::translate(v) * Affine::scale(factor) * Affine::translate(-v),
        )
    }

    /// Rotate counter-clockwise by `angle` radians about `about`.
    pub fn rotate_about(&mut self, id: MobjectId, angle: f64, about: Point) -> StoryboardResult<()> {
        let v = about.to_vec2();
        self.apply(
            id,
            Affine::translate(v) * Affine::rotate(angle) * Affine::translate(-v),
        )
    }

    /// Place `id` beside `target` in direction `dir`, `buff` apart, centers aligned.
    pub fn next_to(
        &mut self,
        id: MobjectId,
        target: impl Into<Anchor>,
        dir: Vec2,
        buff: f64,
    ) -> StoryboardResult<()> {
        self.next_to_aligned(id, target, dir, buff, Vec2::ZERO)
    }

    /// Like [`Scene::next_to`], lining up the `aligned_edge` side of both boxes.
    pub fn next_to_aligned(
        &mut self,
        id: MobjectId,
        target: impl Into<Anchor>,
        dir: Vec2,
        buff: f64,
        aligned_edge: Vec2,
    ) -> StoryboardResult<()> {
        let target_point = self.anchor_point(target.into(), aligned_edge + dir)?;
        let own_point = self.edge_point(id, aligned_edge - dir)?;
        self.shift(id, target_point + dir * buff - own_point)
    }

    /// Line up `id`'s `dir` side with the same side of `target`, moving only along `dir`.
    pub fn align_to(
        &mut self,
        id: MobjectId,
        target: impl Into<Anchor>,
        dir: Vec2,
    ) -> StoryboardResult<()> {
        let target_point = self.anchor_point(target.into(), dir)?;
        let own_point = self.edge_point(id, dir)?;
        self.shift(id, mask(target_point - own_point, dir))
    }

    /// Push `id` against the frame border in direction `dir`, `buff` inside it.
    pub fn to_edge(&mut self, id: MobjectId, dir: Vec2, buff: f64) -> StoryboardResult<()> {
        let border = critical_point(frame_rect(), dir);
        let own_point = self.edge_point(id, dir)?;
        self.shift(id, mask(border - dir * buff - own_point, dir))
    }

    /// Lay out a group's children one after another along `dir`, then re-center the group
    /// where it was.
    pub fn arrange(&mut self, group: MobjectId, dir: Vec2, buff: f64) -> StoryboardResult<()> {
        self.arrange_aligned(group, dir, buff, Vec2::ZERO)
    }

    pub fn arrange_aligned(
        &mut self,
        group: MobjectId,
        dir: Vec2,
        buff: f64,
        aligned_edge: Vec2,
    ) -> StoryboardResult<()> {
        let children = self.entry(group)?.children.clone();
        if children.is_empty() {
            return Err(StoryboardError::layout(format!(
                "cannot arrange empty group {group}"
            )));
        }
        let before = self.center(group)?;
        for pair in children.windows(2) {
            self.next_to_aligned(pair[1], pair[0], dir, buff, aligned_edge)?;
        }
        self.move_to(group, before)
    }

    /// Set stroke and fill opacity of every leaf.
    pub fn set_opacity(&mut self, id: MobjectId, opacity: f64) -> StoryboardResult<()> {
        for leaf in self.leaves(id)? {
            let s = &mut self.entry_mut(leaf)?.style;
            s.stroke_opacity = opacity;
            s.fill_opacity = opacity;
        }
        Ok(())
    }

    pub fn set_stroke_opacity(&mut self, id: MobjectId, opacity: f64) -> StoryboardResult<()> {
        for leaf in self.leaves(id)? {
            self.entry_mut(leaf)?.style.stroke_opacity = opacity;
        }
        Ok(())
    }

    /// Recolor strokes; `width` replaces the stroke width when given.
    pub fn set_stroke(
        &mut self,
        id: MobjectId,
        color: Color,
        width: Option<f64>,
    ) -> StoryboardResult<()> {
        for leaf in self.leaves(id)? {
            let s = &mut self.entry_mut(leaf)?.style;
            s.stroke = color;
            if let Some(w) = width {
                s.stroke_width = w;
            }
        }
        Ok(())
    }

    /// Capture placement and style of every leaf under `id`.
    pub fn save_state(&self, id: MobjectId) -> StoryboardResult<Snapshot> {
        let mut leaves = Vec::new();
        for leaf in self.leaves(id)? {
            let m = self.entry(leaf)?;
            leaves.push(LeafState {
                id: leaf,
                transform: m.transform,
                style: m.style,
            });
        }
        Ok(Snapshot { leaves })
    }

    pub fn restore(&mut self, snapshot: &Snapshot) -> StoryboardResult<()> {
        for leaf in &snapshot.leaves {
            let m = self.entry_mut(leaf.id)?;
            m.transform = leaf.transform;
            m.style = leaf.style;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
