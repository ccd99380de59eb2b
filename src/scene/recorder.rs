use crate::{
    animation::verb::{Animation, Verb},
    foundation::color::Color,
    foundation::core::{Affine, Canvas, Fps, Point},
    foundation::error::{StoryboardError, StoryboardResult},
    plot::axes::AxesSpec,
    scene::mobject::{Mobject, MobjectId, MobjectKind, Style, Weight},
    scene::play::Play,
    timeline::model::{Cue, MobjectRecord, Timeline},
};

/// Text appearance shared by the text constructors.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
    pub weight: Weight,
    pub font: Option<String>,
}

impl TextStyle {
    pub fn new(font_size: f64, color: Color) -> Self {
        Self {
            font_size,
            color,
            weight: Weight::Normal,
            font: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = Some(family.into());
        self
    }
}

#[derive(Clone, Debug)]
struct Entry {
    mobject: Mobject,
    /// Clock time and appearance when the object first went on stage.
    introduced: Option<(f64, Mobject)>,
}

/// Records a storyboard: owns the object arena and the running clock, and turns each
/// `play`/`wait` into a timeline cue.
#[derive(Clone, Debug)]
pub struct Scene {
    name: String,
    background: Color,
    canvas: Canvas,
    fps: Fps,
    arena: Vec<Entry>,
    stage: Vec<MobjectId>,
    cues: Vec<Cue>,
    clock: f64,
}

impl Scene {
    pub fn new(name: impl Into<String>, background: Color, fps: Fps) -> Self {
        Self {
            name: name.into(),
            background,
            canvas: Canvas::default(),
            fps,
            arena: Vec::new(),
            stage: Vec::new(),
            cues: Vec::new(),
            clock: 0.0,
        }
    }

    /// Target output size recorded on the timeline.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds recorded so far.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    // --- arena -------------------------------------------------------------------------

    pub(crate) fn entry(&self, id: MobjectId) -> StoryboardResult<&Mobject> {
        self.arena
            .get(id.index())
            .map(|e| &e.mobject)
            .ok_or_else(|| StoryboardError::layout(format!("unknown mobject {id}")))
    }

    pub(crate) fn entry_mut(&mut self, id: MobjectId) -> StoryboardResult<&mut Mobject> {
        self.arena
            .get_mut(id.index())
            .map(|e| &mut e.mobject)
            .ok_or_else(|| StoryboardError::layout(format!("unknown mobject {id}")))
    }

    pub fn get(&self, id: MobjectId) -> StoryboardResult<&Mobject> {
        self.entry(id)
    }

    fn push(&mut self, mobject: Mobject) -> MobjectId {
        let id = MobjectId(self.arena.len() as u32);
        self.arena.push(Entry {
            mobject,
            introduced: None,
        });
        id
    }

    /// `id` followed by all of its descendants, depth first.
    pub fn family(&self, id: MobjectId) -> StoryboardResult<Vec<MobjectId>> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let m = self.entry(cur)?;
            if !out.contains(&cur) {
                out.push(cur);
            }
            stack.extend(m.children.iter().rev().copied());
        }
        Ok(out)
    }

    /// Non-group members of `id`'s family.
    pub fn leaves(&self, id: MobjectId) -> StoryboardResult<Vec<MobjectId>> {
        let mut out = Vec::new();
        for m in self.family(id)? {
            if !self.entry(m)?.kind.is_group() {
                out.push(m);
            }
        }
        Ok(out)
    }

    // --- constructors ------------------------------------------------------------------

    pub fn circle(&mut self, label: &str, radius: f64, style: Style) -> MobjectId {
        self.push(Mobject::new(label, MobjectKind::Circle { radius }, style))
    }

    pub fn dot(&mut self, label: &str, center: Point, radius: f64, color: Color) -> MobjectId {
        self.dot_with_opacity(label, center, radius, color, 1.0)
    }

    pub fn dot_with_opacity(
        &mut self,
        label: &str,
        center: Point,
        radius: f64,
        color: Color,
        fill_opacity: f64,
    ) -> MobjectId {
        let mut m = Mobject::new(
            label,
            MobjectKind::Dot { radius },
            Style::filled(color, fill_opacity),
        );
        m.transform = Affine::translate(center.to_vec2());
        self.push(m)
    }

    pub fn line(&mut self, label: &str, start: Point, end: Point, style: Style) -> MobjectId {
        self.push(Mobject::new(label, MobjectKind::Line { start, end }, style))
    }

    pub fn arrow(
        &mut self,
        label: &str,
        start: Point,
        end: Point,
        buff: f64,
        max_tip_ratio: f64,
        style: Style,
    ) -> MobjectId {
        self.push(Mobject::new(
            label,
            MobjectKind::Arrow {
                start,
                end,
                buff,
                max_tip_ratio,
            },
            style,
        ))
    }

    pub fn rectangle(
        &mut self,
        label: &str,
        width: f64,
        height: f64,
        corner_radius: f64,
        style: Style,
    ) -> MobjectId {
        self.push(Mobject::new(
            label,
            MobjectKind::Rectangle {
                width,
                height,
                corner_radius,
            },
            style,
        ))
    }

    /// Rectangle around `target`'s current bounds, padded by `buff` on every side.
    pub fn surrounding_rectangle(
        &mut self,
        label: &str,
        target: MobjectId,
        buff: f64,
        corner_radius: f64,
        style: Style,
    ) -> StoryboardResult<MobjectId> {
        let r = self.bounds(target)?;
        let id = self.rectangle(
            label,
            r.width() + 2.0 * buff,
            r.height() + 2.0 * buff,
            corner_radius,
            style,
        );
        self.move_to(id, r.center())?;
        Ok(id)
    }

    pub fn text(&mut self, label: &str, content: &str, style: &TextStyle) -> MobjectId {
        self.push(Mobject::new(
            label,
            MobjectKind::Text {
                content: content.to_owned(),
                font_size: style.font_size,
                weight: style.weight,
                font: style.font.clone(),
            },
            Style::filled(style.color, 1.0),
        ))
    }

    pub fn math(&mut self, label: &str, tex: &str, font_size: f64, color: Color) -> MobjectId {
        self.push(Mobject::new(
            label,
            MobjectKind::Math {
                tex: tex.to_owned(),
                font_size,
            },
            Style::filled(color, 1.0),
        ))
    }

    pub fn axes(&mut self, label: &str, spec: AxesSpec, style: Style) -> StoryboardResult<MobjectId> {
        spec.validate()?;
        Ok(self.push(Mobject::new(label, MobjectKind::Axes(spec), style)))
    }

    /// Group existing objects. Children keep their placement; the group has none of its own.
    pub fn group(&mut self, label: &str, children: &[MobjectId]) -> StoryboardResult<MobjectId> {
        for &c in children {
            self.entry(c)?;
        }
        let mut m = Mobject::new(label, MobjectKind::Group, Style::default());
        m.children = children.to_vec();
        Ok(self.push(m))
    }

    /// Scene position of data coordinates on plotted axes.
    pub fn c2p(&self, axes: MobjectId, x: f64, y: f64) -> StoryboardResult<Point> {
        let m = self.entry(axes)?;
        let MobjectKind::Axes(spec) = &m.kind else {
            return Err(StoryboardError::layout(format!(
                "mobject {axes} ('{}') is not an axes",
                m.label
            )));
        };
        Ok(m.transform * spec.c2p(x, y))
    }

    /// Data coordinates of a scene position on plotted axes.
    pub fn p2c(&self, axes: MobjectId, p: Point) -> StoryboardResult<(f64, f64)> {
        let m = self.entry(axes)?;
        let MobjectKind::Axes(spec) = &m.kind else {
            return Err(StoryboardError::layout(format!(
                "mobject {axes} ('{}') is not an axes",
                m.label
            )));
        };
        Ok(spec.p2c(m.transform.inverse() * p))
    }

    // --- stage -------------------------------------------------------------------------

    /// Top-level objects currently on stage, in the order they arrived.
    pub fn on_stage(&self) -> &[MobjectId] {
        &self.stage
    }

    fn is_staged(&self, id: MobjectId) -> StoryboardResult<bool> {
        for &s in &self.stage {
            if self.family(s)?.contains(&id) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn note_introduced(&mut self, id: MobjectId) -> StoryboardResult<()> {
        let clock = self.clock;
        for m in self.family(id)? {
            let e = &mut self.arena[m.index()];
            if e.introduced.is_none() {
                e.introduced = Some((clock, e.mobject.clone()));
            }
        }
        Ok(())
    }

    /// Put `id` on top of the stage, moving it there if it was already present.
    fn stage_top(&mut self, id: MobjectId) -> StoryboardResult<()> {
        self.stage.retain(|&s| s != id);
        self.stage.push(id);
        self.note_introduced(id)
    }

    /// Stage `id` for an animation unless it is already visible through some staged family.
    fn stage_for_play(&mut self, id: MobjectId) -> StoryboardResult<()> {
        if self.is_staged(id)? {
            return Ok(());
        }
        self.stage_top(id)
    }

    /// Take `id` and its descendants off stage. Staged groups that contain `id` are split
    /// into their remaining members.
    fn unstage(&mut self, id: MobjectId) -> StoryboardResult<()> {
        let removed = self.family(id)?;
        let mut next = Vec::with_capacity(self.stage.len());
        for &s in &self.stage {
            if removed.contains(&s) {
                continue;
            }
            if self.family(s)?.contains(&id) {
                self.split_into(s, &removed, &mut next)?;
            } else if !next.contains(&s) {
                next.push(s);
            }
        }
        self.stage = next;
        Ok(())
    }

    fn split_into(
        &self,
        group: MobjectId,
        removed: &[MobjectId],
        out: &mut Vec<MobjectId>,
    ) -> StoryboardResult<()> {
        for &c in &self.entry(group)?.children {
            if removed.contains(&c) {
                continue;
            }
            if self.family(c)?.iter().any(|m| removed.contains(m)) {
                self.split_into(c, removed, out)?;
            } else if !out.contains(&c) {
                out.push(c);
            }
        }
        Ok(())
    }

    // --- recording ---------------------------------------------------------------------

    /// Place objects on stage without animation.
    pub fn add(&mut self, ids: &[MobjectId]) -> StoryboardResult<()> {
        for &id in ids {
            self.stage_top(id)?;
        }
        self.cues.push(Cue::Add {
            at: self.clock,
            targets: ids.to_vec(),
        });
        Ok(())
    }

    /// Record the effect of `change` on `id` as a transform animation.
    ///
    /// The change is applied to the scene immediately, so later layout sees the end state.
    pub fn animate(
        &mut self,
        id: MobjectId,
        change: impl FnOnce(&mut Self) -> StoryboardResult<()>,
    ) -> StoryboardResult<Animation> {
        let from = self.save_state(id)?;
        change(self)?;
        let to = self.save_state(id)?;
        Ok(Animation::new(id, Verb::Transform { from, to }))
    }

    #[tracing::instrument(level = "trace", skip(self, play), fields(scene = %self.name, at = self.clock))]
    pub fn play(&mut self, play: Play) -> StoryboardResult<()> {
        let beat = play.assemble(self.clock)?;
        for a in &beat.animations {
            self.entry(a.target)?;
        }

        for a in &beat.animations {
            if !a.verb.introduces() {
                continue;
            }
            // Objects transformed into view are recorded as they looked when the beat began.
            if let Verb::Transform { from, to } = &a.verb {
                self.restore(from)?;
                self.stage_for_play(a.target)?;
                self.restore(to)?;
            } else {
                self.stage_for_play(a.target)?;
            }
        }

        for a in &beat.animations {
            let round_trip = a.effective_rate().is_round_trip();
            match &a.verb {
                Verb::Rotate { angle, about } if !round_trip => {
                    self.rotate_about(a.target, *angle, *about)?;
                }
                Verb::Transform { from, .. } if round_trip => {
                    self.restore(from)?;
                }
                _ => {}
            }
        }

        for a in &beat.animations {
            if a.verb.removes() {
                self.unstage(a.target)?;
            }
        }

        tracing::debug!(
            scene = %self.name,
            start = beat.start,
            run_time = beat.run_time,
            animations = beat.animations.len(),
            "recorded beat"
        );
        self.clock = beat.start + beat.run_time;
        self.cues.push(Cue::Play(beat));
        Ok(())
    }

    pub fn wait(&mut self, secs: f64) -> StoryboardResult<()> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(StoryboardError::timeline(format!(
                "wait duration must be finite and >= 0, got {secs}"
            )));
        }
        let start = self.clock;
        self.cues.push(Cue::Wait {
            start,
            duration: secs,
        });
        self.clock = start + secs;
        Ok(())
    }

    /// Close the recording and produce a validated timeline.
    #[tracing::instrument(skip(self), fields(scene = %self.name))]
    pub fn finish(self) -> StoryboardResult<Timeline> {
        let mobjects = self
            .arena
            .into_iter()
            .enumerate()
            .map(|(idx, e)| {
                let (introduced_at, mobject) = match e.introduced {
                    Some((at, snapshot)) => (Some(at), snapshot),
                    None => (None, e.mobject),
                };
                MobjectRecord {
                    id: MobjectId(idx as u32),
                    mobject,
                    introduced_at,
                }
            })
            .collect();

        let timeline = Timeline {
            name: self.name,
            background: self.background,
            canvas: self.canvas,
            fps: self.fps,
            mobjects,
            cues: self.cues,
        };
        timeline.validate()?;
        tracing::info!(
            duration_s = timeline.duration(),
            beats = timeline.beat_count(),
            mobjects = timeline.mobjects.len(),
            "scene recorded"
        );
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/recorder.rs"]
mod tests;
