//! The "status words" scene: the playful gerunds a coding assistant shows while it works,
//! flown out of a spinning logo into fixed zones around it.

use crate::{
    animation::{
        ease::RateFunc,
        verb::{
            create, draw_border_then_fill, fade_in, fade_in_scale, fade_in_shift, fade_out,
            fade_out_shift, rotate,
        },
    },
    config::RenderConfig,
    foundation::color::Color,
    foundation::core::{DOWN, LEFT, Point, RIGHT, SMALL_BUFF, TAU, UP, Vec2},
    foundation::error::{StoryboardError, StoryboardResult},
    foundation::math::approx_eq,
    scene::mobject::{MobjectId, Style},
    scene::play::Play,
    scene::recorder::{Scene, TextStyle},
    timeline::model::Timeline,
};

pub const NAME: &str = "status_words";

pub const BG_COLOR: Color = Color::rgb(0x0D, 0x11, 0x17);
pub const CLAUDE_ORANGE: Color = Color::rgb(0xE8, 0x80, 0x4C);
pub const CLAUDE_TAN: Color = Color::rgb(0xD4, 0xA5, 0x74);
pub const NEON_GREEN: Color = Color::rgb(0x39, 0xFF, 0x14);
pub const NEON_CYAN: Color = Color::rgb(0x00, 0xFF, 0xFF);
pub const NEON_PURPLE: Color = Color::rgb(0xBF, 0x40, 0xFF);
pub const NEON_PINK: Color = Color::rgb(0xFF, 0x6E, 0xC7);
pub const NEON_YELLOW: Color = Color::rgb(0xFF, 0xE6, 0x33);
pub const SOFT_WHITE: Color = Color::rgb(0xE6, 0xED, 0xF3);
pub const DIM_GRAY: Color = Color::rgb(0x48, 0x4F, 0x58);
pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);

pub const CAT_CODE: Color = NEON_CYAN;
pub const CAT_BUGS: Color = Color::rgb(0xFF, 0x6B, 0x6B);
pub const CAT_FILES: Color = NEON_GREEN;
pub const CAT_DESIGN: Color = NEON_PURPLE;
pub const CAT_BUILDS: Color = NEON_YELLOW;
pub const CAT_HELLO: Color = NEON_PINK;

const TERMINAL_FONT: &str = "Consolas";

/// A topic the assistant can be asked about, with the words it shows for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Category {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: Color,
    pub words: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        label: "code",
        icon: "</>",
        color: CAT_CODE,
        words: &["Crafting", "Forging", "Weaving"],
    },
    Category {
        label: "bugs",
        icon: "B",
        color: CAT_BUGS,
        words: &["Investigating", "Sleuthing", "Untangling"],
    },
    Category {
        label: "files",
        icon: "F",
        color: CAT_FILES,
        words: &["Rummaging", "Scouring", "Unearthing"],
    },
    Category {
        label: "design",
        icon: "D",
        color: CAT_DESIGN,
        words: &["Sketching", "Sculpting", "Painting"],
    },
    Category {
        label: "builds",
        icon: "B",
        color: CAT_BUILDS,
        words: &["Assembling", "Brewing", "Conjuring"],
    },
    Category {
        label: "hello",
        icon: "H",
        color: CAT_HELLO,
        words: &["Waving", "Beaming", "Greeting"],
    },
];

pub const BONUS_WORDS: &[&str] = &[
    "Illuminating",
    "Orchestrating",
    "Polishing",
    "Pondering",
    "Harmonizing",
];

/// Anchor of each category's words, top to bottom. Zones alternate left and right.
pub const WORD_POSITIONS: &[&[(f64, f64)]] = &[
    &[(-5.2, 2.8), (-5.2, 2.2), (-5.2, 1.6)],
    &[(3.8, 2.8), (3.8, 2.2), (3.8, 1.6)],
    &[(-5.2, 0.2), (-5.2, -0.4), (-5.2, -1.0)],
    &[(3.8, 0.2), (3.8, -0.4), (3.8, -1.0)],
    &[(-5.2, -2.0), (-5.2, -2.6), (-5.2, -3.2)],
    &[(3.8, -2.0), (3.8, -2.6), (3.8, -3.2)],
];

pub const BONUS_POSITIONS: &[(f64, f64)] = &[
    (-1.8, 3.2),
    (1.8, 3.2),
    (-1.8, -3.2),
    (1.8, -3.2),
    (0.0, -3.5),
];

/// Words per category.
pub const WORDS_PER_CATEGORY: usize = 3;

/// Horizontal offset from a zone anchor to the center of its word row.
const ROW_OFFSET_X: f64 = 0.8;

const BOOT_LINES: &[&str] = &[
    "> claude --version",
    "Claude Code v1.0.45",
    "> claude",
    "Initializing...",
];

/// Sparkle offsets from the title card center.
const SPARKLE_OFFSETS: [(f64, f64); 4] = [(-2.2, 2.2), (2.7, 2.2), (-2.5, -1.5), (1.8, -1.8)];

/// The hand-placed word layout.
#[derive(Clone, Copy, Debug)]
pub struct WordTable {
    pub categories: &'static [Category],
    pub positions: &'static [&'static [(f64, f64)]],
    pub bonus_words: &'static [&'static str],
    pub bonus_positions: &'static [(f64, f64)],
}

pub const TABLE: WordTable = WordTable {
    categories: CATEGORIES,
    positions: WORD_POSITIONS,
    bonus_words: BONUS_WORDS,
    bonus_positions: BONUS_POSITIONS,
};

impl WordTable {
    /// Every category has three words and three positions, every bonus word has a
    /// position, and no two anchors coincide.
    pub fn validate(&self) -> StoryboardResult<()> {
        if self.categories.len() != self.positions.len() {
            return Err(StoryboardError::validation(format!(
                "{} categories but {} position zones",
                self.categories.len(),
                self.positions.len()
            )));
        }
        for (cat, zone) in self.categories.iter().zip(self.positions) {
            if cat.words.len() != WORDS_PER_CATEGORY {
                return Err(StoryboardError::validation(format!(
                    "category '{}' has {} words, expected {WORDS_PER_CATEGORY}",
                    cat.label,
                    cat.words.len()
                )));
            }
            if zone.len() != cat.words.len() {
                return Err(StoryboardError::validation(format!(
                    "category '{}' has {} words but {} positions",
                    cat.label,
                    cat.words.len(),
                    zone.len()
                )));
            }
            if let Some(w) = cat.words.iter().find(|w| w.trim().is_empty()) {
                return Err(StoryboardError::validation(format!(
                    "category '{}' has a blank word {w:?}",
                    cat.label
                )));
            }
        }
        if self.bonus_words.len() != self.bonus_positions.len() {
            return Err(StoryboardError::validation(format!(
                "{} bonus words but {} bonus positions",
                self.bonus_words.len(),
                self.bonus_positions.len()
            )));
        }

        let anchors = self
            .positions
            .iter()
            .flat_map(|zone| zone.iter())
            .chain(self.bonus_positions)
            .collect::<Vec<_>>();
        for (i, a) in anchors.iter().enumerate() {
            for b in &anchors[i + 1..] {
                if approx_eq(a.0, b.0) && approx_eq(a.1, b.1) {
                    return Err(StoryboardError::validation(format!(
                        "two words share the position ({}, {})",
                        a.0, a.1
                    )));
                }
            }
        }
        Ok(())
    }
}

struct Logo {
    circle: MobjectId,
    letter: MobjectId,
    group: MobjectId,
    rings: [MobjectId; 2],
}

struct Parade {
    rows: Vec<MobjectId>,
    labels: Vec<MobjectId>,
}

struct Bonus {
    label: MobjectId,
    words: Vec<MobjectId>,
}

fn terminal(size: f64, color: Color) -> TextStyle {
    TextStyle::new(size, color).font(TERMINAL_FONT)
}

fn bold(size: f64, color: Color) -> TextStyle {
    TextStyle::new(size, color).bold()
}

#[tracing::instrument(skip(config))]
pub fn build(config: &RenderConfig) -> StoryboardResult<Timeline> {
    TABLE.validate()?;
    let mut s = Scene::new(NAME, config.background_or(BG_COLOR), config.fps()?)
        .with_canvas(config.canvas());

    boot_sequence(&mut s)?;
    title_card(&mut s)?;
    let logo = center_logo(&mut s)?;
    let parade = category_parade(&mut s, &logo)?;
    let bonus = bonus_words(&mut s)?;
    swirl(&mut s, &logo, &parade, &bonus)?;
    closing_card(&mut s, &logo, &parade, &bonus)?;

    s.finish()
}

fn boot_sequence(s: &mut Scene) -> StoryboardResult<()> {
    let cursor = s.text("cursor", "|", &TextStyle::new(36.0, NEON_GREEN));

    let mut y = 1.5;
    let mut shown = Vec::with_capacity(BOOT_LINES.len());
    for (i, line) in BOOT_LINES.iter().enumerate() {
        let color = if line.starts_with('>') {
            NEON_GREEN
        } else {
            DIM_GRAY
        };
        let t = s.text(&format!("boot_line_{i}"), line, &terminal(22.0, color));
        s.move_to(t, Point::new(0.0, y))?;
        s.align_to(t, Point::new(-4.5, 0.0), LEFT)?;
        shown.push(t);

        s.play(
            Play::new()
                .with(fade_in_shift(t, RIGHT * 0.3))
                .run_time(0.25),
        )?;
        if *line == "Initializing..." {
            s.next_to(cursor, t, RIGHT, SMALL_BUFF)?;
            for _ in 0..3 {
                s.play(Play::new().with(fade_in(cursor).run_time(0.12)))?;
                s.play(Play::new().with(fade_out(cursor).run_time(0.12)))?;
            }
        }
        y -= 0.55;
    }

    s.wait(0.2)?;
    s.play(
        Play::new()
            .with_all(shown.iter().map(|&t| fade_out_shift(t, UP * 0.5)))
            .run_time(0.4),
    )
}

fn title_card(s: &mut Scene) -> StoryboardResult<()> {
    let title = s.text(
        "title",
        "What does Claude Code say",
        &bold(44.0, SOFT_WHITE),
    );
    let title2 = s.text("title2", "while it's thinking?", &bold(44.0, CLAUDE_ORANGE));
    let title_group = s.group("title_group", &[title, title2])?;
    s.arrange(title_group, DOWN, 0.2)?;

    let center = s.center(title_group)?;
    let mut sparkles = Vec::with_capacity(SPARKLE_OFFSETS.len());
    for (i, (dx, dy)) in SPARKLE_OFFSETS.iter().enumerate() {
        let sp = s.text(&format!("sparkle_{i}"), "*", &TextStyle::new(18.0, GOLD));
        s.move_to(sp, center + Vec2::new(*dx, *dy))?;
        sparkles.push(sp);
    }
    let sparkle_group = s.group("sparkles", &sparkles)?;

    s.play(
        Play::new()
            .with(fade_in_shift(title, UP * 0.3))
            .with(fade_in_shift(title2, DOWN * 0.3))
            .lagged(sparkles.iter().map(|&sp| fade_in_scale(sp, 0.0)), 0.15)
            .run_time(0.8),
    )?;
    s.wait(0.8)?;
    s.play(
        Play::new()
            .with(fade_out_shift(title_group, UP))
            .with(fade_out(sparkle_group))
            .run_time(0.5),
    )
}

fn center_logo(s: &mut Scene) -> StoryboardResult<Logo> {
    let circle = s.circle(
        "logo_circle",
        0.6,
        Style::stroked(CLAUDE_ORANGE, 5.0).fill_opacity(0.1),
    );
    let letter = s.text("logo_letter", "C", &bold(40.0, CLAUDE_ORANGE));
    let caption = s.text("logo_caption", "claude", &terminal(14.0, DIM_GRAY));
    s.next_to(caption, circle, DOWN, 0.2)?;
    let group = s.group("logo", &[circle, letter, caption])?;

    let outer = s.circle(
        "orbit_outer",
        2.5,
        Style::stroked(DIM_GRAY, 0.6).stroke_opacity(0.2),
    );
    let inner = s.circle(
        "orbit_inner",
        1.5,
        Style::stroked(DIM_GRAY, 0.4).stroke_opacity(0.15),
    );

    s.play(
        Play::new()
            .with(draw_border_then_fill(circle))
            .with(fade_in_scale(letter, 0.5))
            .with(fade_in_shift(caption, UP * 0.1))
            .with(create(outer))
            .with(create(inner))
            .run_time(0.8),
    )?;

    let about = s.center(letter)?;
    s.play(
        Play::new()
            .with(rotate(letter, TAU, about))
            .run_time(1.2)
            .rate(RateFunc::Smooth),
    )?;

    Ok(Logo {
        circle,
        letter,
        group,
        rings: [outer, inner],
    })
}

fn category_parade(s: &mut Scene, logo: &Logo) -> StoryboardResult<Parade> {
    let mut rows = Vec::new();
    let mut labels = Vec::with_capacity(CATEGORIES.len());

    for (cat, zone) in CATEGORIES.iter().zip(WORD_POSITIONS) {
        let (x0, y0) = zone[0];
        let label = s.text(
            &format!("{}_label", cat.label),
            &format!("{} {}", cat.icon, cat.label),
            &bold(16.0, cat.color),
        );
        s.move_to(label, Point::new(x0 + ROW_OFFSET_X, y0 + 0.5))?;

        let start = s.edge_point(label, LEFT)? + Vec2::new(-0.1, -0.1);
        let end = s.edge_point(label, RIGHT)? + Vec2::new(0.1, -0.1);
        let underline = s.line(
            &format!("{}_underline", cat.label),
            start,
            end,
            Style::stroked(cat.color, 2.0).stroke_opacity(0.6),
        );

        let prompt = s.text(
            &format!("{}_prompt", cat.label),
            &format!("> ask about {}...", cat.label),
            &terminal(16.0, DIM_GRAY),
        );
        s.to_edge(prompt, DOWN, 0.4)?;

        s.play(
            Play::new()
                .with(fade_in_shift(label, DOWN * 0.15))
                .with(create(underline))
                .with(fade_in_shift(prompt, UP * 0.15))
                .run_time(0.3),
        )?;
        labels.push(s.group(&format!("{}_heading", cat.label), &[label, underline])?);

        for (word, &(tx, ty)) in cat.words.iter().zip(zone.iter()) {
            let row = word_row(s, word, cat.color, Point::new(tx + ROW_OFFSET_X, ty))?;

            let saved = s.save_state(row.group)?;
            s.move_to(row.group, Point::ORIGIN)?;
            s.scale(row.group, 0.1)?;
            s.set_opacity(row.group, 0.0)?;
            let fly_in = s.animate(row.group, |s| s.restore(&saved))?;
            let tint = s.animate(logo.circle, |s| s.set_stroke(logo.circle, cat.color, None))?;
            s.play(
                Play::new()
                    .with(fly_in)
                    .with(tint)
                    .run_time(0.35)
                    .rate(RateFunc::RushFrom),
            )?;

            let pulse = s.animate(row.word, |s| s.scale(row.word, 1.1))?;
            s.play(
                Play::new()
                    .with(pulse)
                    .run_time(0.1)
                    .rate(RateFunc::ThereAndBack),
            )?;
            rows.push(row.group);
        }

        s.wait(0.3)?;
        let reset = s.animate(logo.circle, |s| {
            s.set_stroke(logo.circle, CLAUDE_ORANGE, None)
        })?;
        s.play(Play::new().with(reset).run_time(0.15))?;
        s.play(Play::new().with(fade_out(prompt)).run_time(0.2))?;
    }

    Ok(Parade { rows, labels })
}

struct WordRow {
    group: MobjectId,
    word: MobjectId,
}

/// A bullet dot followed by the word, centered on `at`.
fn word_row(s: &mut Scene, word: &str, color: Color, at: Point) -> StoryboardResult<WordRow> {
    let key = word.to_ascii_lowercase();
    let dot = s.dot_with_opacity(&format!("{key}_dot"), Point::ORIGIN, 0.04, color, 0.8);
    let text = s.text(&format!("{key}_word"), word, &bold(20.0, color));
    let group = s.group(&format!("{key}_row"), &[dot, text])?;
    s.arrange(group, RIGHT, 0.12)?;
    s.move_to(group, at)?;
    Ok(WordRow { group, word: text })
}

fn bonus_words(s: &mut Scene) -> StoryboardResult<Bonus> {
    let label = s.text("bonus_label", "and many more...", &bold(18.0, GOLD));
    s.to_edge(label, UP, 0.3)?;
    s.play(
        Play::new()
            .with(fade_in_shift(label, DOWN * 0.15))
            .run_time(0.3),
    )?;

    let mut words = Vec::with_capacity(BONUS_WORDS.len());
    let mut fly_ins = Vec::with_capacity(BONUS_WORDS.len());
    for (word, &(bx, by)) in BONUS_WORDS.iter().zip(BONUS_POSITIONS) {
        let t = s.text(
            &format!("bonus_{}", word.to_ascii_lowercase()),
            word,
            &bold(16.0, CLAUDE_TAN),
        );
        s.move_to(t, Point::new(bx, by))?;
        let saved = s.save_state(t)?;
        s.move_to(t, Point::ORIGIN)?;
        s.scale(t, 0.1)?;
        s.set_opacity(t, 0.0)?;
        fly_ins.push(s.animate(t, |s| s.restore(&saved))?);
        words.push(t);
    }

    s.play(Play::new().lagged(fly_ins, 0.1).run_time(0.8))?;
    s.wait(0.5)?;
    Ok(Bonus { label, words })
}

fn swirl(s: &mut Scene, logo: &Logo, parade: &Parade, bonus: &Bonus) -> StoryboardResult<()> {
    let members = parade
        .rows
        .iter()
        .chain(&bonus.words)
        .copied()
        .collect::<Vec<_>>();
    let everything = s.group("all_words", &members)?;
    let grow = s.animate(logo.letter, |s| s.scale(logo.letter, 1.2))?;
    s.play(
        Play::new()
            .with(rotate(everything, std::f64::consts::PI / 6.0, Point::ORIGIN))
            .with(grow)
            .run_time(1.2)
            .rate(RateFunc::Smooth),
    )
}

fn closing_card(s: &mut Scene, logo: &Logo, parade: &Parade, bonus: &Bonus) -> StoryboardResult<()> {
    let leaving = parade
        .rows
        .iter()
        .chain(&bonus.words)
        .chain(&parade.labels)
        .copied()
        .chain([bonus.label, logo.rings[0], logo.rings[1]]);
    s.play(
        Play::new()
            .with_all(leaving.map(fade_out))
            .run_time(0.8),
    )?;

    let closing = s.text(
        "closing",
        "Every word is generated fresh",
        &bold(32.0, SOFT_WHITE),
    );
    let closing2 = s.text(
        "closing2",
        "-- no two sessions are alike --",
        &TextStyle::new(24.0, CLAUDE_ORANGE),
    );
    let closing_group = s.group("closing_group", &[closing, closing2])?;
    s.arrange(closing_group, DOWN, 0.15)?;
    s.next_to(closing_group, logo.group, DOWN, 0.6)?;

    let fun_fact = s.text(
        "fun_fact",
        "The words match what you ask about!",
        &terminal(16.0, DIM_GRAY),
    );
    s.next_to(fun_fact, closing_group, DOWN, 0.4)?;

    s.play(
        Play::new()
            .with(fade_in_shift(closing, UP * 0.2))
            .run_time(0.4),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(closing2, UP * 0.15))
            .run_time(0.3),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(fun_fact, UP * 0.15))
            .run_time(0.3),
    )?;

    let thicken = s.animate(logo.circle, |s| {
        s.set_stroke(logo.circle, CLAUDE_ORANGE, Some(8.0))
    })?;
    let grow = s.animate(logo.letter, |s| s.scale(logo.letter, 1.15))?;
    s.play(
        Play::new()
            .with(thicken)
            .with(grow)
            .run_time(0.25)
            .rate(RateFunc::ThereAndBack),
    )?;

    s.wait(2.0)?;

    let everything = s.on_stage().to_vec();
    s.play(
        Play::new()
            .with_all(everything.into_iter().map(fade_out))
            .run_time(0.8),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/storyboards/status_words.rs"]
mod tests;
