//! "Vectors: data to vector", the opening lecture animation: a small patient table whose
//! rows become arrows on an age/blood-pressure plane.
//!
//! Runs just under eighteen seconds so that, exported as a 60 fps frame sequence, it plays
//! back briskly inside slides.

use crate::{
    animation::{
        ease::RateFunc,
        verb::{
            create, create_lagged, fade_in, fade_in_scale, fade_in_shift, fade_out, grow_arrow,
        },
    },
    config::RenderConfig,
    foundation::color::Color,
    foundation::core::{
        DOWN, DR, LEFT, MED_LARGE_BUFF, MED_SMALL_BUFF, Point, RIGHT, UL, UP, Vec2,
    },
    foundation::error::{StoryboardError, StoryboardResult},
    plot::axes::{AxesSpec, AxisRange},
    scene::mobject::{MobjectId, Style},
    scene::play::Play,
    scene::recorder::{Scene, TextStyle},
    timeline::model::Timeline,
};

pub const NAME: &str = "data_to_vector";

pub const BG_COLOR: Color = Color::rgb(0x0B, 0x0B, 0x1A);
pub const VECTOR_A_COLOR: Color = Color::rgb(0x4F, 0xC3, 0xF7);
pub const VECTOR_B_COLOR: Color = Color::rgb(0xFF, 0x8A, 0x65);
pub const RESULTANT_COLOR: Color = Color::rgb(0x66, 0xBB, 0x6A);
pub const PROJECTION_COLOR: Color = Color::rgb(0xAB, 0x47, 0xBC);
pub const LABEL_COLOR: Color = Color::rgb(0xB0, 0xBE, 0xC5);
pub const ACCENT_COLOR: Color = Color::rgb(0xFF, 0xD5, 0x4F);
pub const GRID_COLOR: Color = Color::rgb(0x1A, 0x1A, 0x3A);
pub const GRID_COLOR_BRIGHT: Color = Color::rgb(0x25, 0x25, 0x50);
pub const TEXT_COLOR: Color = Color::rgb(0xEE, 0xEE, 0xFF);
pub const TABLE_HEADER_COLOR: Color = VECTOR_A_COLOR;
pub const TABLE_ROW_COLOR: Color = TEXT_COLOR;
pub const HIGHLIGHT_COLOR: Color = ACCENT_COLOR;

pub const TABLE_HEADER: &[&str] = &["Patient", "Age", "BP"];

/// Sample dataset: name, age in years, systolic blood pressure.
pub const PATIENT_ROWS: &[&[&str]] = &[
    &["Patient 1", "58", "122"],
    &["Patient 2", "71", "110"],
    &["Patient 3", "48", "110"],
    &["Patient 4", "34", "123"],
    &["Patient 5", "62", "152"],
];

/// How one patient's vector is drawn and paced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatientPlot {
    pub age: f64,
    pub bp: f64,
    pub color: Color,
    pub label_tex: &'static str,
    /// Side of the arrow tip the label sits on.
    pub label_dir: Vec2,
    pub font_size: f64,
    pub stroke_width: f64,
    pub run_time_arrow: f64,
    pub run_time_label: f64,
    pub wait_after: f64,
}

impl PatientPlot {
    const fn new(age: f64, bp: f64, color: Color, label_tex: &'static str, label_dir: Vec2) -> Self {
        Self {
            age,
            bp,
            color,
            label_tex,
            label_dir,
            font_size: 16.0,
            stroke_width: 3.0,
            run_time_arrow: 0.6,
            run_time_label: 0.3,
            wait_after: 0.2,
        }
    }

    const fn font_size(mut self, v: f64) -> Self {
        self.font_size = v;
        self
    }

    const fn stroke_width(mut self, v: f64) -> Self {
        self.stroke_width = v;
        self
    }

    const fn timing(mut self, arrow: f64, label: f64, wait_after: f64) -> Self {
        self.run_time_arrow = arrow;
        self.run_time_label = label;
        self.wait_after = wait_after;
        self
    }
}

pub const PATIENT_PLOTS: &[PatientPlot] = &[
    PatientPlot::new(
        58.0,
        122.0,
        VECTOR_A_COLOR,
        r"$\vec{p}_1 = \begin{bmatrix} 58 \\ 122 \end{bmatrix}$",
        UP,
    )
    .font_size(18.0)
    .stroke_width(3.5)
    .timing(0.7, 0.4, 0.3),
    PatientPlot::new(
        71.0,
        110.0,
        VECTOR_B_COLOR,
        r"$\vec{p}_2 = \begin{bmatrix} 71 \\ 110 \end{bmatrix}$",
        DR,
    )
    .timing(0.5, 0.3, 0.2),
    PatientPlot::new(
        48.0,
        110.0,
        RESULTANT_COLOR,
        r"$\vec{p}_3 = \begin{bmatrix} 48 \\ 110 \end{bmatrix}$",
        LEFT,
    )
    .timing(0.5, 0.3, 0.2),
    PatientPlot::new(
        34.0,
        123.0,
        PROJECTION_COLOR,
        r"$\begin{bmatrix} 34 \\ 123 \end{bmatrix}$",
        UL,
    )
    .font_size(14.0)
    .stroke_width(2.5)
    .timing(0.4, 0.3, 0.15),
    PatientPlot::new(
        62.0,
        152.0,
        LABEL_COLOR,
        r"$\begin{bmatrix} 62 \\ 152 \end{bmatrix}$",
        RIGHT,
    )
    .font_size(14.0)
    .stroke_width(2.5)
    .timing(0.4, 0.3, 0.15),
];

/// Columns of the patient table: name, age, blood pressure.
pub const COLUMNS: usize = 3;

/// The literal patient data: table header, table rows and the vectors plotted from them.
#[derive(Clone, Copy, Debug)]
pub struct PatientTable {
    pub header: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
    pub plots: &'static [PatientPlot],
}

pub const TABLE: PatientTable = PatientTable {
    header: TABLE_HEADER,
    rows: PATIENT_ROWS,
    plots: PATIENT_PLOTS,
};

impl PatientTable {
    /// Header and rows have three cells, numeric cells parse, and each plotted vector
    /// matches its table row.
    pub fn validate(&self) -> StoryboardResult<()> {
        if self.header.len() != COLUMNS {
            return Err(StoryboardError::validation(format!(
                "header has {} columns, expected {COLUMNS}",
                self.header.len()
            )));
        }
        if self.rows.len() != self.plots.len() {
            return Err(StoryboardError::validation(format!(
                "{} table rows but {} plotted patients",
                self.rows.len(),
                self.plots.len()
            )));
        }
        for (i, (row, plot)) in self.rows.iter().zip(self.plots).enumerate() {
            if row.len() != COLUMNS {
                return Err(StoryboardError::validation(format!(
                    "row {i} has {} cells, expected {COLUMNS}",
                    row.len()
                )));
            }
            let age = parse_cell(row[1], i, "age")?;
            let bp = parse_cell(row[2], i, "bp")?;
            if age != plot.age || bp != plot.bp {
                return Err(StoryboardError::validation(format!(
                    "row {i} ({age}, {bp}) does not match its plot ({}, {})",
                    plot.age, plot.bp
                )));
            }
        }
        Ok(())
    }
}

fn parse_cell(cell: &str, row: usize, what: &str) -> StoryboardResult<f64> {
    cell.trim().parse::<f64>().map_err(|_| {
        StoryboardError::validation(format!("row {row} {what} cell '{cell}' is not a number"))
    })
}

/// Faint background grid: vertical lines every `step` from `x_range.0`, horizontal ones
/// every `step` from `y_range.0`. Stops run while below `hi + step`, so an uneven range
/// gets one line past its upper end.
pub fn blueprint_grid(
    s: &mut Scene,
    x_range: (f64, f64),
    y_range: (f64, f64),
    step: f64,
) -> StoryboardResult<MobjectId> {
    if !step.is_finite() || step <= 0.0 {
        return Err(StoryboardError::validation(format!(
            "grid step must be > 0, got {step}"
        )));
    }
    let stops = |(lo, hi): (f64, f64)| {
        let n = ((hi + step - lo) / step - 1e-9).ceil().max(0.0) as usize;
        (0..n).map(move |i| lo + i as f64 * step)
    };
    let style = Style::stroked(GRID_COLOR, 0.5).stroke_opacity(0.4);

    let mut lines = Vec::new();
    for x in stops(x_range) {
        lines.push(s.line(
            "grid_v",
            Point::new(x, y_range.0),
            Point::new(x, y_range.1),
            style,
        ));
    }
    for y in stops(y_range) {
        lines.push(s.line(
            "grid_h",
            Point::new(x_range.0, y),
            Point::new(x_range.1, y),
            style,
        ));
    }
    s.group("blueprint_grid", &lines)
}

/// A dot over a three-times-wider translucent halo.
pub fn glowing_dot(
    s: &mut Scene,
    position: Point,
    color: Color,
    radius: f64,
) -> StoryboardResult<MobjectId> {
    let glow = s.dot_with_opacity("glow", position, radius * 3.0, color, 0.15);
    let dot = s.dot("glow_core", position, radius, color);
    s.group("glowing_dot", &[glow, dot])
}

struct Table {
    section_label: MobjectId,
    underline: MobjectId,
    header: MobjectId,
    separator: MobjectId,
    rows: Vec<MobjectId>,
    rows_group: MobjectId,
}

struct Extraction {
    highlight: MobjectId,
    glow: MobjectId,
    arrow: MobjectId,
    vector: MobjectId,
    callouts: [MobjectId; 4],
}

#[tracing::instrument(skip(config))]
pub fn build(config: &RenderConfig) -> StoryboardResult<Timeline> {
    TABLE.validate()?;
    let mut s = Scene::new(NAME, config.background_or(BG_COLOR), config.fps()?)
        .with_canvas(config.canvas());

    let grid = blueprint_grid(&mut s, (-8.0, 8.0), (-5.0, 5.0), 2.0)?;
    s.set_opacity(grid, 0.12)?;
    s.add(&[grid])?;

    title_card(&mut s)?;
    let table = patient_table(&mut s)?;
    let extraction = extract_first_row(&mut s, &table)?;
    shrink_table(&mut s, &table, &extraction)?;
    let axes = coordinate_plane(&mut s)?;
    let origin = s.c2p(axes, 0.0, 0.0)?;
    for plot in PATIENT_PLOTS {
        plot_patient(&mut s, axes, origin, plot)?;
    }
    s.wait(0.3)?;
    closing_banner(&mut s)?;

    s.finish()
}

fn title_card(s: &mut Scene) -> StoryboardResult<()> {
    let title = s.text(
        "title",
        "What is a Vector?",
        &TextStyle::new(48.0, TEXT_COLOR).bold(),
    );
    let subtitle = s.text(
        "subtitle",
        "A numerical representation of data",
        &TextStyle::new(24.0, LABEL_COLOR),
    );
    s.next_to(subtitle, title, DOWN, 0.4)?;

    let flank = Style::stroked(VECTOR_A_COLOR, 2.0).stroke_opacity(0.6);
    let left_edge = s.edge_point(title, LEFT)?;
    let right_edge = s.edge_point(title, RIGHT)?;
    let left_line = s.line(
        "title_left_line",
        left_edge + LEFT * 0.5,
        left_edge + LEFT * 2.5,
        flank,
    );
    let right_line = s.line(
        "title_right_line",
        right_edge + RIGHT * 0.5,
        right_edge + RIGHT * 2.5,
        flank,
    );

    let scan_line = s.line(
        "scan_line",
        Point::new(-8.0, 0.0),
        Point::new(8.0, 0.0),
        Style::stroked(VECTOR_A_COLOR, 1.5).stroke_opacity(0.3),
    );
    s.move_to(scan_line, Point::new(0.0, 4.0))?;
    let sweep = s.animate(scan_line, |s| s.move_to(scan_line, Point::new(0.0, -4.0)))?;

    s.play(
        Play::new()
            .with(sweep)
            .with(fade_in_shift(title, UP * 0.3))
            .with(create(left_line))
            .with(create(right_line))
            .run_time(0.8),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(subtitle, UP * 0.2))
            .run_time(0.4),
    )?;
    s.wait(0.8)?;
    s.play(
        Play::new()
            .with_all([title, subtitle, left_line, right_line, scan_line].map(fade_out))
            .run_time(0.5),
    )
}

fn patient_table(s: &mut Scene) -> StoryboardResult<Table> {
    let section_label = s.text(
        "section_label",
        "MEDICAL DATASET",
        &TextStyle::new(14.0, VECTOR_A_COLOR).bold(),
    );
    s.to_edge(section_label, UP, 0.35)?;
    s.shift(section_label, LEFT * 3.0)?;
    let underline = underline(s, "section_underline", section_label)?;

    s.play(
        Play::new()
            .with(fade_in_shift(section_label, DOWN * 0.1))
            .with(create(underline))
            .run_time(0.4),
    )?;

    let header_style = TextStyle::new(18.0, TABLE_HEADER_COLOR).bold();
    let header_cells = TABLE_HEADER
        .iter()
        .map(|h| s.text(&format!("header_{}", h.to_ascii_lowercase()), h, &header_style))
        .collect::<Vec<_>>();
    let header = s.group("header", &header_cells)?;
    s.arrange(header, RIGHT, 1.0)?;
    s.next_to(header, section_label, DOWN, MED_LARGE_BUFF)?;

    let sep_start = s.edge_point(header, LEFT)? + Vec2::new(-0.4, -0.18);
    let sep_end = s.edge_point(header, RIGHT)? + Vec2::new(0.4, -0.18);
    let separator = s.line(
        "header_separator",
        sep_start,
        sep_end,
        Style::stroked(VECTOR_A_COLOR, 1.0).stroke_opacity(0.4),
    );

    let cell_style = TextStyle::new(16.0, TABLE_ROW_COLOR);
    let mut rows = Vec::with_capacity(PATIENT_ROWS.len());
    for (i, row) in PATIENT_ROWS.iter().enumerate() {
        let cells = row
            .iter()
            .map(|c| s.text(&format!("row_{i}_cell"), c, &cell_style))
            .collect::<Vec<_>>();
        let group = s.group(&format!("row_{i}"), &cells)?;
        s.arrange(group, RIGHT, 1.0)?;
        // Each cell sits in its header's column.
        for (&cell, &head) in cells.iter().zip(&header_cells) {
            let x = s.center(head)?.x;
            let y = s.center(cell)?.y;
            s.move_to(cell, Point::new(x, y))?;
        }
        rows.push(group);
    }
    let rows_group = s.group("rows", &rows)?;
    s.arrange_aligned(rows_group, DOWN, 0.28, LEFT)?;
    s.next_to(rows_group, separator, DOWN, MED_SMALL_BUFF)?;

    s.play(
        Play::new()
            .with(fade_in_shift(header, DOWN * 0.15))
            .with(create(separator))
            .run_time(0.4),
    )?;
    s.play(
        Play::new()
            .lagged(rows.iter().map(|&r| fade_in_shift(r, DOWN * 0.1)), 0.12)
            .run_time(0.8),
    )?;
    s.wait(0.5)?;

    Ok(Table {
        section_label,
        underline,
        header,
        separator,
        rows,
        rows_group,
    })
}

fn underline(s: &mut Scene, label: &str, target: MobjectId) -> StoryboardResult<MobjectId> {
    let start = s.edge_point(target, LEFT)? + DOWN * 0.15;
    let end = s.edge_point(target, RIGHT)? + DOWN * 0.15;
    Ok(s.line(
        label,
        start,
        end,
        Style::stroked(VECTOR_A_COLOR, 1.5).stroke_opacity(0.5),
    ))
}

fn extract_first_row(s: &mut Scene, table: &Table) -> StoryboardResult<Extraction> {
    let first = table.rows[0];
    let highlight = s.surrounding_rectangle(
        "highlight",
        first,
        0.1,
        0.08,
        Style::stroked(HIGHLIGHT_COLOR, 2.5),
    )?;
    let glow = s.surrounding_rectangle(
        "highlight_glow",
        first,
        0.1,
        0.08,
        Style::filled(HIGHLIGHT_COLOR, 0.06),
    )?;
    s.play(
        Play::new()
            .with(create(highlight))
            .with(fade_in(glow))
            .run_time(0.4),
    )?;

    let dim = s.animate(highlight, |s| s.set_stroke_opacity(highlight, 0.3))?;
    let brighten = s.animate(glow, |s| s.set_opacity(glow, 0.12))?;
    s.play(
        Play::new()
            .with(dim)
            .with(brighten)
            .rate(RateFunc::ThereAndBack)
            .run_time(0.5),
    )?;
    s.wait(0.3)?;

    let arrow = s.math("extract_arrow", r"\Longrightarrow", 32.0, ACCENT_COLOR);
    s.next_to(arrow, first, RIGHT, 0.6)?;
    let vector = s.math(
        "column_vector",
        PATIENT_PLOTS[0].label_tex,
        34.0,
        ACCENT_COLOR,
    );
    s.next_to(vector, arrow, RIGHT, MED_LARGE_BUFF)?;

    let age_label = s.text("age_callout", "Age", &TextStyle::new(12.0, VECTOR_A_COLOR));
    let bp_label = s.text("bp_callout", "BP", &TextStyle::new(12.0, VECTOR_B_COLOR));
    s.next_to(age_label, vector, RIGHT, 0.3)?;
    s.shift(age_label, UP * 0.15)?;
    s.next_to(bp_label, vector, RIGHT, 0.3)?;
    s.shift(bp_label, DOWN * 0.15)?;

    let vector_right = s.edge_point(vector, RIGHT)?;
    let age_start = s.edge_point(age_label, LEFT)?;
    let bp_start = s.edge_point(bp_label, LEFT)?;
    let age_arrow = s.arrow(
        "age_pointer",
        age_start,
        vector_right + Vec2::new(0.02, 0.15),
        0.05,
        0.3,
        Style::stroked(VECTOR_A_COLOR, 1.5),
    );
    let bp_arrow = s.arrow(
        "bp_pointer",
        bp_start,
        vector_right + Vec2::new(0.02, -0.15),
        0.05,
        0.3,
        Style::stroked(VECTOR_B_COLOR, 1.5),
    );

    s.play(
        Play::new()
            .with(fade_in_shift(arrow, RIGHT * 0.2))
            .run_time(0.3),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(vector, RIGHT * 0.2))
            .run_time(0.5),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(age_label, LEFT * 0.1))
            .with(fade_in_shift(bp_label, LEFT * 0.1))
            .with(grow_arrow(age_arrow))
            .with(grow_arrow(bp_arrow))
            .run_time(0.4),
    )?;
    s.wait(0.5)?;

    Ok(Extraction {
        highlight,
        glow,
        arrow,
        vector,
        callouts: [age_label, bp_label, age_arrow, bp_arrow],
    })
}

fn shrink_table(s: &mut Scene, table: &Table, extraction: &Extraction) -> StoryboardResult<()> {
    let mut members = vec![
        table.section_label,
        table.underline,
        table.header,
        table.separator,
        table.rows_group,
        extraction.highlight,
        extraction.glow,
        extraction.arrow,
        extraction.vector,
    ];
    members.extend(extraction.callouts);
    let table_group = s.group("table_group", &members)?;

    let divider = s.line(
        "divider",
        Point::new(0.0, 3.5),
        Point::new(0.0, -3.5),
        Style::stroked(VECTOR_A_COLOR, 0.8).stroke_opacity(0.3),
    );
    s.move_to(divider, Point::new(-0.8, 0.0))?;

    let shrink = s.animate(table_group, |s| {
        s.scale(table_group, 0.62)?;
        s.to_edge(table_group, LEFT, 0.3)?;
        s.shift(table_group, DOWN * 0.1)
    })?;
    s.play(
        Play::new()
            .with(shrink)
            .with(fade_in(divider))
            .run_time(0.8),
    )
}

fn coordinate_plane(s: &mut Scene) -> StoryboardResult<MobjectId> {
    let plot_title = s.text(
        "plot_title",
        "VECTOR SPACE",
        &TextStyle::new(14.0, VECTOR_A_COLOR).bold(),
    );
    s.move_to(plot_title, Point::new(3.5, 3.2))?;
    let plot_underline = underline(s, "plot_underline", plot_title)?;

    let mut spec = AxesSpec::new(
        AxisRange::new(0.0, 80.0, 20.0),
        AxisRange::new(0.0, 170.0, 20.0),
        5.0,
        4.5,
    );
    spec.tick_size = 0.04;
    spec.include_numbers = true;
    spec.font_size = 14.0;
    let grid_segments = spec.grid_lines(&[20.0, 40.0, 60.0, 80.0], &[
        20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0,
    ]);

    let axes = s.axes("axes", spec, Style::stroked(LABEL_COLOR, 1.5))?;
    s.move_to(axes, Point::new(3.5, -0.1))?;

    let x_label = s.text("x_label", "Age", &TextStyle::new(16.0, LABEL_COLOR));
    s.next_to(x_label, axes, DOWN, MED_SMALL_BUFF)?;
    let y_label = s.text("y_label", "BP", &TextStyle::new(16.0, LABEL_COLOR));
    s.next_to(y_label, axes, LEFT, MED_SMALL_BUFF)?;

    let place = s.get(axes)?.transform;
    let grid_style = Style::stroked(GRID_COLOR_BRIGHT, 0.4).stroke_opacity(0.2);
    let grid_lines = grid_segments
        .into_iter()
        .map(|(a, b)| s.line("plot_grid_line", place * a, place * b, grid_style))
        .collect::<Vec<_>>();
    let plot_grid = s.group("plot_grid", &grid_lines)?;

    s.play(
        Play::new()
            .with(fade_in_shift(plot_title, DOWN * 0.1))
            .with(create(plot_underline))
            .with(fade_in(plot_grid))
            .with(create_lagged(axes, 0.02))
            .with(fade_in(x_label))
            .with(fade_in(y_label))
            .run_time(0.8),
    )?;
    s.wait(0.3)?;
    Ok(axes)
}

/// Grow the patient's arrow from the plot origin, then mark its tip and label it.
fn plot_patient(
    s: &mut Scene,
    axes: MobjectId,
    origin: Point,
    plot: &PatientPlot,
) -> StoryboardResult<()> {
    let tip = s.c2p(axes, plot.age, plot.bp)?;
    let arrow = s.arrow(
        "patient_arrow",
        origin,
        tip,
        0.0,
        0.1,
        Style::stroked(plot.color, plot.stroke_width),
    );
    let glow = glowing_dot(s, tip, plot.color, 0.07)?;
    let label = s.math("patient_label", plot.label_tex, plot.font_size, plot.color);
    s.next_to(label, tip, plot.label_dir, 0.15)?;

    s.play(
        Play::new()
            .with(grow_arrow(arrow))
            .run_time(plot.run_time_arrow),
    )?;
    s.play(
        Play::new()
            .with(fade_in_scale(glow, 2.0))
            .with(fade_in_shift(label, plot.label_dir * 0.1))
            .run_time(plot.run_time_label),
    )?;
    s.wait(plot.wait_after)
}

fn closing_banner(s: &mut Scene) -> StoryboardResult<()> {
    let dim_rect = s.rectangle("dim_rect", 14.0, 1.4, 0.0, Style::filled(BG_COLOR, 0.88));
    s.to_edge(dim_rect, DOWN, 0.0)?;

    let msg_main = s.text(
        "message",
        "Every data point is a vector",
        &TextStyle::new(30.0, ACCENT_COLOR).bold(),
    );
    let msg_sub = s.text(
        "message_detail",
        "Each row in your dataset maps to an arrow in vector space",
        &TextStyle::new(16.0, LABEL_COLOR),
    );
    let msg_group = s.group("message_group", &[msg_main, msg_sub])?;
    s.arrange(msg_group, DOWN, 0.15)?;
    s.to_edge(msg_group, DOWN, 0.3)?;

    s.play(
        Play::new()
            .with(fade_in(dim_rect))
            .with(fade_in_shift(msg_main, UP * 0.2))
            .run_time(0.5),
    )?;
    s.play(
        Play::new()
            .with(fade_in_shift(msg_sub, UP * 0.1))
            .run_time(0.3),
    )?;
    s.wait(1.5)?;

    let everything = s.on_stage().to_vec();
    s.play(
        Play::new()
            .with_all(everything.into_iter().map(fade_out))
            .run_time(0.8),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/storyboards/data_to_vector.rs"]
mod tests;
