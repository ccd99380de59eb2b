//! Text extent estimates.
//!
//! There is no font engine here: widths come from per-glyph advance classes scaled by the
//! font size. The numbers only need to be stable and roughly proportional so that
//! `next_to`/`arrange` spacing reads like the typeset result.

use crate::{foundation::core::Vec2, scene::mobject::Weight};

/// Scene units per typographic point (48pt text has a 0.5 unit em).
pub const UNITS_PER_POINT: f64 = 1.0 / 96.0;

const LINE_HEIGHT_EM: f64 = 0.75;
const MONO_ADVANCE_EM: f64 = 0.6;
const BOLD_WIDEN: f64 = 1.06;

fn is_monospace(font: Option<&str>) -> bool {
    font.is_some_and(|f| {
        let f = f.to_ascii_lowercase();
        ["consolas", "mono", "courier", "menlo"]
            .iter()
            .any(|m| f.contains(m))
    })
}

fn advance_em(c: char) -> f64 {
    match c {
        ' ' => 0.28,
        'i' | 'l' | 'j' | 'I' | '|' | '.' | ',' | ':' | ';' | '!' | '\'' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.85,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_digit() => 0.55,
        _ => 0.52,
    }
}

/// Estimated `(width, height)` of a single line of text.
pub fn estimate_text_extent(content: &str, font_size: f64, weight: Weight, font: Option<&str>) -> Vec2 {
    let em = font_size * UNITS_PER_POINT;
    let lines: Vec<&str> = content.split('\n').collect();

    let mono = is_monospace(font);
    let widest = lines
        .iter()
        .map(|line| {
            let ems: f64 = if mono {
                line.chars().count() as f64 * MONO_ADVANCE_EM
            } else {
                line.chars().map(advance_em).sum()
            };
            match weight {
                Weight::Bold => ems * BOLD_WIDEN,
                Weight::Normal => ems,
            }
        })
        .fold(0.0, f64::max);

    Vec2::new(
        widest * em,
        lines.len() as f64 * LINE_HEIGHT_EM * em,
    )
}

/// Visible glyph count of a TeX fragment: control words are dropped (arrow commands count
/// as two glyphs) as are grouping and script markers.
fn tex_glyphs(fragment: &str) -> usize {
    let mut n = 0usize;
    let mut chars = fragment.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut word = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphabetic() {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if word.to_ascii_lowercase().contains("arrow") {
                    n += 2;
                }
                if (word == "begin" || word == "end") && chars.peek() == Some(&'{') {
                    for skipped in chars.by_ref() {
                        if skipped == '}' {
                            break;
                        }
                    }
                }
            }
            '{' | '}' | '$' | '_' | '^' | '&' => {}
            c if c.is_whitespace() => {}
            _ => n += 1,
        }
    }
    n
}

/// Estimated `(width, height)` of typeset math. Rows are split on `\\`; matrices add a
/// bracket on each side.
pub fn estimate_math_extent(tex: &str, font_size: f64) -> Vec2 {
    let em = font_size * UNITS_PER_POINT;
    let rows: Vec<&str> = tex.split(r"\\").collect();
    let widest = rows.iter().map(|r| tex_glyphs(r)).max().unwrap_or(0);
    let brackets = if tex.contains("matrix") { 2 } else { 0 };

    Vec2::new(
        (widest + brackets).max(1) as f64 * 0.55 * em,
        rows.len() as f64 * 1.2 * em,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
