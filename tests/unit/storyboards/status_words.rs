use super::*;
use crate::{
    config::Quality,
    scene::mobject::MobjectKind,
    timeline::{eval::visible_at, model::Cue},
};

#[test]
fn word_table_is_consistent() {
    TABLE.validate().unwrap();
    assert_eq!(CATEGORIES.len(), 6);
    for (cat, zone) in CATEGORIES.iter().zip(WORD_POSITIONS) {
        assert_eq!(cat.words.len(), 3, "{}", cat.label);
        assert_eq!(zone.len(), 3, "{}", cat.label);
    }
    assert_eq!(BONUS_WORDS.len(), BONUS_POSITIONS.len());
}

#[test]
fn missing_position_is_reported() {
    static SHORT: &[&[(f64, f64)]] = &[&[(0.0, 0.0), (0.0, 1.0)]];
    let table = WordTable {
        categories: &CATEGORIES[..1],
        positions: SHORT,
        bonus_words: &[],
        bonus_positions: &[],
    };
    let err = table.validate().unwrap_err();
    assert!(err.to_string().contains("'code' has 3 words but 2 positions"));
}

#[test]
fn bonus_word_without_position_is_reported() {
    let table = WordTable {
        bonus_positions: &BONUS_POSITIONS[..4],
        ..TABLE
    };
    assert!(matches!(
        table.validate().unwrap_err(),
        StoryboardError::Validation(_)
    ));
}

#[test]
fn overlapping_anchors_are_reported() {
    static CLASH: &[(f64, f64)] = &[(-5.2, 2.8)];
    let table = WordTable {
        bonus_words: &["Pondering"],
        bonus_positions: CLASH,
        ..TABLE
    };
    assert!(table.validate().unwrap_err().to_string().contains("share"));
}

#[test]
fn builds_the_full_sequence() {
    let tl = build(&RenderConfig::default()).unwrap();
    assert_eq!(tl.name, NAME);
    assert_eq!(tl.background, BG_COLOR);
    assert!((tl.duration() - 27.87).abs() < 1e-9);
    assert_eq!(tl.beat_count(), 78);
    assert_eq!(tl.frame_count(tl.fps), 1673);

    let Cue::Play(first) = &tl.cues[0] else {
        panic!("expected the boot line to open the scene");
    };
    assert_eq!(first.run_time, 0.25);
    assert_eq!(first.verb_names(), vec!["fade_in"]);

    assert!(visible_at(&tl, tl.duration()).is_empty());
}

#[test]
fn quality_only_changes_frame_rate() {
    let high = build(&RenderConfig::default()).unwrap();
    let low = build(&RenderConfig::with_quality(Quality::Low)).unwrap();
    assert_eq!(low.fps.num, 15);
    assert_eq!((low.canvas.width, low.canvas.height), (854, 480));
    assert_eq!((high.canvas.width, high.canvas.height), (1920, 1080));
    assert_eq!(low.cues, high.cues);
    assert_eq!(low.mobjects, high.mobjects);
}

#[test]
fn words_fly_in_from_the_logo() {
    let tl = build(&RenderConfig::default()).unwrap();
    let row = tl
        .mobjects
        .iter()
        .find(|r| r.mobject.label == "crafting_row")
        .unwrap();
    let word = tl
        .mobjects
        .iter()
        .find(|r| r.mobject.label == "crafting_word")
        .unwrap();
    assert!(row.mobject.kind.is_group());
    assert!(matches!(word.mobject.kind, MobjectKind::Text { .. }));
    // Recorded as it looked when the fly-in began: shrunk at the center, invisible.
    assert!((word.mobject.transform.determinant().sqrt() - 0.1).abs() < 1e-9);
    assert_eq!(word.mobject.style.fill_opacity, 0.0);
    assert!(word.introduced_at.is_some());
}

#[test]
fn every_word_appears_once() {
    let tl = build(&RenderConfig::default()).unwrap();
    for word in CATEGORIES.iter().flat_map(|c| c.words.iter()).chain(BONUS_WORDS) {
        let count = tl
            .mobjects
            .iter()
            .filter(|r| matches!(&r.mobject.kind, MobjectKind::Text { content, .. } if content == word))
            .count();
        assert_eq!(count, 1, "{word}");
    }
}
