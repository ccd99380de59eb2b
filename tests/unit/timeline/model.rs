use super::*;
use crate::{
    animation::{lag::Window, verb::fade_in},
    scene::mobject::{MobjectKind, Style},
};

fn record(id: u32) -> MobjectRecord {
    MobjectRecord {
        id: MobjectId(id),
        mobject: Mobject::new("dot", MobjectKind::Dot { radius: 0.1 }, Style::default()),
        introduced_at: Some(0.0),
    }
}

fn beat(start: f64, run_time: f64, target: u32) -> Cue {
    Cue::Play(Beat {
        start,
        run_time,
        animations: vec![fade_in(MobjectId(target))],
    })
}

fn basic() -> Timeline {
    Timeline {
        name: "basic".to_owned(),
        background: Color::rgb(0, 0, 0),
        canvas: Canvas::default(),
        fps: Fps::new(30, 1).unwrap(),
        mobjects: vec![record(0), record(1)],
        cues: vec![
            Cue::Add {
                at: 0.0,
                targets: vec![MobjectId(0)],
            },
            beat(0.0, 1.5, 1),
            Cue::Wait {
                start: 1.5,
                duration: 0.5,
            },
            beat(2.0, 0.25, 0),
        ],
    }
}

#[test]
fn duration_and_frames() {
    let tl = basic();
    tl.validate().unwrap();
    assert!((tl.duration() - 2.25).abs() < 1e-12);
    assert_eq!(tl.beat_count(), 2);
    assert_eq!(tl.frame_count(Fps::new(30, 1).unwrap()), 68);
    assert_eq!(tl.frame_count(Fps::new(60, 1).unwrap()), 135);
}

#[test]
fn empty_timeline_has_zero_duration() {
    let mut tl = basic();
    tl.cues.clear();
    tl.validate().unwrap();
    assert_eq!(tl.duration(), 0.0);
    assert_eq!(tl.frame_count(tl.fps), 0);
}

#[test]
fn gaps_between_cues_are_rejected() {
    let mut tl = basic();
    tl.cues[3] = beat(2.5, 0.25, 0);
    let err = tl.validate().unwrap_err();
    assert!(matches!(err, StoryboardError::Timeline(_)));
    assert!(err.to_string().contains("cue 3"));
}

#[test]
fn unknown_targets_are_rejected() {
    let mut tl = basic();
    tl.cues[1] = beat(0.0, 1.5, 9);
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.cues[0] = Cue::Add {
        at: 0.0,
        targets: vec![MobjectId(2)],
    };
    assert!(tl.validate().is_err());
}

#[test]
fn bad_run_times_and_waits_are_rejected() {
    let mut tl = basic();
    tl.cues[1] = beat(0.0, 0.0, 1);
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.cues[2] = Cue::Wait {
        start: 1.5,
        duration: f64::NAN,
    };
    assert!(tl.validate().is_err());
}

#[test]
fn out_of_range_windows_are_rejected() {
    let mut tl = basic();
    if let Cue::Play(b) = &mut tl.cues[1] {
        b.animations[0].window = Window {
            start: 0.5,
            end: 1.5,
        };
    }
    assert!(tl.validate().is_err());
}

#[test]
fn records_must_be_in_id_order_and_groups_younger_than_children() {
    let mut tl = basic();
    tl.mobjects.swap(0, 1);
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.mobjects[0].mobject.children = vec![MobjectId(1)];
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.mobjects[1].mobject.children = vec![MobjectId(0)];
    tl.validate().unwrap();
}

#[test]
fn empty_canvas_is_rejected() {
    let mut tl = basic();
    tl.canvas.height = 0;
    assert!(matches!(
        tl.validate().unwrap_err(),
        StoryboardError::Validation(_)
    ));
}

#[test]
fn blank_name_is_rejected() {
    let mut tl = basic();
    tl.name = "  ".to_owned();
    assert!(matches!(
        tl.validate().unwrap_err(),
        StoryboardError::Validation(_)
    ));
}

#[test]
fn json_round_trip_preserves_everything() {
    let tl = basic();
    let json = tl.to_json_pretty().unwrap();
    let back = Timeline::from_json(&json).unwrap();
    assert_eq!(back, tl);
}

#[test]
fn from_json_validates() {
    let mut tl = basic();
    tl.cues[3] = beat(9.0, 0.25, 0);
    let json = serde_json::to_string(&tl).unwrap();
    assert!(Timeline::from_json(&json).is_err());
    assert!(matches!(
        Timeline::from_json("{").unwrap_err(),
        StoryboardError::Serde(_)
    ));
}

#[test]
fn verb_names_are_deduplicated_in_order() {
    let b = Beat {
        start: 0.0,
        run_time: 1.0,
        animations: vec![
            fade_in(MobjectId(0)),
            crate::animation::verb::grow_arrow(MobjectId(1)),
            fade_in(MobjectId(1)),
        ],
    };
    assert_eq!(b.verb_names(), vec!["fade_in", "grow_arrow"]);
}
