use super::*;
use crate::{
    animation::verb::{fade_in, fade_out, grow_arrow, rotate},
    foundation::core::Point,
    scene::mobject::MobjectId,
};

fn id(n: u32) -> MobjectId {
    MobjectId(n)
}

#[test]
fn empty_play_is_rejected() {
    let err = Play::new().assemble(0.0).unwrap_err();
    assert!(matches!(err, StoryboardError::Timeline(_)));
}

#[test]
fn empty_lagged_group_is_rejected() {
    let err = Play::new()
        .lagged(Vec::new(), 0.1)
        .assemble(0.0)
        .unwrap_err();
    assert!(matches!(err, StoryboardError::Timeline(_)));
}

#[test]
fn default_run_time_is_one_second() {
    let beat = Play::new().with(fade_in(id(0))).assemble(2.0).unwrap();
    assert_eq!(beat.start, 2.0);
    assert_eq!(beat.run_time, 1.0);
    assert_eq!(beat.animations[0].window, Window::FULL);
    assert_eq!(beat.animations[0].rate, Some(RateFunc::Smooth));
}

#[test]
fn play_rate_overrides_the_linear_rotation_default() {
    let plain = Play::new()
        .with(rotate(id(0), 1.0, Point::ORIGIN))
        .assemble(0.0)
        .unwrap();
    assert_eq!(plain.animations[0].rate, Some(RateFunc::Linear));

    let eased = Play::new()
        .with(rotate(id(0), 1.0, Point::ORIGIN))
        .rate(RateFunc::Smooth)
        .assemble(0.0)
        .unwrap();
    assert_eq!(eased.animations[0].rate, Some(RateFunc::Smooth));
}

#[test]
fn own_run_time_sets_beat_length_when_alone() {
    let beat = Play::new()
        .with(fade_in(id(0)).run_time(0.12))
        .assemble(0.0)
        .unwrap();
    assert_eq!(beat.run_time, 0.12);
    assert_eq!(beat.animations[0].run_time, None);
}

#[test]
fn shorter_items_finish_early_without_override() {
    let beat = Play::new()
        .with(fade_in(id(0)).run_time(0.5))
        .with(fade_out(id(1)).run_time(2.0))
        .assemble(0.0)
        .unwrap();
    assert_eq!(beat.run_time, 2.0);
    assert_eq!(beat.animations[0].window.end, 0.25);
    assert_eq!(beat.animations[1].window, Window::FULL);
}

#[test]
fn play_run_time_stretches_every_item() {
    let beat = Play::new()
        .with(fade_in(id(0)).run_time(0.5))
        .with(grow_arrow(id(1)))
        .run_time(0.8)
        .assemble(0.0)
        .unwrap();
    assert_eq!(beat.run_time, 0.8);
    for a in &beat.animations {
        assert_eq!(a.window, Window::FULL);
    }
}

#[test]
fn play_rate_overrides_animation_rate() {
    let beat = Play::new()
        .with(fade_in(id(0)).rate(RateFunc::Linear))
        .with(fade_in(id(1)))
        .rate(RateFunc::ThereAndBack)
        .assemble(0.0)
        .unwrap();
    for a in &beat.animations {
        assert_eq!(a.rate, Some(RateFunc::ThereAndBack));
    }

    let beat = Play::new()
        .with(fade_in(id(0)).rate(RateFunc::RushFrom))
        .assemble(0.0)
        .unwrap();
    assert_eq!(beat.animations[0].rate, Some(RateFunc::RushFrom));
}

#[test]
fn lagged_items_get_staggered_windows() {
    let beat = Play::new()
        .lagged((0..5).map(|n| fade_in(id(n))), 0.12)
        .run_time(0.8)
        .assemble(0.0)
        .unwrap();
    assert_eq!(beat.animations.len(), 5);
    let starts: Vec<f64> = beat.animations.iter().map(|a| a.window.start).collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
    assert!((beat.animations[4].window.end - 1.0).abs() < 1e-12);
}

#[test]
fn lagged_group_length_grows_with_lag_when_unfixed() {
    let beat = Play::new()
        .lagged((0..3).map(|n| fade_in(id(n))), 0.5)
        .assemble(0.0)
        .unwrap();
    assert!((beat.run_time - 2.0).abs() < 1e-12);
}

#[test]
fn invalid_run_times_are_rejected() {
    assert!(
        Play::new()
            .with(fade_in(id(0)))
            .run_time(0.0)
            .assemble(0.0)
            .is_err()
    );
    assert!(
        Play::new()
            .with(fade_in(id(0)).run_time(f64::NAN))
            .assemble(0.0)
            .is_err()
    );
    assert!(
        Play::new()
            .lagged(vec![fade_in(id(0))], 2.0)
            .assemble(0.0)
            .is_err()
    );
}
