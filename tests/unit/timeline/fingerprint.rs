use super::*;
use crate::{
    animation::verb::fade_in,
    foundation::{
        color::Color,
        core::{Fps, Point},
    },
    scene::{play::Play, recorder::Scene},
};

fn timeline(radius: f64) -> Timeline {
    let mut s = Scene::new("fp", Color::rgb(0, 0, 0), Fps::new(30, 1).unwrap());
    let d = s.dot("d", Point::ORIGIN, radius, Color::WHITE);
    s.play(Play::new().with(fade_in(d))).unwrap();
    s.finish().unwrap()
}

#[test]
fn fingerprint_is_deterministic() {
    let a = fingerprint(&timeline(0.1)).unwrap();
    let b = fingerprint(&timeline(0.1)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string().len(), 32);
}

#[test]
fn fingerprint_changes_with_content() {
    let a = fingerprint(&timeline(0.1)).unwrap();
    let b = fingerprint(&timeline(0.12)).unwrap();
    assert_ne!(a, b);

    let mut renamed = timeline(0.1);
    renamed.name = "other".to_owned();
    assert_ne!(a, fingerprint(&renamed).unwrap());
}

#[test]
fn lanes_differ() {
    let fp = fingerprint(&timeline(0.1)).unwrap();
    assert_ne!(fp.hi, fp.lo);
}
