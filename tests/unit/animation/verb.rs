use super::*;

#[test]
fn only_fade_out_removes() {
    let id = MobjectId(0);
    assert!(fade_out(id).verb.removes());
    for a in [
        fade_in(id),
        create(id),
        grow_arrow(id),
        draw_border_then_fill(id),
        rotate(id, 1.0, Point::ORIGIN),
    ] {
        assert!(a.verb.introduces(), "{}", a.verb.name());
    }
}

#[test]
fn defaults_are_full_window_and_smooth() {
    let a = fade_in(MobjectId(3));
    assert_eq!(a.window, Window::FULL);
    assert_eq!(a.run_time, None);
    assert_eq!(a.effective_rate(), RateFunc::Smooth);
    let a = a.rate(RateFunc::RushFrom).run_time(0.35);
    assert_eq!(a.effective_rate(), RateFunc::RushFrom);
    assert_eq!(a.run_time, Some(0.35));
}

#[test]
fn rotation_defaults_to_linear() {
    let spin = rotate(MobjectId(2), 1.0, Point::ORIGIN);
    assert_eq!(spin.effective_rate(), RateFunc::Linear);
    assert!((spin.effective_rate().apply(0.25) - 0.25).abs() < 1e-12);
}

#[test]
fn shift_constructors_carry_offsets() {
    let a = fade_in_shift(MobjectId(1), Vec2::new(0.0, 0.3));
    assert_eq!(
        a.verb,
        Verb::FadeIn {
            shift: Vec2::new(0.0, 0.3),
            scale: 1.0
        }
    );
    let a = fade_in_scale(MobjectId(1), 0.0);
    assert!(matches!(a.verb, Verb::FadeIn { scale, .. } if scale == 0.0));
}

#[test]
fn serialized_animation_omits_unset_overrides() {
    let v = serde_json::to_value(grow_arrow(MobjectId(7))).unwrap();
    assert_eq!(v["target"], serde_json::json!(7));
    assert_eq!(v["verb"], serde_json::json!("grow_arrow"));
    assert!(v.get("run_time").is_none());
    assert!(v.get("rate").is_none());
}
