use super::*;

const MONOTONIC: [RateFunc; 10] = [
    RateFunc::Linear,
    RateFunc::Smooth,
    RateFunc::RushInto,
    RateFunc::RushFrom,
    RateFunc::InQuad,
    RateFunc::OutQuad,
    RateFunc::InOutQuad,
    RateFunc::InCubic,
    RateFunc::OutCubic,
    RateFunc::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for rate in MONOTONIC {
        assert!(rate.apply(0.0).abs() < 1e-12, "{rate:?}");
        assert!((rate.apply(1.0) - 1.0).abs() < 1e-12, "{rate:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for rate in MONOTONIC {
        let a = rate.apply(0.25);
        let b = rate.apply(0.5);
        let c = rate.apply(0.75);
        assert!(a < b, "{rate:?}");
        assert!(b < c, "{rate:?}");
    }
}

#[test]
fn smooth_is_symmetric_about_midpoint() {
    assert!((RateFunc::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
    let lo = RateFunc::Smooth.apply(0.2);
    let hi = RateFunc::Smooth.apply(0.8);
    assert!((lo + hi - 1.0).abs() < 1e-12);
}

#[test]
fn rush_from_front_loads_progress() {
    assert!(RateFunc::RushFrom.apply(0.25) > 0.25);
    assert!(RateFunc::RushInto.apply(0.25) < 0.25);
}

#[test]
fn there_and_back_peaks_at_midpoint() {
    let r = RateFunc::ThereAndBack;
    assert!(r.apply(0.0).abs() < 1e-12);
    assert!((r.apply(0.5) - 1.0).abs() < 1e-12);
    assert!(r.apply(1.0).abs() < 1e-12);
    assert!(r.is_round_trip());
    assert!(!RateFunc::Smooth.is_round_trip());
}

#[test]
fn inputs_are_clamped() {
    assert_eq!(RateFunc::Linear.apply(-3.0), 0.0);
    assert_eq!(RateFunc::Linear.apply(7.0), 1.0);
}

#[test]
fn serde_uses_snake_case_names() {
    let s = serde_json::to_string(&RateFunc::ThereAndBack).unwrap();
    assert_eq!(s, "\"there_and_back\"");
    let r: RateFunc = serde_json::from_str("\"rush_from\"").unwrap();
    assert_eq!(r, RateFunc::RushFrom);
}
