use super::*;

#[test]
fn zero_lag_runs_everything_together() {
    let ws = lagged_windows(4, 0.0).unwrap();
    assert_eq!(ws.len(), 4);
    for w in ws {
        assert_eq!(w, Window::FULL);
    }
}

#[test]
fn full_lag_runs_back_to_back() {
    let ws = lagged_windows(4, 1.0).unwrap();
    for (i, w) in ws.iter().enumerate() {
        assert!((w.start - i as f64 * 0.25).abs() < 1e-12);
        assert!((w.span() - 0.25).abs() < 1e-12);
    }
}

#[test]
fn last_window_ends_at_one() {
    for (n, r) in [(5, 0.12), (4, 0.15), (5, 0.1), (2, 0.5)] {
        let ws = lagged_windows(n, r).unwrap();
        let last = ws.last().unwrap();
        assert!((last.end - 1.0).abs() < 1e-12, "n={n} r={r}");
        assert_eq!(ws[0].start, 0.0);
        for w in &ws {
            w.validate().unwrap();
        }
    }
}

#[test]
fn starts_are_spaced_by_lag_times_duration() {
    let ws = lagged_windows(5, 0.12).unwrap();
    let d = ws[0].span();
    for pair in ws.windows(2) {
        assert!((pair[1].start - pair[0].start - 0.12 * d).abs() < 1e-12);
    }
}

#[test]
fn rejects_out_of_range_lag() {
    assert!(lagged_windows(3, -0.1).is_err());
    assert!(lagged_windows(3, 1.5).is_err());
    assert!(lagged_windows(3, f64::NAN).is_err());
    assert!(lagged_windows(0, 0.5).unwrap().is_empty());
}

#[test]
fn local_alpha_maps_into_window() {
    let w = Window::new(0.25, 0.75).unwrap();
    assert_eq!(w.local_alpha(0.0), 0.0);
    assert_eq!(w.local_alpha(0.5), 0.5);
    assert_eq!(w.local_alpha(1.0), 1.0);

    let instant = Window { start: 0.5, end: 0.5 };
    assert_eq!(instant.local_alpha(0.4), 0.0);
    assert_eq!(instant.local_alpha(0.5), 1.0);
}

#[test]
fn nest_composes_fractions() {
    let outer = Window::new(0.2, 0.6).unwrap();
    let inner = Window::new(0.5, 1.0).unwrap();
    let w = outer.nest(inner);
    assert!((w.start - 0.4).abs() < 1e-12);
    assert!((w.end - 0.6).abs() < 1e-12);
}

#[test]
fn new_rejects_inverted_bounds() {
    assert!(Window::new(0.6, 0.2).is_err());
    assert!(Window::new(-0.1, 0.2).is_err());
}
