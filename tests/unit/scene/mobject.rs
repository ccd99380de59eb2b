use super::*;

#[test]
fn circle_bounds_follow_transform() {
    let mut m = Mobject::new(
        "ring",
        MobjectKind::Circle { radius: 0.6 },
        Style::stroked(Color::WHITE, 5.0),
    );
    m.transform = Affine::translate(Vec2::new(1.0, -2.0)) * Affine::scale(2.0);
    let r = m.world_bounds().unwrap();
    assert!((r.width() - 2.4).abs() < 1e-12);
    assert_eq!(r.center(), Point::new(1.0, -2.0));
    assert!((m.transform.determinant() - 4.0).abs() < 1e-12);
}

#[test]
fn groups_have_no_local_bounds() {
    assert!(MobjectKind::Group.local_bounds().is_none());
    assert!(MobjectKind::Group.is_group());
}

#[test]
fn arrow_bounds_exclude_buff() {
    let kind = MobjectKind::Arrow {
        start: Point::new(0.0, 0.0),
        end: Point::new(2.0, 0.0),
        buff: 0.25,
        max_tip_ratio: 0.25,
    };
    let r = kind.local_bounds().unwrap();
    assert!((r.x0 - 0.25).abs() < 1e-12);
    assert!((r.x1 - 1.75).abs() < 1e-12);
}

#[test]
fn trimmed_segment_collapses_short_segments() {
    let (s, e) = trimmed_segment(Point::new(0.0, 0.0), Point::new(0.1, 0.0), 0.1);
    assert_eq!(s, e);
    assert_eq!(s, Point::new(0.05, 0.0));
}

#[test]
fn style_builders_compose() {
    let s = Style::filled(Color::rgb(0, 0, 0), 0.88).stroke_opacity(0.5);
    assert_eq!(s.stroke_width, 0.0);
    assert_eq!(s.fill_opacity, 0.88);
    assert_eq!(s.stroke_opacity, 0.5);
}

#[test]
fn kind_serializes_with_snake_case_tag() {
    let v = serde_json::to_value(MobjectKind::Dot { radius: 0.04 }).unwrap();
    assert_eq!(v, serde_json::json!({"dot": {"radius": 0.04}}));
}
