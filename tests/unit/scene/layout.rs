use super::*;
use crate::{
    foundation::core::{DOWN, FRAME_HEIGHT, FRAME_WIDTH, LEFT, RIGHT, UP, Fps},
    scene::mobject::Style,
};

fn scene() -> Scene {
    Scene::new("layout", Color::rgb(0, 0, 0), Fps::new(30, 1).unwrap())
}

fn square(s: &mut Scene, label: &str, side: f64) -> MobjectId {
    s.rectangle(label, side, side, 0.0, Style::default())
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn bounds_of_group_is_union() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    let b = square(&mut s, "b", 2.0);
    s.shift(b, Vec2::new(3.0, 0.0)).unwrap();
    let g = s.group("g", &[a, b]).unwrap();
    let r = s.bounds(g).unwrap();
    assert_eq!(r, Rect::new(-0.5, -1.0, 4.0, 1.0));
}

#[test]
fn empty_group_has_no_bounds() {
    let mut s = scene();
    let g = s.group("empty", &[]).unwrap();
    assert!(matches!(
        s.bounds(g).unwrap_err(),
        StoryboardError::Layout(_)
    ));
}

#[test]
fn move_to_point_and_object() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    let b = square(&mut s, "b", 1.0);
    s.move_to(a, Point::new(2.0, -1.0)).unwrap();
    s.move_to(b, a).unwrap();
    assert!(close(s.center(b).unwrap(), Point::new(2.0, -1.0)));
}

#[test]
fn scale_keeps_center() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    s.move_to(a, Point::new(1.0, 1.0)).unwrap();
    s.scale(a, 3.0).unwrap();
    let r = s.bounds(a).unwrap();
    assert!(close(r.center(), Point::new(1.0, 1.0)));
    assert!((r.width() - 3.0).abs() < 1e-12);
    assert!(s.scale(a, -1.0).is_err());
}

#[test]
fn next_to_places_with_buffer() {
    let mut s = scene();
    let a = square(&mut s, "a", 2.0);
    let b = square(&mut s, "b", 1.0);
    s.next_to(b, a, DOWN, 0.25).unwrap();
    let rb = s.bounds(b).unwrap();
    assert!((rb.y1 + 1.25).abs() < 1e-12);
    assert!(rb.center().x.abs() < 1e-12);

    s.next_to(b, Point::new(5.0, 0.0), RIGHT, 0.5).unwrap();
    let rb = s.bounds(b).unwrap();
    assert!((rb.x0 - 5.5).abs() < 1e-12);
}

#[test]
fn next_to_aligned_lines_up_edges() {
    let mut s = scene();
    let a = square(&mut s, "a", 2.0);
    let b = square(&mut s, "b", 1.0);
    s.next_to_aligned(b, a, DOWN, 0.1, LEFT).unwrap();
    let rb = s.bounds(b).unwrap();
    assert!((rb.x0 + 1.0).abs() < 1e-12);
    assert!((rb.y1 + 1.1).abs() < 1e-12);
}

#[test]
fn align_to_moves_along_one_axis() {
    let mut s = scene();
    let a = square(&mut s, "a", 2.0);
    let b = square(&mut s, "b", 1.0);
    s.shift(b, Vec2::new(4.0, 3.0)).unwrap();
    s.align_to(b, a, LEFT).unwrap();
    let rb = s.bounds(b).unwrap();
    assert!((rb.x0 + 1.0).abs() < 1e-12);
    assert!((rb.center().y - 3.0).abs() < 1e-12);
}

#[test]
fn to_edge_respects_frame_and_buffer() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    s.shift(a, Vec2::new(0.0, 1.0)).unwrap();
    s.to_edge(a, LEFT, 0.5).unwrap();
    let r = s.bounds(a).unwrap();
    assert!((r.x0 - (-FRAME_WIDTH / 2.0 + 0.5)).abs() < 1e-12);
    assert!((r.center().y - 1.0).abs() < 1e-12);

    s.to_edge(a, UP, 0.25).unwrap();
    let r = s.bounds(a).unwrap();
    assert!((r.y1 - (FRAME_HEIGHT / 2.0 - 0.25)).abs() < 1e-12);
}

#[test]
fn arrange_stacks_and_recenters() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    let b = square(&mut s, "b", 1.0);
    let c = square(&mut s, "c", 1.0);
    let g = s.group("g", &[a, b, c]).unwrap();
    s.arrange(g, DOWN, 0.5).unwrap();
    assert!(close(s.center(a).unwrap(), Point::new(0.0, 1.5)));
    assert!(close(s.center(b).unwrap(), Point::ORIGIN));
    assert!(close(s.center(c).unwrap(), Point::new(0.0, -1.5)));

    let empty = s.group("empty", &[]).unwrap();
    assert!(s.arrange(empty, DOWN, 0.5).is_err());
}

#[test]
fn rotate_about_point() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    s.move_to(a, Point::new(2.0, 0.0)).unwrap();
    s.rotate_about(a, std::f64::consts::FRAC_PI_2, Point::ORIGIN)
        .unwrap();
    assert!(close(s.center(a).unwrap(), Point::new(0.0, 2.0)));
}

#[test]
fn style_setters_touch_every_leaf() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    let b = square(&mut s, "b", 1.0);
    let g = s.group("g", &[a, b]).unwrap();
    let red = Color::rgb(0xFF, 0, 0);
    s.set_stroke(g, red, Some(2.0)).unwrap();
    s.set_opacity(g, 0.3).unwrap();
    for id in [a, b] {
        let st = s.get(id).unwrap().style;
        assert_eq!(st.stroke, red);
        assert_eq!(st.stroke_width, 2.0);
        assert_eq!(st.fill_opacity, 0.3);
        assert_eq!(st.stroke_opacity, 0.3);
    }
    s.set_stroke_opacity(a, 1.0).unwrap();
    let st = s.get(a).unwrap().style;
    assert_eq!(st.stroke_opacity, 1.0);
    assert_eq!(st.fill_opacity, 0.3);
}

#[test]
fn save_and_restore_state() {
    let mut s = scene();
    let a = square(&mut s, "a", 1.0);
    let b = square(&mut s, "b", 1.0);
    let g = s.group("g", &[a, b]).unwrap();
    let saved = s.save_state(g).unwrap();
    assert_eq!(saved.leaves.len(), 2);
    s.shift(g, Vec2::new(1.0, 1.0)).unwrap();
    s.set_opacity(g, 0.0).unwrap();
    s.restore(&saved).unwrap();
    assert_eq!(s.save_state(g).unwrap(), saved);
}
