use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn ceil_absorbs_float_noise_from_summed_run_times() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(0.1 + 0.2), 18);
    assert_eq!(fps.secs_to_frames_ceil(0.301), 19);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
}

#[test]
fn range_for_covers_partial_frames() {
    let fps = Fps::new(10, 1).unwrap();
    let r = fps.range_for(0.25, 0.5);
    assert_eq!(r.start, FrameIndex(2));
    assert_eq!(r.end, FrameIndex(8));
    assert_eq!(r.len_frames(), 6);
    assert_eq!(fps.range_for(1.0, 0.0).len_frames(), 0);
}

#[test]
fn critical_point_reads_direction_signs() {
    let r = Rect::new(-1.0, -2.0, 3.0, 4.0);
    assert_eq!(critical_point(r, UL), Point::new(-1.0, 4.0));
    assert_eq!(critical_point(r, DOWN), Point::new(1.0, -2.0));
    assert_eq!(critical_point(r, RIGHT * 0.3), Point::new(3.0, 1.0));
    assert_eq!(critical_point(r, ORIGIN), r.center());
}

#[test]
fn frame_rect_is_sixteen_by_nine() {
    let f = frame_rect();
    assert!((f.width() / f.height() - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(f.center(), Point::ORIGIN);
}
