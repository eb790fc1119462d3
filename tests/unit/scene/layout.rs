use super::*;

#[test]
fn scale_tiers_are_half_open() {
    assert_eq!(scale_for_width(300), 0.42);
    assert_eq!(scale_for_width(379), 0.42);
    assert_eq!(scale_for_width(380), 0.52);
    assert_eq!(scale_for_width(480), 0.68);
    assert_eq!(scale_for_width(680), 0.82);
    assert_eq!(scale_for_width(899), 0.82);
    assert_eq!(scale_for_width(900), 1.0);
    assert_eq!(scale_for_width(1200), 1.0);
}

#[test]
fn camera_tiers() {
    assert_eq!(camera_distance_for_width(320), 11.0);
    assert_eq!(camera_distance_for_width(380), 9.5);
    assert_eq!(camera_distance_for_width(700), 8.5);
    assert_eq!(camera_distance_for_width(768), 7.5);
    assert_eq!(camera_distance_for_width(1920), 7.5);
}

#[test]
fn tracker_reports_only_width_changes() {
    let mut tracker = ResponsiveTracker::new();
    assert_eq!(tracker.current(), None);

    let first = tracker.update(1024).unwrap();
    assert_eq!(first.scale, 1.0);
    assert_eq!(first.camera_distance, 7.5);
    assert_eq!(tracker.update(1024), None);

    let narrow = tracker.update(400).unwrap();
    assert_eq!(narrow.scale, 0.52);
    assert_eq!(narrow.camera_distance, 9.5);
    assert_eq!(tracker.current(), Some(narrow));
    assert_eq!(tracker.update(400), None);
}
