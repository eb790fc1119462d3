use super::*;

#[test]
fn viewport_rejects_zero_dimensions() {
    assert!(Viewport::new(0, 100).is_err());
    assert!(Viewport::new(100, 0).is_err());
    assert_eq!(
        Viewport::new(1200, 800).unwrap(),
        Viewport {
            width: 1200,
            height: 800
        }
    );
}

#[test]
fn canvas_rgba8_len_matches_dimensions() {
    let c = Canvas {
        width: 512,
        height: 896,
    };
    assert_eq!(c.rgba8_len(), 512 * 896 * 4);
}

#[test]
fn premul_straight_conversion_is_close() {
    let p = Rgba8Premul::from_straight_rgba(200, 100, 50, 128);
    let [r, g, b, a] = p.to_straight_rgba();
    assert_eq!(a, 128);
    assert!((i32::from(r) - 200).abs() <= 2);
    assert!((i32::from(g) - 100).abs() <= 2);
    assert!((i32::from(b) - 50).abs() <= 2);
    assert_eq!(Rgba8Premul::transparent().to_straight_rgba(), [0, 0, 0, 0]);
}
