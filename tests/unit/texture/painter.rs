use super::*;

fn painter(w: u32, h: u32) -> Painter {
    Painter::with_fonts(w, h, Arc::new(usvg::fontdb::Database::new())).unwrap()
}

fn pixel(t: &Texture, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * t.width + x) * 4) as usize;
    [t.data[i], t.data[i + 1], t.data[i + 2], t.data[i + 3]]
}

#[test]
fn rejects_degenerate_and_oversized_canvases() {
    let fonts = Arc::new(usvg::fontdb::Database::new());
    assert!(matches!(
        Painter::with_fonts(0, 10, fonts.clone()),
        Err(TarotError::Render(_))
    ));
    assert!(matches!(
        Painter::with_fonts(70_000, 10, fonts),
        Err(TarotError::Render(_))
    ));
}

#[test]
fn solid_fill_respects_transform_and_alpha() {
    let mut p = painter(16, 16);
    p.save();
    p.translate(8.0, 0.0);
    p.fill(&Rect::new(0.0, 0.0, 8.0, 8.0), Color::rgb8(255, 0, 0));
    p.restore();
    p.set_alpha(0.5);
    p.fill(&Rect::new(0.0, 8.0, 8.0, 16.0), Color::rgb8(0, 0, 255));
    let t = p.finish().unwrap();

    assert_eq!(pixel(&t, 12, 4), [255, 0, 0, 255]);
    assert_eq!(pixel(&t, 4, 4), [0, 0, 0, 0]);
    let blue = pixel(&t, 4, 12);
    assert!((126..=129).contains(&blue[3]), "{blue:?}");
    assert_eq!(blue[2], blue[3]);
}

#[test]
fn save_restore_is_balanced_and_tolerates_underflow() {
    let mut p = painter(4, 4);
    p.set_alpha(0.3);
    p.scoped(|p| {
        p.rotate(1.0);
        p.set_alpha(0.9);
    });
    assert_eq!(p.alpha(), 0.3);
    assert_eq!(p.transform(), Affine::IDENTITY);
    p.restore();
    p.restore();
    assert_eq!(p.alpha(), 0.3);
}

#[test]
fn linear_gradient_interpolates_between_stops() {
    let g = Gradient::linear(Point::new(0.0, 0.0), Point::new(0.0, 100.0))
        .stop(1.0, Color::rgb8(0, 0, 0))
        .stop(0.0, Color::rgb8(200, 100, 0));
    let mid = g.sample(Point::new(30.0, 50.0)).to_rgba8();
    assert_eq!(mid, [100, 50, 0, 255]);
    assert_eq!(g.sample(Point::new(0.0, -10.0)).to_rgba8(), [200, 100, 0, 255]);
    assert_eq!(g.sample(Point::new(0.0, 500.0)).to_rgba8(), [0, 0, 0, 255]);
}

#[test]
fn radial_gradient_follows_distance_for_concentric_circles() {
    let c = Point::new(50.0, 50.0);
    let g = Gradient::radial(c, 0.0, c, 100.0)
        .stop(0.0, Color::rgb8(255, 255, 255))
        .stop(1.0, Color::rgb8(0, 0, 0));
    assert_eq!(g.sample(c).to_rgba8(), [255, 255, 255, 255]);
    let quarter = g.sample(Point::new(75.0, 50.0)).to_rgba8();
    assert_eq!(quarter[0], 191);
    assert_eq!(g.sample(Point::new(50.0, 250.0)).to_rgba8(), [0, 0, 0, 255]);
}

#[test]
fn gradient_fill_paints_the_shape() {
    let mut p = painter(8, 8);
    let g = Gradient::linear(Point::new(0.0, 0.0), Point::new(8.0, 0.0))
        .stop(0.0, Color::rgb8(0, 255, 0))
        .stop(1.0, Color::rgb8(0, 255, 0));
    p.fill_gradient(&Rect::new(0.0, 0.0, 8.0, 8.0), &g).unwrap();
    let t = p.finish().unwrap();
    assert_eq!(pixel(&t, 3, 5), [0, 255, 0, 255]);
}

#[test]
fn arc_sweeps_clockwise_from_start_to_end() {
    let upper = arc(Point::new(0.0, 0.0), 10.0, std::f64::consts::PI, 0.0);
    let bbox = upper.bounding_box();
    assert!(bbox.y1 <= 1e-6, "upper half only, got {bbox:?}");
    assert!((bbox.y0 + 10.0).abs() < 1e-3);
}

#[test]
fn text_without_fonts_is_a_silent_no_op() {
    let mut p = painter(32, 32);
    p.text("✦", Point::new(16.0, 16.0), &TextStyle::serif(14.0, Color::rgb8(255, 255, 255)))
        .unwrap();
    let t = p.finish().unwrap();
    assert!(t.data.iter().all(|b| *b == 0));
}
