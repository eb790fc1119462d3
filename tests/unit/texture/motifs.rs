use std::sync::Arc;

use super::*;
use crate::texture::Texture;

fn canvas() -> Painter {
    Painter::with_fonts(200, 200, Arc::new(usvg::fontdb::Database::new())).unwrap()
}

fn coverage(t: &Texture) -> usize {
    t.data.chunks_exact(4).filter(|px| px[3] > 0).count()
}

fn drawn(f: impl FnOnce(&mut Painter)) -> Texture {
    let mut p = canvas();
    f(&mut p);
    p.finish().unwrap()
}

#[test]
fn every_motif_leaves_marks() {
    let c = Color::rgb8(200, 180, 120);
    let cases: Vec<(&str, Box<dyn FnOnce(&mut Painter)>)> = vec![
        ("leaf", Box::new(move |p: &mut Painter| {
            p.translate(100.0, 100.0);
            leaf(p, 20.0, c);
        })),
        ("hvine", Box::new(move |p: &mut Painter| hvine(p, 10.0, 190.0, 100.0, c, 1.0))),
        ("vvine", Box::new(move |p: &mut Painter| vvine(p, 100.0, 10.0, 190.0, c, -1.0))),
        ("mushroom", Box::new(move |p: &mut Painter| mushroom(p, 100.0, 150.0, 40.0, c))),
        ("crystals", Box::new(move |p: &mut Painter| crystal_cluster(p, 100.0, 120.0, c, 1.0))),
        ("moth", Box::new(move |p: &mut Painter| moth(p, 100.0, 100.0, 40.0, c))),
        ("owl", Box::new(move |p: &mut Painter| owl(p, 100.0, 100.0, 60.0, c).unwrap())),
        ("web", Box::new(move |p: &mut Painter| spider_web(p, 100.0, 100.0, 60.0, c))),
        ("pentagram", Box::new(move |p: &mut Painter| pentagram(p, 100.0, 100.0, 50.0, c))),
        ("moons", Box::new(move |p: &mut Painter| moon_phases(p, 100.0, 100.0, c, 9.0).unwrap())),
        ("sprig", Box::new(move |p: &mut Painter| sprig(p, 100.0, 150.0, 0.3, c, 1.2))),
        (
            "corner",
            Box::new(move |p: &mut Painter| {
                ornamental_corner(p, 20.0, 20.0, 1.0, 1.0, c).unwrap()
            }),
        ),
    ];
    for (name, draw) in cases {
        let t = drawn(draw);
        assert!(coverage(&t) > 20, "{name} drew nothing");
    }
}

#[test]
fn motifs_restore_painter_state() {
    let mut p = canvas();
    p.set_alpha(0.4);
    mushroom(&mut p, 50.0, 50.0, 20.0, Color::rgb8(1, 2, 3));
    sprig(&mut p, 50.0, 50.0, 1.0, Color::rgb8(1, 2, 3), 1.0);
    owl(&mut p, 50.0, 50.0, 20.0, Color::rgb8(1, 2, 3)).unwrap();
    assert_eq!(p.alpha(), 0.4);
    assert_eq!(p.transform(), crate::foundation::core::Affine::IDENTITY);
}

#[test]
fn scattered_stars_follow_the_seed() {
    let stars = |seed| {
        let white = Color::rgb8(255, 255, 255);
        drawn(|p| scattered_stars(p, &mut Rng64::new(seed), white, 40, 10.0).unwrap())
    };
    let a = stars(5);
    assert_eq!(a.data, stars(5).data);
    assert_ne!(a.data, stars(6).data);
    assert!(coverage(&a) > 0);
}
