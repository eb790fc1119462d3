use super::*;
use crate::texture::Texture;
use std::sync::Arc;

#[test]
fn moves_spawn_one_or_two_bounded_particles() {
    let mut trail = CursorTrail::new(8);
    let at = Point::new(100.0, 100.0);
    for n in 1..=50 {
        let before = trail.particles().len();
        trail.pointer_move(at);
        let spawned = trail.particles().len() - before;
        assert!((1..=2).contains(&spawned), "move {n} spawned {spawned}");
    }
    for p in trail.particles() {
        assert!((p.position.x - at.x).abs() <= 4.0);
        assert!((p.position.y - at.y).abs() <= 4.0);
        assert!((0.8..3.3).contains(&p.size));
        assert!(p.velocity.x.abs() <= 0.3);
        assert!((-1.4..=-0.2).contains(&p.velocity.y));
        assert!((20..55).contains(&p.max_life));
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn particles_fall_fade_and_expire() {
    let mut trail = CursorTrail::new(1);
    trail.pointer_move(Point::new(0.0, 0.0));
    let first = trail.particles()[0];
    trail.step();
    let p = trail.particles()[0];
    assert_eq!(p.life, 1);
    assert!((p.velocity.y - (first.velocity.y + GRAVITY)).abs() < 1e-12);
    assert!(p.alpha() < PEAK_ALPHA);
    assert!(p.current_size() < first.size);

    for _ in 0..60 {
        trail.step();
    }
    assert!(trail.particles().is_empty());
}

#[test]
fn fully_spent_particle_is_invisible() {
    let p = TrailParticle {
        position: Point::ZERO,
        velocity: Vec2::ZERO,
        size: 2.0,
        color: GOLD,
        life: 30,
        max_life: 30,
        star: false,
    };
    assert_eq!(p.alpha(), 0.0);
    assert!((p.current_size() - 0.6).abs() < 1e-12);
}

#[test]
fn trail_draws_onto_a_painter() {
    let mut trail = CursorTrail::new(4);
    for i in 0..10 {
        trail.pointer_move(Point::new(20.0 + f64::from(i) * 4.0, 32.0));
    }
    trail.step();
    let mut p = Painter::with_fonts(64, 64, Arc::new(usvg::fontdb::Database::new())).unwrap();
    trail.draw(&mut p).unwrap();
    assert_eq!(p.alpha(), 1.0);
    let t: Texture = p.finish().unwrap();
    assert!(!t.is_blank());
}
