use super::*;

#[test]
fn starfield_stays_inside_its_slab() {
    let field = Starfield::generate(&mut Rng64::new(42));
    assert_eq!(field.stars.len(), STAR_COUNT);
    for s in &field.stars {
        assert!((-10.0..=10.0).contains(&s.position.x));
        assert!((-6.0..=6.0).contains(&s.position.y));
        assert!((-16.0..=-2.0).contains(&s.position.z));
        assert!((0.006..=0.031).contains(&s.size));
        assert!((0.15..=0.65).contains(&s.opacity));
        assert!(STAR_PALETTE.contains(&s.color));
    }
}

#[test]
fn starfield_is_seeded() {
    let a = Starfield::generate(&mut Rng64::new(1));
    assert_eq!(a, Starfield::generate(&mut Rng64::new(1)));
    assert_ne!(a, Starfield::generate(&mut Rng64::new(2)));
}

#[test]
fn rig_and_fog_serialize_for_hosts() {
    let stage = Stage::new(&mut Rng64::new(0));
    assert_eq!(stage.lights.len(), 5);
    let json = serde_json::to_value(&stage).unwrap();
    assert_eq!(json["lights"][0]["type"], "ambient");
    assert_eq!(json["lights"][0]["color"], "#c8a060");
    assert_eq!(json["lights"][1]["type"], "point");
    assert_eq!(json["lights"][1]["distance"], 14.0);
    assert_eq!(json["fog"]["color"], "#06050a");
    assert_eq!(json["fog"]["far"], 22.0);
    assert_eq!(json["camera"]["fov_deg"], 58.0);
}
