use super::*;
use crate::content::translations::{Dictionary, Language};

const DT: f64 = 1.0 / 60.0;

fn headless(seed: u64) -> Scene {
    let dict = Dictionary::embedded().unwrap();
    let opts = SceneOpts {
        textures: false,
        ..SceneOpts::default()
    };
    Scene::mount(seed, dict.get(Language::En), opts).unwrap()
}

fn viewport() -> Viewport {
    Viewport::new(1280, 720).unwrap()
}

fn run(scene: &mut Scene, state: &AppState, seconds: f64) -> SceneFrame {
    let mut last = scene.tick(0.0, viewport(), state);
    for _ in 0..(seconds / DT) as usize {
        last = scene.tick(DT, viewport(), state);
    }
    last
}

fn card(frame: &SceneFrame, id: CardId) -> &CardFrame {
    frame.cards.iter().find(|c| c.id == id).unwrap()
}

#[test]
fn deal_waits_for_each_card_delay() {
    let mut scene = headless(5);
    let state = AppState::new();
    let stride = scene.tuning().deal_stride_s;
    let mut elapsed = 0.0;
    for _ in 0..90 {
        let frame = scene.tick(DT, viewport(), &state);
        elapsed += DT;
        for (i, c) in frame.cards.iter().enumerate() {
            if elapsed <= i as f64 * stride {
                assert_eq!(c.deal, 0.0, "card {i} dealt early at {elapsed}");
            }
        }
    }
    let frame = run(&mut scene, &state, 2.0);
    assert!(frame.cards.iter().all(|c| c.deal == 1.0));
}

#[test]
fn selecting_a_then_b_dims_a() {
    let mut scene = headless(9);
    let mut state = AppState::new();
    run(&mut scene, &state, 2.0);

    state.select(CardId::About);
    let frame = run(&mut scene, &state, 3.0);
    assert!(card(&frame, CardId::About).active);
    assert!(card(&frame, CardId::Formations).visuals.mesh_scale < 0.93);

    state.select(CardId::Contact);
    let frame = run(&mut scene, &state, 4.0);
    let about = scene.card(CardId::About).unwrap().anim;
    let contact = scene.card(CardId::Contact).unwrap().anim;
    assert!(about.dim > 0.999, "about dim {}", about.dim);
    assert!(contact.dim < 0.001, "contact dim {}", contact.dim);
    assert!(card(&frame, CardId::Contact).visuals.mesh_rotation_y > 3.0);
    assert!((card(&frame, CardId::About).visuals.front_opacity - 0.5).abs() < 1e-3);
}

#[test]
fn settled_cards_rest_on_their_slots() {
    let mut scene = headless(3);
    let frame = run(&mut scene, &AppState::new(), 3.0);
    for c in &frame.cards {
        let slot = scene.card(c.id).unwrap().def.slot;
        assert!((c.visuals.position.x - slot.position.x).abs() < 1e-9);
        assert!((c.visuals.position.z - slot.position.z).abs() < 1e-9);
        assert!(c.visuals.position.y.abs() < 1e-6);
        assert_eq!(c.visuals.group_rotation_y, slot.rotation_y);
    }
}

#[test]
fn layout_is_reported_on_width_change_only() {
    let mut scene = headless(1);
    let state = AppState::new();
    assert!(scene.tick(DT, viewport(), &state).layout_changed);
    assert!(!scene.tick(DT, viewport(), &state).layout_changed);

    let narrow = Viewport::new(360, 640).unwrap();
    let frame = scene.tick(DT, narrow, &state);
    assert!(frame.layout_changed);
    assert_eq!(frame.layout.scale, 0.42);
    assert_eq!(frame.layout.camera_distance, 11.0);
    assert_eq!(frame.frame, 2);
}

#[test]
fn mount_is_seeded() {
    let a = headless(77);
    let b = headless(77);
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.stage(), b.stage());
    assert_eq!(a.card(CardId::About).unwrap().deal_delay_s, 0.0);
    assert!((a.card(CardId::Contact).unwrap().deal_delay_s - 0.36).abs() < 1e-12);
}

#[test]
fn relabel_follows_language() {
    let dict = Dictionary::embedded().unwrap();
    let mut scene = headless(2);
    scene.relabel(dict.get(Language::Fr)).unwrap();
    let about = scene.card(CardId::About).unwrap();
    assert_eq!(about.def.label, "À propos");
    let frame = scene.tick(DT, viewport(), &AppState::new());
    assert_eq!(card(&frame, CardId::About).label, "À propos");
}

#[test]
fn frame_serializes_as_json_line() {
    let mut scene = headless(4);
    let frame = scene.tick(DT, viewport(), &AppState::new());
    let line = serde_json::to_string(&frame).unwrap();
    assert!(!line.contains('\n'));
    let json: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(json["cards"].as_array().unwrap().len(), 3);
    assert_eq!(json["cards"][0]["id"], "about");
    assert_eq!(json["layout"]["scale"], 1.0);
}
