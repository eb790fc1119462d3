use super::*;
use crate::content::translations::{Dictionary, Language};
use crate::scene::deck::Deck;

fn face(id: CardId) -> FaceSpec {
    let dict = Dictionary::embedded().unwrap();
    let deck = Deck::deal(&mut Rng64::new(1), dict.get(Language::En));
    FaceSpec::for_card(deck.get(id).unwrap()).unwrap()
}

#[test]
fn face_spec_follows_card_metadata() {
    let about = face(CardId::About);
    assert_eq!(about.label, "About");
    assert_eq!(about.accent.to_hex_rgb(), "#6b4d7a");
    assert_eq!(about.numeral(), "I");
    assert_eq!(face(CardId::Formations).numeral(), "II");
    assert_eq!(face(CardId::Contact).numeral(), "III");
    assert_eq!(face(CardId::Contact).subtitle(), "✉  the thread  ✉");

    let stray = FaceSpec {
        key: "moon".to_owned(),
        ..about
    };
    assert_eq!(stray.card(), None);
    assert_eq!(stray.numeral(), "I");
    assert_eq!(stray.subtitle(), "");
}

#[test]
fn texture_png_export_unpremultiplies() {
    let t = Texture {
        width: 2,
        height: 1,
        data: vec![64, 0, 0, 128, 0, 0, 0, 0],
    };
    let img = t.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);

    let bad = Texture {
        width: 3,
        height: 3,
        data: vec![0; 4],
    };
    assert!(bad.to_rgba_image().is_err());
}

#[test]
fn back_face_is_seeded() {
    let a = generate_back(11).unwrap();
    assert_eq!((a.width, a.height), (TEXTURE_WIDTH, TEXTURE_HEIGHT));
    assert_eq!(a.data.len(), CARD_CANVAS.rgba8_len());
    assert!(!a.is_blank());
    assert_eq!(a, generate_back(11).unwrap());
    assert_ne!(a, generate_back(12).unwrap());
}
