use std::sync::Arc;

use super::*;

fn spec(key: &str) -> FaceSpec {
    FaceSpec {
        key: key.to_owned(),
        label: "Label".to_owned(),
        symbol: "☽".to_owned(),
        accent: Color::rgb8(0xd4, 0xa5, 0x74),
    }
}

fn render(key: &str) -> crate::texture::Texture {
    let mut p = Painter::with_fonts(512, 896, Arc::new(usvg::fontdb::Database::new())).unwrap();
    draw(&mut p, &spec(key)).unwrap();
    p.finish().unwrap()
}

#[test]
fn table_covers_every_card() {
    for id in crate::scene::deck::CardId::ALL {
        assert!(illustrator_for(id.key()).is_some(), "{id}");
    }
    assert!(illustrator_for("experiences").is_none());
}

#[test]
fn known_keys_draw_distinct_artwork() {
    let about = render("about");
    let formations = render("formations");
    let contact = render("contact");
    assert!(!about.is_blank());
    assert!(!formations.is_blank());
    assert!(!contact.is_blank());
    assert_ne!(about.data, formations.data);
    assert_ne!(formations.data, contact.data);
}

#[test]
fn unknown_key_is_a_no_op() {
    assert!(render("tower").is_blank());
}
