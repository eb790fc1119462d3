use super::*;
use crate::content::translations::{Dictionary, Language};

fn en() -> Translations {
    Dictionary::embedded().unwrap().get(Language::En).clone()
}

#[test]
fn hidden_panel_still_has_header_and_footer() {
    let t = en();
    let view = PanelView::project(None, &t);
    assert!(!view.is_open());
    assert_eq!(view.header.name, t.hero.name);
    assert_eq!(view.footer.tech, t.footer.tech);
    let text = view.render_text();
    assert!(text.starts_with(&t.hero.name));
    assert!(text.contains(&t.footer.made));
}

#[test]
fn about_lists_four_skill_groups_in_order() {
    let view = PanelView::project(Some(CardId::About), &en());
    let Some(PanelContent::About { title, skills, .. }) = &view.content else {
        panic!("expected about block, got {:?}", view.content);
    };
    assert_eq!(title, "About");
    assert_eq!(skills.len(), 4);
    assert_eq!(skills[0].title, "Strengths");
    assert!(skills.iter().all(|s| !s.items.is_empty()));
}

#[test]
fn formations_carries_degrees_and_cv() {
    let view = PanelView::project(Some(CardId::Formations), &en());
    let Some(PanelContent::Formations { degrees, cv, .. }) = &view.content else {
        panic!("expected formations block");
    };
    assert_eq!(degrees.len(), 3);
    assert!(cv.file_name.ends_with("_en.pdf"));
    assert!(view.render_text().contains(&cv.label));
}

#[test]
fn contact_links_point_at_mail_and_profiles() {
    let t = en();
    let view = PanelView::project(Some(CardId::Contact), &t);
    let Some(PanelContent::Contact { links, .. }) = &view.content else {
        panic!("expected contact block");
    };
    assert_eq!(links[0].href, format!("mailto:{}", t.contact.email));
    assert_eq!(links[0].icon, "✉");
    assert_eq!(links[1].href, t.contact.github_url);
    assert_eq!(links[2].href, t.contact.linkedin_url);
}

#[test]
fn projection_follows_language() {
    let dict = Dictionary::embedded().unwrap();
    let fr = PanelView::project(Some(CardId::About), dict.get(Language::Fr));
    assert_eq!(fr.content.as_ref().map(PanelContent::title), Some("À propos"));
    let json = serde_json::to_value(&fr).unwrap();
    assert_eq!(json["content"]["section"], "about");
}
