use super::*;
use crate::content::prefs::{MemoryPreferenceStore, PreferenceStore};
use crate::content::translations::Dictionary;
use crate::foundation::error::TarotError;
use crate::overlay::panel::PanelContent;

const DT: f64 = 1.0 / 60.0;

fn config() -> SceneConfig {
    SceneConfig {
        seed: Some(21),
        headless: true,
        ..SceneConfig::default()
    }
}

fn app_with(store: Box<dyn PreferenceStore>, locale: Option<&str>) -> App {
    let ctx = LanguageContext::init(store, locale, Dictionary::embedded().unwrap());
    App::new(&config(), ctx).unwrap()
}

fn viewport() -> Viewport {
    Viewport::new(1024, 768).unwrap()
}

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> TarotResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> TarotResult<()> {
        Err(TarotError::storage("read-only"))
    }
}

#[test]
fn click_opens_and_reclick_closes_the_panel() {
    let mut app = app_with(Box::new(MemoryPreferenceStore::new()), None);
    assert!(!app.tick(DT, viewport()).panel.is_open());

    assert_eq!(app.click(CardId::Formations), Some(CardId::Formations));
    let frame = app.tick(DT, viewport());
    assert!(matches!(
        frame.panel.content,
        Some(PanelContent::Formations { .. })
    ));

    assert_eq!(app.click(CardId::Formations), None);
    assert!(!app.tick(DT, viewport()).panel.is_open());

    app.click(CardId::Contact);
    app.close();
    assert_eq!(app.state().active(), None);
}

#[test]
fn toggle_relabels_cards_and_bursts_for_a_second() {
    let mut app = app_with(Box::new(MemoryPreferenceStore::new()), Some("en-GB"));
    app.tick(DT, viewport());
    assert_eq!(app.toggle_language().unwrap(), Language::Fr);

    let frame = app.tick(DT, viewport());
    assert_eq!(frame.document_lang, "fr");
    assert_eq!(frame.switch.language, Language::Fr);
    assert_eq!(frame.bursts.len(), 1);
    let about = frame.scene.cards.iter().find(|c| c.id == CardId::About).unwrap();
    assert_eq!(about.label, "À propos");

    // 1000 ms after the toggle the burst is gone.
    for _ in 0..61 {
        app.tick(DT, viewport());
    }
    assert!(app.tick(DT, viewport()).bursts.is_empty());
}

#[test]
fn failed_persist_still_switches() {
    let mut app = app_with(Box::new(ReadOnlyStore), Some("fr"));
    assert_eq!(app.language().language(), Language::Fr);
    let err = app.toggle_language().unwrap_err();
    assert!(matches!(err, TarotError::Storage(_)));
    assert_eq!(app.language().language(), Language::En);
    let frame = app.tick(DT, viewport());
    assert_eq!(frame.document_lang, "en");
    assert_eq!(frame.bursts.len(), 1);
}

#[test]
fn hover_reaches_the_scene() {
    let mut app = app_with(Box::new(MemoryPreferenceStore::new()), None);
    app.pointer_over(CardId::About);
    app.pointer_over(CardId::Contact);
    let frame = app.tick(DT, viewport());
    let hovered: Vec<_> = frame.scene.cards.iter().filter(|c| c.hovered).map(|c| c.id).collect();
    assert_eq!(hovered, vec![CardId::Contact]);

    app.pointer_move(Point::new(10.0, 10.0));
    assert!(!app.trail().particles().is_empty());
}
