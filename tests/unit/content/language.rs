use super::*;
use crate::content::prefs::MemoryPreferenceStore;
use crate::foundation::error::TarotError;

fn dict() -> Dictionary {
    Dictionary::embedded().unwrap()
}

fn store_with(value: Option<&str>) -> Box<dyn PreferenceStore> {
    let mut s = MemoryPreferenceStore::new();
    if let Some(v) = value {
        s.set(LANGUAGE_KEY, v).unwrap();
    }
    Box::new(s)
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> TarotResult<Option<String>> {
        Err(TarotError::storage("disk on fire"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> TarotResult<()> {
        Err(TarotError::storage("disk on fire"))
    }
}

#[test]
fn stored_preference_wins_over_locale() {
    let ctx = LanguageContext::init(store_with(Some("en")), Some("fr-FR"), dict());
    assert_eq!(ctx.language(), Language::En);
    assert_eq!(ctx.document_lang(), "en");
}

#[test]
fn locale_is_used_when_nothing_is_stored() {
    let ctx = LanguageContext::init(store_with(None), Some("fr-BE"), dict());
    assert_eq!(ctx.language(), Language::Fr);
    assert_eq!(ctx.t().about.title, "À propos");

    let ctx = LanguageContext::init(store_with(None), Some("es-ES"), dict());
    assert_eq!(ctx.language(), Language::En);
}

#[test]
fn default_is_english_without_store_or_locale() {
    let ctx = LanguageContext::init(store_with(None), None, dict());
    assert_eq!(ctx.language(), Language::En);
}

#[test]
fn invalid_or_unreadable_stored_value_is_ignored() {
    let ctx = LanguageContext::init(store_with(Some("klingon")), Some("fr"), dict());
    assert_eq!(ctx.language(), Language::Fr);

    let ctx = LanguageContext::init(Box::new(FailingStore), Some("fr"), dict());
    assert_eq!(ctx.language(), Language::Fr);
}

#[test]
fn set_language_updates_mirror_and_table() {
    let mut ctx = LanguageContext::init(store_with(None), None, dict());
    ctx.set_language(Language::Fr).unwrap();
    assert_eq!(ctx.language(), Language::Fr);
    assert_eq!(ctx.document_lang(), "fr");
    assert_eq!(ctx.t().contact.title, "Contact");
    assert_eq!(ctx.toggle().unwrap(), Language::En);
    assert_eq!(ctx.t().about.title, "About");
}

#[test]
fn failed_persist_still_switches_in_memory() {
    let mut ctx = LanguageContext::init(Box::new(FailingStore), None, dict());
    assert!(ctx.set_language(Language::Fr).is_err());
    assert_eq!(ctx.language(), Language::Fr);
    assert_eq!(ctx.document_lang(), "fr");
}
