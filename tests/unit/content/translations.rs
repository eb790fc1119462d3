use super::*;

#[test]
fn embedded_dictionary_parses_both_languages() {
    let dict = Dictionary::embedded().unwrap();
    assert_eq!(dict.get(Language::Fr).about.title, "À propos");
    assert_eq!(dict.get(Language::En).about.title, "About");
    assert_eq!(dict.en.formations.degrees.len(), 3);
    assert_eq!(dict.fr.formations.degrees.len(), 3);
    assert!(dict.en.formations.cv.file_name.ends_with("_en.pdf"));
    assert!(dict.fr.formations.cv.file_name.ends_with("_fr.pdf"));
    assert_eq!(dict.en.about.skills.groups()[0].title, "Strengths");
}

#[test]
fn locale_detection_uses_primary_subtag() {
    assert_eq!(Language::from_locale("fr"), Language::Fr);
    assert_eq!(Language::from_locale("fr-CA"), Language::Fr);
    assert_eq!(Language::from_locale("fr_FR.UTF-8"), Language::Fr);
    assert_eq!(Language::from_locale("FR"), Language::Fr);
    assert_eq!(Language::from_locale("en-US"), Language::En);
    assert_eq!(Language::from_locale("de-DE"), Language::En);
    assert_eq!(Language::from_locale(""), Language::En);
}

#[test]
fn codes_parse_and_toggle() {
    assert_eq!(Language::from_code(" EN "), Some(Language::En));
    assert_eq!(Language::from_code("fr-FR"), None);
    assert!("xx".parse::<Language>().is_err());
    assert_eq!(Language::Fr.toggled(), Language::En);
    assert_eq!(Language::En.toggled().toggled(), Language::En);
    assert_eq!(Language::Fr.to_string(), "fr");
}

#[test]
fn empty_titles_are_rejected() {
    let mut dict = Dictionary::embedded().unwrap();
    dict.fr.contact.title = "  ".to_owned();
    let json = serde_json::to_string(&dict).unwrap();
    let err = Dictionary::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("contact.title"));
}
