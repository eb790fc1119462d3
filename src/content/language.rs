use crate::content::prefs::PreferenceStore;
use crate::content::translations::{Dictionary, Language, Translations};
use crate::foundation::error::TarotResult;

/// Preference key the chosen language is stored under.
pub const LANGUAGE_KEY: &str = "language";

/// Active language, its translation table, and where the choice is persisted.
///
/// Holds the language mirrored onto the host document (`<html lang>`); hosts read it back with
/// [`LanguageContext::document_lang`] after every change.
pub struct LanguageContext {
    language: Language,
    dictionary: Dictionary,
    store: Box<dyn PreferenceStore>,
    document_lang: &'static str,
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .field("document_lang", &self.document_lang)
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Resolve the initial language.
    ///
    /// Order: stored preference, then `locale` (only its primary subtag matters), then
    /// [`Language::DEFAULT`]. A stored value that is unreadable or not a known code is ignored.
    pub fn init(
        store: Box<dyn PreferenceStore>,
        locale: Option<&str>,
        dictionary: Dictionary,
    ) -> Self {
        let stored = match store.get(LANGUAGE_KEY) {
            Ok(Some(v)) => {
                let parsed = Language::from_code(&v);
                if parsed.is_none() {
                    tracing::warn!(value = %v, "ignoring unknown stored language");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable language preference");
                None
            }
        };
        let language = stored
            .or_else(|| locale.map(Language::from_locale))
            .unwrap_or(Language::DEFAULT);
        tracing::debug!(%language, from_store = stored.is_some(), "language resolved");

        Self {
            language,
            dictionary,
            store,
            document_lang: language.code(),
        }
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translation table of the active language.
    pub fn t(&self) -> &Translations {
        self.dictionary.get(self.language)
    }

    /// Both translation tables.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Language attribute currently mirrored onto the host document.
    pub fn document_lang(&self) -> &'static str {
        self.document_lang
    }

    /// Switch language, persist the choice, and update the document mirror.
    ///
    /// The in-memory switch happens even when persisting fails; the storage error is returned
    /// so the caller can surface it.
    #[tracing::instrument(skip(self), fields(from = %self.language))]
    pub fn set_language(&mut self, language: Language) -> TarotResult<()> {
        self.language = language;
        self.document_lang = language.code();
        self.store.set(LANGUAGE_KEY, language.code())
    }

    /// Switch to the other language. Returns the new language.
    pub fn toggle(&mut self) -> TarotResult<Language> {
        let next = self.language.toggled();
        self.set_language(next)?;
        Ok(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/language.rs"]
mod tests;
