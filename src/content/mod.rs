pub(crate) mod language;
pub(crate) mod prefs;
pub(crate) mod translations;
