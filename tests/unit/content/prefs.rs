use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tarot-prefs-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("prefs.json")
}

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryPreferenceStore::new();
    assert_eq!(store.get("language").unwrap(), None);
    store.set("language", "fr").unwrap();
    store.set("language", "en").unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
}

#[test]
fn file_store_creates_parent_dirs_and_survives_reopen() {
    let path = scratch("reopen");
    let mut store = FilePreferenceStore::new(&path);
    assert_eq!(store.get("language").unwrap(), None);
    store.set("language", "fr").unwrap();
    store.set("other", "x").unwrap();

    let reopened = FilePreferenceStore::new(&path);
    assert_eq!(reopened.get("language").unwrap().as_deref(), Some("fr"));
    assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["language"], "fr");
}

#[test]
fn corrupt_file_is_reported_on_read_and_replaced_on_write() {
    let path = scratch("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();

    let mut store = FilePreferenceStore::new(&path);
    assert!(matches!(store.get("language"), Err(TarotError::Serde(_))));
    store.set("language", "en").unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
}
