use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TarotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TarotError::render("x").to_string().contains("render error:"));
    assert!(
        TarotError::content("x")
            .to_string()
            .contains("content error:")
    );
    assert!(
        TarotError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        TarotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TarotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
