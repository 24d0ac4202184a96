use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DeckError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(DeckError::asset("x").to_string().contains("asset error:"));
    assert!(DeckError::layout("x").to_string().contains("layout error:"));
    assert!(
        DeckError::conversion("x")
            .to_string()
            .contains("conversion error:")
    );
    assert!(
        DeckError::serialize("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = DeckError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
    assert!(!err.is_config());
}

#[test]
fn config_errors_are_classified() {
    assert!(DeckError::config("unknown icon").is_config());
    assert!(!DeckError::asset("decode").is_config());
}
