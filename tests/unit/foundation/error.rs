use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryframeError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        StoryframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StoryframeError::alignment("x")
            .to_string()
            .contains("alignment error:")
    );
    assert!(
        StoryframeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoryframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
