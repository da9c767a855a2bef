use snipstash_core::error::CoreError;
use snipstash_core::models::{NewSnippet, Snippet};

#[test]
fn valid_input_is_accepted() {
    let input = NewSnippet::new("a.js", "console.log(1)").unwrap();
    assert_eq!(input.filename(), "a.js");
    assert_eq!(input.content(), "console.log(1)");
}

#[test]
fn empty_filename_is_rejected() {
    let err = NewSnippet::new("", "x").unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref f) if f == "filename"));
}

#[test]
fn empty_content_is_rejected() {
    let err = NewSnippet::new("a.js", "").unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref f) if f == "content"));
}

#[test]
fn whitespace_only_values_are_accepted() {
    // Trimming is advisory on the client; the service checks presence only.
    let input = NewSnippet::new("  ", "\n\t").unwrap();
    assert_eq!(input.filename(), "  ");
    assert_eq!(input.content(), "\n\t");
}

#[test]
fn snippet_wire_shape_matches_client_contract() {
    let snippet = Snippet {
        id: "665f1c9a2e8b4c0012345678".to_string(),
        filename: "a.js".to_string(),
        content: "x".to_string(),
        last_written_at: "2026-01-02T03:04:05Z".parse().unwrap(),
    };

    let value = serde_json::to_value(&snippet).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    for key in ["id", "filename", "content", "createdAt"] {
        assert!(obj.contains_key(key), "missing wire field {key}");
    }
    assert_eq!(obj["createdAt"], "2026-01-02T03:04:05Z");
}

#[test]
fn snippet_round_trips_through_json() {
    let snippet = Snippet {
        id: "665f1c9a2e8b4c0012345678".to_string(),
        filename: "notes.md".to_string(),
        content: "# heading".to_string(),
        last_written_at: "2026-01-02T03:04:05.123Z".parse().unwrap(),
    };

    let json = serde_json::to_string(&snippet).unwrap();
    let back: Snippet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, snippet.id);
    assert_eq!(back.filename, snippet.filename);
    assert_eq!(back.content, snippet.content);
    assert_eq!(back.last_written_at, snippet.last_written_at);
}
