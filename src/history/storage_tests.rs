//! Tests for history/storage

use super::*;
use tempfile::TempDir;

#[test]
fn test_default_data_dir_is_under_config() {
    let dir = default_data_dir();
    assert!(dir.is_some());
    assert!(dir.unwrap().to_string_lossy().contains(".config/omnibox"));
}

#[test]
fn test_parse_history_valid() {
    assert_eq!(
        parse_history(r#"["react hooks", "css grid"]"#),
        vec!["react hooks", "css grid"]
    );
}

#[test]
fn test_parse_history_malformed_is_empty() {
    assert!(parse_history("not json at all").is_empty());
    assert!(parse_history(r#"{"history": ["a"]}"#).is_empty());
    assert!(parse_history(r#"[1, 2, 3]"#).is_empty());
    assert!(parse_history("").is_empty());
}

#[test]
fn test_encode_history_is_json_array() {
    let encoded = encode_history(&["a".to_string(), "b \"quoted\"".to_string()]).unwrap();
    assert_eq!(encoded, r#"["a","b \"quoted\""]"#);
    assert_eq!(parse_history(&encoded), vec!["a", "b \"quoted\""]);
}

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    let entries = vec![
        "a".to_string(),
        "b".to_string(),
        "a".to_string(),
        "c".to_string(),
        "b".to_string(),
    ];
    assert_eq!(deduplicate(&entries), vec!["a", "b", "c"]);
}

#[test]
fn test_deduplicate_is_case_sensitive() {
    let entries = vec!["CSS".to_string(), "css".to_string()];
    assert_eq!(deduplicate(&entries), vec!["CSS", "css"]);
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_string())));
}

#[test]
fn test_file_store_missing_key_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("search_history"), Ok(None));
}

#[test]
fn test_file_store_creates_directory_and_writes_file() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("omnibox");
    let mut store = FileStore::new(&nested);

    store.set("search_history", "[\"a\"]").unwrap();

    let path = store.path_for("search_history");
    assert!(path.ends_with("search_history.json"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "[\"a\"]");
    assert_eq!(store.get("search_history"), Ok(Some("[\"a\"]".to_string())));
}

#[test]
fn test_file_store_unwritable_location_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut store = FileStore::new(blocker.join("sub"));
    let result = store.set("k", "v");
    assert!(matches!(result, Err(StorageError::Io(_))));
}

#[test]
fn test_storage_error_converts_to_persistence_unavailable() {
    let err: OmniboxError = StorageError::Io("disk full".to_string()).into();
    assert!(matches!(err, OmniboxError::PersistenceUnavailable(msg) if msg.contains("disk full")));
}
