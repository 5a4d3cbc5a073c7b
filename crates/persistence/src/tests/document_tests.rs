// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_persistence;
use crate::{Persistence, PersistenceError, decode_snapshot};
use fixture_desk::{Snapshot, default_snapshot};

#[test]
fn test_read_missing_document_is_none() {
    let mut persistence: Persistence = create_test_persistence();

    assert_eq!(persistence.read_document().unwrap(), None);
}

#[test]
fn test_write_replaces_previous_body() {
    let mut persistence: Persistence = create_test_persistence();

    persistence.write_document(r#"{"fixtures": []}"#).unwrap();
    persistence.write_document(r#"{"notes": []}"#).unwrap();

    assert_eq!(
        persistence.read_document().unwrap().as_deref(),
        Some(r#"{"notes": []}"#)
    );
}

#[test]
fn test_storage_keys_do_not_overlap() {
    let mut persistence: Persistence = create_test_persistence().with_storage_key("desk_a");
    persistence.write_document("{}").unwrap();

    let mut other: Persistence = persistence.with_storage_key("desk_b");

    assert_eq!(other.storage_key(), "desk_b");
    assert_eq!(other.read_document().unwrap(), None);
}

#[test]
fn test_clear_document_reports_removal() {
    let mut persistence: Persistence = create_test_persistence();
    persistence.write_document("{}").unwrap();

    assert!(persistence.clear_document().unwrap());
    assert!(!persistence.clear_document().unwrap());
    assert_eq!(persistence.read_document().unwrap(), None);
}

#[test]
fn test_decode_rejects_non_object() {
    let result: Result<Snapshot, PersistenceError> = decode_snapshot("[1, 2, 3]");

    assert!(matches!(result, Err(PersistenceError::MalformedDocument(_))));
}

#[test]
fn test_decode_rejects_invalid_json() {
    let result: Result<Snapshot, PersistenceError> = decode_snapshot("{not json");

    assert!(matches!(result, Err(PersistenceError::SerializationError(_))));
}

#[test]
fn test_decode_empty_object_is_default() {
    assert_eq!(decode_snapshot("{}").unwrap(), default_snapshot());
}
