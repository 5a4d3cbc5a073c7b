// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use fixture_desk::{CoreError, Snapshot};
use fixture_desk_domain::{EntityKind, ValidationError};

use crate::tests::helpers::{create_test_fixture, create_test_note, create_test_store};
use crate::{Store, StoreConfig, StoreError};

#[test]
fn test_strict_store_rejects_dangling_reference() {
    let store: Store = create_test_store(StoreConfig::strict());
    let before: Arc<Snapshot> = store.snapshot();

    let err: StoreError = store
        .upsert_note(create_test_note("note-1", "fix-missing"))
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Rejected(CoreError::Validation(ValidationError::DanglingReference {
            entity: EntityKind::Note,
            target: EntityKind::Fixture,
            ..
        }))
    ));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_strict_store_accepts_resolved_references() {
    let store: Store = create_test_store(StoreConfig::strict());

    store.upsert_fixture(create_test_fixture("fix-new")).unwrap();
    store
        .upsert_note(create_test_note("note-1", "fix-new"))
        .unwrap();

    assert_eq!(store.snapshot().notes[0].fixture_id, "fix-new");
}

#[test]
fn test_lenient_store_accepts_dangling_reference() {
    let store: Store = create_test_store(StoreConfig::default());

    store
        .upsert_note(create_test_note("note-1", "fix-missing"))
        .unwrap();

    assert_eq!(store.snapshot().notes[0].id, "note-1");
}

#[test]
fn test_rejected_command_is_not_persisted() {
    let store: Store = create_test_store(StoreConfig::strict());

    let mut fixture = create_test_fixture("fix-bad");
    fixture.home_team_id = String::from("team-ghost");
    assert!(store.upsert_fixture(fixture).is_err());

    let mut persistence = store.close().unwrap();
    assert_eq!(persistence.read_document().unwrap(), None);
}
