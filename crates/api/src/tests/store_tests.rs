// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use fixture_desk::{Intent, Snapshot, default_snapshot};
use fixture_desk_domain::FixtureStatus;

use crate::tests::helpers::{
    TEST_NOW, create_test_fixture, create_test_issue, create_test_note, create_test_store,
};
use crate::{Store, StoreConfig};

#[test]
fn test_open_without_document_serves_defaults() {
    let store: Store = create_test_store(StoreConfig::default());

    assert_eq!(*store.snapshot(), default_snapshot());
}

#[test]
fn test_readers_share_the_same_snapshot() {
    let store: Store = create_test_store(StoreConfig::default());
    let receiver = store.subscribe();

    let first: Arc<Snapshot> = store.snapshot();
    let second: Arc<Snapshot> = Arc::clone(&receiver.borrow());

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_mutation_publishes_new_snapshot() {
    let store: Store = create_test_store(StoreConfig::default());
    let mut receiver = store.subscribe();
    receiver.mark_unchanged();

    store.upsert_fixture(create_test_fixture("fix-new")).unwrap();

    assert!(receiver.has_changed().unwrap());
    let published: Arc<Snapshot> = Arc::clone(&receiver.borrow_and_update());
    assert_eq!(published.fixtures[0].id, "fix-new");
    assert!(Arc::ptr_eq(&published, &store.snapshot()));
}

#[test]
fn test_held_snapshot_is_not_mutated() {
    let store: Store = create_test_store(StoreConfig::default());
    let before: Arc<Snapshot> = store.snapshot();
    let copy: Snapshot = (*before).clone();

    store.delete_fixture("fix-har-rid").unwrap();

    assert_eq!(*before, copy);
    assert_ne!(*store.snapshot(), copy);
}

#[test]
fn test_unchanged_snapshot_is_not_published() {
    let store: Store = create_test_store(StoreConfig::default());
    let mut receiver = store.subscribe();
    receiver.mark_unchanged();
    let before: Arc<Snapshot> = store.snapshot();

    store.delete_note("note-missing").unwrap();

    assert!(!receiver.has_changed().unwrap());
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_dispatch_stamps_missing_timestamps() {
    let store: Store = create_test_store(StoreConfig::default());

    store
        .upsert_issue(create_test_issue("issue-new", "fix-har-rid"))
        .unwrap();
    store
        .upsert_note(create_test_note("note-new", "fix-har-rid"))
        .unwrap();

    let snapshot: Arc<Snapshot> = store.snapshot();
    assert_eq!(snapshot.issues[0].id, "issue-new");
    assert_eq!(snapshot.issues[0].detected_at, TEST_NOW);
    assert_eq!(snapshot.notes[0].created_at, TEST_NOW);
}

#[test]
fn test_delete_fixture_cascades_through_store() {
    let store: Store = create_test_store(StoreConfig::default());
    let pricing_before: usize = store.snapshot().pricing.len();

    store.delete_fixture("fix-har-rid").unwrap();

    let snapshot: Arc<Snapshot> = store.snapshot();
    assert!(snapshot.fixture("fix-har-rid").is_none());
    assert!(snapshot.mappings.iter().all(|m| m.fixture_id != "fix-har-rid"));
    assert!(
        snapshot
            .classifications
            .iter()
            .all(|c| c.fixture_id != "fix-har-rid")
    );
    assert!(snapshot.notes.iter().all(|n| n.fixture_id != "fix-har-rid"));
    assert_eq!(snapshot.pricing.len(), pricing_before);
}

#[test]
fn test_summary_tracks_mutations() {
    let store: Store = create_test_store(StoreConfig::default());
    assert_eq!(store.summary().pricing_ready_count, 1);

    store.delete_fixture("fix-har-rid").unwrap();

    assert_eq!(store.summary().pricing_ready_count, 0);
    assert_eq!(store.summary().fixture_count, 2);
}

#[test]
fn test_generic_dispatch_matches_bound_operation() {
    let store: Store = create_test_store(StoreConfig::default());
    let mut fixture = create_test_fixture("fix-har-rid");
    fixture.status = FixtureStatus::Postponed;

    store.dispatch(Intent::UpsertFixture(fixture)).unwrap();

    let snapshot: Arc<Snapshot> = store.snapshot();
    assert_eq!(
        snapshot.fixture("fix-har-rid").map(|f| f.status),
        Some(FixtureStatus::Postponed)
    );
    assert_eq!(snapshot.fixtures.len(), default_snapshot().fixtures.len());
}
