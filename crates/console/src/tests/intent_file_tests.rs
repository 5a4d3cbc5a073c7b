// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_desk::Intent;
use fixture_desk_api::{Store, StoreConfig};

use crate::tests::create_test_store;
use crate::{apply_intents, parse_intents};

const INTENTS: &str = r#"[
    {
        "type": "UPSERT_NOTE",
        "payload": {
            "id": "note-console-1",
            "fixtureId": "fix-lak-cap",
            "author": "Night Desk",
            "team": "operations",
            "message": "Venue confirmed"
        }
    },
    { "type": "DELETE_FIXTURE", "payload": "fix-fro-sum" }
]"#;

#[test]
fn test_parse_intent_file() {
    let intents: Vec<Intent> = parse_intents(INTENTS).unwrap();

    assert_eq!(intents.len(), 2);
    assert_eq!(intents[1], Intent::DeleteFixture(String::from("fix-fro-sum")));
}

#[test]
fn test_parse_rejects_single_object() {
    assert!(parse_intents(r#"{"type": "DELETE_NOTE", "payload": "n"}"#).is_err());
}

#[test]
fn test_apply_intents_in_order() {
    let store: Store = create_test_store(StoreConfig::default());

    let applied: usize = apply_intents(&store, parse_intents(INTENTS).unwrap()).unwrap();

    assert_eq!(applied, 2);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.notes[0].id, "note-console-1");
    assert!(snapshot.fixture("fix-fro-sum").is_none());
    assert!(snapshot.issues.iter().all(|i| i.fixture_id != "fix-fro-sum"));
}

#[test]
fn test_strict_apply_stops_at_first_rejection() {
    let store: Store = create_test_store(StoreConfig::strict());
    let intents: Vec<Intent> = parse_intents(
        r#"[
            { "type": "DELETE_NOTE", "payload": "note-har-rid-1" },
            {
                "type": "UPSERT_NOTE",
                "payload": {
                    "id": "note-orphan",
                    "fixtureId": "fix-unknown",
                    "author": "Night Desk",
                    "team": "risk",
                    "message": "Check exposure"
                }
            },
            { "type": "DELETE_FIXTURE", "payload": "fix-har-rid" }
        ]"#,
    )
    .unwrap();

    assert!(apply_intents(&store, intents).is_err());

    let snapshot = store.snapshot();
    assert!(snapshot.notes.iter().all(|n| n.id != "note-har-rid-1"));
    assert!(snapshot.notes.iter().all(|n| n.id != "note-orphan"));
    assert!(snapshot.fixture("fix-har-rid").is_some());
}
