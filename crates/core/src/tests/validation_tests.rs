// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_reference_snapshot, create_test_fixture, create_test_mapping, create_test_note,
};
use crate::{Command, CoreError, Snapshot, apply, apply_checked, validate_command};
use fixture_desk_domain::{EntityKind, Fixture, MappingStatus, ValidationError};

#[test]
fn test_fixture_with_resolved_references_is_accepted() {
    let snapshot: Snapshot = create_reference_snapshot();

    let next: Snapshot = apply_checked(
        &snapshot,
        Command::UpsertFixture {
            fixture: create_test_fixture("fix-1"),
        },
    )
    .expect("references resolve");

    assert_eq!(next.fixtures.len(), 1);
}

#[test]
fn test_fixture_with_unknown_team_is_rejected() {
    let snapshot: Snapshot = create_reference_snapshot();
    let mut fixture: Fixture = create_test_fixture("fix-1");
    fixture.away_team_id = String::from("team-ghost");

    let err: CoreError =
        apply_checked(&snapshot, Command::UpsertFixture { fixture }).expect_err("dangling team");

    assert_eq!(
        err,
        CoreError::Validation(ValidationError::DanglingReference {
            entity: EntityKind::Fixture,
            id: String::from("fix-1"),
            field: "awayTeamId",
            target: EntityKind::Team,
            target_id: String::from("team-ghost"),
        })
    );
}

#[test]
fn test_note_for_missing_fixture_is_rejected() {
    let snapshot: Snapshot = create_reference_snapshot();

    let result = validate_command(
        &snapshot,
        &Command::UpsertNote {
            note: create_test_note("note-1", "fix-missing"),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::DanglingReference {
            target: EntityKind::Fixture,
            ..
        }))
    ));
}

#[test]
fn test_mapping_with_unknown_bookmaker_is_rejected() {
    let snapshot: Snapshot = apply(
        &create_reference_snapshot(),
        Command::UpsertFixture {
            fixture: create_test_fixture("fix-1"),
        },
    );
    let mut mapping = create_test_mapping("map-1", "fix-1", MappingStatus::Pending);
    mapping.bookmaker_id = String::from("bk-unknown");

    let err: CoreError =
        apply_checked(&snapshot, Command::UpsertMapping { mapping }).expect_err("dangling book");

    assert!(err.to_string().contains("bookmakerId"));
}

#[test]
fn test_empty_identifier_is_rejected() {
    let snapshot: Snapshot = create_reference_snapshot();

    let err: CoreError = apply_checked(
        &snapshot,
        Command::UpsertFixture {
            fixture: create_test_fixture(""),
        },
    )
    .expect_err("empty id");

    assert_eq!(
        err,
        CoreError::Validation(ValidationError::EmptyIdentifier {
            entity: EntityKind::Fixture
        })
    );
}

#[test]
fn test_rejected_command_does_not_change_snapshot() {
    let snapshot: Snapshot = create_reference_snapshot();
    let before: Snapshot = snapshot.clone();
    let mut fixture: Fixture = create_test_fixture("fix-1");
    fixture.competition_id = String::from("comp-ghost");

    let result = apply_checked(&snapshot, Command::UpsertFixture { fixture });

    assert!(result.is_err());
    assert_eq!(snapshot, before);
}

#[test]
fn test_unchecked_apply_accepts_dangling_references() {
    let next: Snapshot = apply(
        &Snapshot::empty(),
        Command::UpsertNote {
            note: create_test_note("note-1", "fix-missing"),
        },
    );

    assert_eq!(next.notes.len(), 1);
}

#[test]
fn test_delete_of_unknown_id_passes_validation() {
    let snapshot: Snapshot = create_reference_snapshot();

    assert!(
        validate_command(
            &snapshot,
            &Command::DeleteFixture {
                fixture_id: String::from("fix-missing"),
            },
        )
        .is_ok()
    );
}
