// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use fixture_desk_domain::{
    CollaborationTeam, Coverage, FixedClock, Fixture, FixtureStatus, IssueDraft, NoteDraft,
    Severity,
};
use fixture_desk_persistence::Persistence;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{Store, StoreConfig};

pub const TEST_NOW: OffsetDateTime = datetime!(2024-09-01 12:00 UTC);

pub fn create_test_store(config: StoreConfig) -> Store {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    Store::open(persistence, config, Box::new(FixedClock(TEST_NOW))).unwrap()
}

/// A fixture between two of the default teams.
pub fn create_test_fixture(id: &str) -> Fixture {
    Fixture {
        id: id.to_string(),
        sport_id: String::from("sport-football"),
        competition_id: String::from("comp-premier"),
        home_team_id: String::from("team-harbour"),
        away_team_id: String::from("team-ridgeway"),
        venue: String::from("Harbour Park"),
        kick_off: datetime!(2024-09-21 14:00 UTC),
        status: FixtureStatus::Scheduled,
        coverage: Coverage::default(),
        notes: None,
    }
}

pub fn create_test_issue(id: &str, fixture_id: &str) -> IssueDraft {
    IssueDraft {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        severity: Severity::Critical,
        message: String::from("Feed disconnected"),
        suggested_action: String::from("Review with trading team"),
        detected_at: None,
    }
}

pub fn create_test_note(id: &str, fixture_id: &str) -> NoteDraft {
    NoteDraft {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        author: String::from("Desk Lead"),
        team: CollaborationTeam::Trading,
        created_at: None,
        message: String::from("Prices suspended pending lineup"),
    }
}
