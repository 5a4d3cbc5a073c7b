// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Snapshot, apply};
use fixture_desk_domain::{
    Bookmaker, CollaborationNote, CollaborationTeam, Competition, CompetitionTier, Coverage,
    Fixture, FixtureMapping, FixtureStatus, MappingStatus, MarketClassification, MarketStatus,
    OperationIssue, PricingSnapshot, RiskLevel, Severity, Sport, Team,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: OffsetDateTime = datetime!(2024-09-01 12:00 UTC);

pub fn create_test_fixture(id: &str) -> Fixture {
    Fixture {
        id: id.to_string(),
        sport_id: String::from("sport-1"),
        competition_id: String::from("comp-1"),
        home_team_id: String::from("team-home"),
        away_team_id: String::from("team-away"),
        venue: String::from("Test Ground"),
        kick_off: datetime!(2024-09-14 15:00 UTC),
        status: FixtureStatus::Scheduled,
        coverage: Coverage::default(),
        notes: None,
    }
}

pub fn create_test_mapping(id: &str, fixture_id: &str, status: MappingStatus) -> FixtureMapping {
    FixtureMapping {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        bookmaker_id: String::from("bk-1"),
        external_fixture_id: format!("EXT-{id}"),
        markets_covered: vec![String::from("match-result")],
        status,
        confidence: 0.9,
        last_synced: TEST_NOW,
        issues: None,
    }
}

pub fn create_test_classification(
    id: &str,
    fixture_id: &str,
    market_status: MarketStatus,
) -> MarketClassification {
    MarketClassification {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        template: String::from("Standard"),
        pricing_lead: String::from("Lead Trader"),
        risk_level: RiskLevel::Low,
        market_status,
        notes: None,
    }
}

pub fn create_test_issue(id: &str, fixture_id: &str, severity: Severity) -> OperationIssue {
    OperationIssue {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        severity,
        message: String::from("Feed latency above threshold"),
        suggested_action: String::from("Review with trading team"),
        detected_at: TEST_NOW,
    }
}

pub fn create_test_note(id: &str, fixture_id: &str) -> CollaborationNote {
    CollaborationNote {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        author: String::from("Operator"),
        team: CollaborationTeam::Operations,
        created_at: TEST_NOW,
        message: String::from("Checked lineups"),
    }
}

pub fn create_test_pricing(id: &str, fixture_id: &str) -> PricingSnapshot {
    PricingSnapshot {
        id: id.to_string(),
        fixture_id: fixture_id.to_string(),
        bookmaker_id: String::from("bk-1"),
        market: String::from("match-result"),
        selection: String::from("home"),
        price: 1.95,
        probability: 0.51,
        recorded_at: TEST_NOW,
    }
}

/// A snapshot with the sport, competition, teams and bookmaker that the
/// test fixtures reference, but no fixtures.
pub fn create_reference_snapshot() -> Snapshot {
    let mut snapshot: Snapshot = Snapshot::empty();
    snapshot.sports.push(Sport {
        id: String::from("sport-1"),
        code: String::from("FOOT"),
        name: String::from("Football"),
    });
    snapshot.bookmakers.push(Bookmaker {
        id: String::from("bk-1"),
        name: String::from("Test Book"),
        region: String::from("Europe"),
    });
    snapshot.competitions.push(Competition {
        id: String::from("comp-1"),
        sport_id: String::from("sport-1"),
        name: String::from("Test League"),
        region: String::from("Europe"),
        tier: CompetitionTier::Professional,
        season: String::from("2024/25"),
        governing_body: None,
    });
    for (id, short_name) in [("team-home", "HOM"), ("team-away", "AWY")] {
        snapshot.teams.push(Team {
            id: id.to_string(),
            sport_id: String::from("sport-1"),
            competition_ids: vec![String::from("comp-1")],
            name: format!("{short_name} Town"),
            short_name: short_name.to_string(),
            primary_color: String::from("#000000"),
            secondary_color: String::from("#ffffff"),
            home_venue: None,
        });
    }
    snapshot
}

/// Applies every command in order.
pub fn apply_all(snapshot: &Snapshot, commands: Vec<Command>) -> Snapshot {
    commands
        .into_iter()
        .fold(snapshot.clone(), |current, command| apply(&current, command))
}
