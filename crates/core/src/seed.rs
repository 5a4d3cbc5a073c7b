// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bundled default snapshot.
//!
//! This is what a fresh console starts from, and what the persistence layer
//! falls back to for any collection missing from a stored document.

use crate::state::Snapshot;
use fixture_desk_domain::{
    Bookmaker, CollaborationNote, CollaborationTeam, Competition, CompetitionTier, Coverage,
    Fixture, FixtureMapping, FixtureStatus, MappingStatus, MarketClassification, MarketStatus,
    OperationIssue, Player, PlayerStatus, PricingSnapshot, RiskLevel, Severity, Sport, Team,
};
use time::macros::datetime;

fn sport(id: &str, code: &str, name: &str) -> Sport {
    Sport {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
    }
}

fn bookmaker(id: &str, name: &str, region: &str) -> Bookmaker {
    Bookmaker {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn team(
    id: &str,
    sport_id: &str,
    competition_id: &str,
    name: &str,
    short_name: &str,
    primary_color: &str,
    secondary_color: &str,
    home_venue: &str,
) -> Team {
    Team {
        id: id.to_string(),
        sport_id: sport_id.to_string(),
        competition_ids: vec![competition_id.to_string()],
        name: name.to_string(),
        short_name: short_name.to_string(),
        primary_color: primary_color.to_string(),
        secondary_color: secondary_color.to_string(),
        home_venue: Some(home_venue.to_string()),
    }
}

fn player(id: &str, team_id: &str, name: &str, position: &str, nationality: &str) -> Player {
    Player {
        id: id.to_string(),
        team_id: team_id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        nationality: nationality.to_string(),
        date_of_birth: None,
        status: PlayerStatus::Active,
    }
}

/// Builds the bundled default snapshot.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_snapshot() -> Snapshot {
    let sports: Vec<Sport> = vec![
        sport("sport-football", "FOOT", "Football"),
        sport("sport-basketball", "BASK", "Basketball"),
        sport("sport-hockey", "HOCK", "Ice Hockey"),
    ];

    let bookmakers: Vec<Bookmaker> = vec![
        bookmaker("bk-northline", "Northline Bet", "UK & Ireland"),
        bookmaker("bk-meridian", "Meridian Sports", "Europe"),
        bookmaker("bk-pacifica", "Pacifica Odds", "North America"),
    ];

    let competitions: Vec<Competition> = vec![
        Competition {
            id: String::from("comp-premier"),
            sport_id: String::from("sport-football"),
            name: String::from("Premier Division"),
            region: String::from("England"),
            tier: CompetitionTier::Professional,
            season: String::from("2024/25"),
            governing_body: Some(String::from("National Football Association")),
        },
        Competition {
            id: String::from("comp-continental"),
            sport_id: String::from("sport-basketball"),
            name: String::from("Continental Basketball League"),
            region: String::from("Europe"),
            tier: CompetitionTier::Professional,
            season: String::from("2024/25"),
            governing_body: None,
        },
        Competition {
            id: String::from("comp-northern-hockey"),
            sport_id: String::from("sport-hockey"),
            name: String::from("Northern Hockey League"),
            region: String::from("North America"),
            tier: CompetitionTier::Professional,
            season: String::from("2024/25"),
            governing_body: Some(String::from("Northern Hockey Board")),
        },
    ];

    let teams: Vec<Team> = vec![
        team(
            "team-harbour",
            "sport-football",
            "comp-premier",
            "Harbour City FC",
            "HAR",
            "#dc2626",
            "#f8fafc",
            "Quayside Stadium",
        ),
        team(
            "team-ridgeway",
            "sport-football",
            "comp-premier",
            "Ridgeway United",
            "RID",
            "#1d4ed8",
            "#facc15",
            "Ridgeway Park",
        ),
        team(
            "team-lakeside",
            "sport-basketball",
            "comp-continental",
            "Lakeside Giants",
            "LAK",
            "#7c3aed",
            "#f97316",
            "Lakeside Arena",
        ),
        team(
            "team-capital",
            "sport-basketball",
            "comp-continental",
            "Capital Royals",
            "CAP",
            "#0f766e",
            "#e2e8f0",
            "Royal Dome",
        ),
        team(
            "team-frost",
            "sport-hockey",
            "comp-northern-hockey",
            "Frostbay Wolves",
            "FRO",
            "#0ea5e9",
            "#0f172a",
            "Frostbay Ice Centre",
        ),
        team(
            "team-summit",
            "sport-hockey",
            "comp-northern-hockey",
            "Summit Peaks",
            "SUM",
            "#16a34a",
            "#fefce8",
            "Summit Gardens",
        ),
    ];

    let players: Vec<Player> = vec![
        player("player-okafor", "team-harbour", "Daniel Okafor", "Forward", "Nigeria"),
        player("player-lindqvist", "team-ridgeway", "Erik Lindqvist", "Goalkeeper", "Sweden"),
        player("player-moreau", "team-lakeside", "Lucas Moreau", "Point Guard", "France"),
        player("player-tanaka", "team-frost", "Kenji Tanaka", "Centre", "Japan"),
    ];

    let fixtures: Vec<Fixture> = vec![
        Fixture {
            id: String::from("fix-har-rid"),
            sport_id: String::from("sport-football"),
            competition_id: String::from("comp-premier"),
            home_team_id: String::from("team-harbour"),
            away_team_id: String::from("team-ridgeway"),
            venue: String::from("Quayside Stadium"),
            kick_off: datetime!(2024-09-14 14:00 UTC),
            status: FixtureStatus::Scheduled,
            coverage: Coverage::default(),
            notes: Some(String::from("Local derby, expect heavy in-play volume")),
        },
        Fixture {
            id: String::from("fix-lak-cap"),
            sport_id: String::from("sport-basketball"),
            competition_id: String::from("comp-continental"),
            home_team_id: String::from("team-lakeside"),
            away_team_id: String::from("team-capital"),
            venue: String::from("Lakeside Arena"),
            kick_off: datetime!(2024-09-15 18:30 UTC),
            status: FixtureStatus::Scheduled,
            coverage: Coverage {
                feed: true,
                streams: false,
                tracking: true,
            },
            notes: None,
        },
        Fixture {
            id: String::from("fix-fro-sum"),
            sport_id: String::from("sport-hockey"),
            competition_id: String::from("comp-northern-hockey"),
            home_team_id: String::from("team-frost"),
            away_team_id: String::from("team-summit"),
            venue: String::from("Frostbay Ice Centre"),
            kick_off: datetime!(2024-09-16 23:00 UTC),
            status: FixtureStatus::Delayed,
            coverage: Coverage::default(),
            notes: None,
        },
    ];

    let mappings: Vec<FixtureMapping> = vec![
        FixtureMapping {
            id: String::from("map-har-rid-northline"),
            fixture_id: String::from("fix-har-rid"),
            bookmaker_id: String::from("bk-northline"),
            external_fixture_id: String::from("NL-448812"),
            markets_covered: vec![
                String::from("match-result"),
                String::from("over-under-2.5"),
                String::from("both-teams-to-score"),
            ],
            status: MappingStatus::Complete,
            confidence: 0.97,
            last_synced: datetime!(2024-09-10 08:15 UTC),
            issues: None,
        },
        FixtureMapping {
            id: String::from("map-lak-cap-meridian"),
            fixture_id: String::from("fix-lak-cap"),
            bookmaker_id: String::from("bk-meridian"),
            external_fixture_id: String::from("MS-20931"),
            markets_covered: vec![String::from("money-line")],
            status: MappingStatus::NeedsReview,
            confidence: 0.64,
            last_synced: datetime!(2024-09-10 09:40 UTC),
            issues: Some(vec![String::from("Team names differ from feed")]),
        },
    ];

    let classifications: Vec<MarketClassification> = vec![MarketClassification {
        id: String::from("cls-har-rid"),
        fixture_id: String::from("fix-har-rid"),
        template: String::from("Football Premium"),
        pricing_lead: String::from("M. Alvarez"),
        risk_level: RiskLevel::Medium,
        market_status: MarketStatus::Ready,
        notes: None,
    }];

    let issues: Vec<OperationIssue> = vec![OperationIssue {
        id: String::from("issue-fro-sum-feed"),
        fixture_id: String::from("fix-fro-sum"),
        severity: Severity::High,
        message: String::from("Official feed reports a delayed start"),
        suggested_action: String::from("Suspend pre-match markets until a new puck drop is confirmed"),
        detected_at: datetime!(2024-09-16 22:40 UTC),
    }];

    let notes: Vec<CollaborationNote> = vec![CollaborationNote {
        id: String::from("note-har-rid-1"),
        fixture_id: String::from("fix-har-rid"),
        author: String::from("Priya N."),
        team: CollaborationTeam::Trading,
        created_at: datetime!(2024-09-10 10:05 UTC),
        message: String::from("Liability cap raised for the derby, watch team news on Friday"),
    }];

    let pricing: Vec<PricingSnapshot> = vec![
        PricingSnapshot {
            id: String::from("price-har-rid-home"),
            fixture_id: String::from("fix-har-rid"),
            bookmaker_id: String::from("bk-northline"),
            market: String::from("match-result"),
            selection: String::from("home"),
            price: 2.05,
            probability: 0.48,
            recorded_at: datetime!(2024-09-10 10:00 UTC),
        },
        PricingSnapshot {
            id: String::from("price-har-rid-away"),
            fixture_id: String::from("fix-har-rid"),
            bookmaker_id: String::from("bk-northline"),
            market: String::from("match-result"),
            selection: String::from("away"),
            price: 3.6,
            probability: 0.27,
            recorded_at: datetime!(2024-09-10 10:00 UTC),
        },
    ];

    Snapshot {
        sports,
        bookmakers,
        competitions,
        teams,
        players,
        fixtures,
        mappings,
        classifications,
        issues,
        notes,
        pricing,
    }
}
