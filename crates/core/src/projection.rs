// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views joining a fixture with the records around it.
//!
//! References are not guaranteed to resolve, so every joined entity is
//! optional. Callers render an absent team or competition as "TBC".

use crate::state::Snapshot;
use fixture_desk_domain::{
    CollaborationNote, Competition, Fixture, FixtureMapping, MarketClassification,
    OperationIssue, PricingSnapshot, Severity, Sport, Team,
};
use serde::Serialize;
use std::collections::HashSet;

/// Placeholder shown for a reference that does not resolve.
pub const UNKNOWN_LABEL: &str = "TBC";

fn short_name(team: Option<&Team>) -> &str {
    team.map_or(UNKNOWN_LABEL, |team| team.short_name.as_str())
}

/// A fixture with everything an operator works on for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDetail<'a> {
    pub fixture: &'a Fixture,
    pub sport: Option<&'a Sport>,
    pub competition: Option<&'a Competition>,
    pub home_team: Option<&'a Team>,
    pub away_team: Option<&'a Team>,
    pub classification: Option<&'a MarketClassification>,
    pub mappings: Vec<&'a FixtureMapping>,
    pub issues: Vec<&'a OperationIssue>,
    pub notes: Vec<&'a CollaborationNote>,
    pub pricing: Vec<&'a PricingSnapshot>,
}

impl<'a> FixtureDetail<'a> {
    /// Builds the detail view for `fixture_id`, or `None` if it does not exist.
    ///
    /// When several classifications point at the fixture, the first (newest)
    /// one is shown.
    #[must_use]
    pub fn for_fixture(snapshot: &'a Snapshot, fixture_id: &str) -> Option<Self> {
        let fixture: &Fixture = snapshot.fixture(fixture_id)?;
        Some(Self {
            fixture,
            sport: snapshot
                .sports
                .iter()
                .find(|sport| sport.id == fixture.sport_id),
            competition: snapshot
                .competitions
                .iter()
                .find(|competition| competition.id == fixture.competition_id),
            home_team: snapshot.team(&fixture.home_team_id),
            away_team: snapshot.team(&fixture.away_team_id),
            classification: snapshot
                .classifications
                .iter()
                .find(|classification| classification.fixture_id == fixture.id),
            mappings: snapshot
                .mappings
                .iter()
                .filter(|mapping| mapping.fixture_id == fixture.id)
                .collect(),
            issues: snapshot
                .issues
                .iter()
                .filter(|issue| issue.fixture_id == fixture.id)
                .collect(),
            notes: snapshot
                .notes
                .iter()
                .filter(|note| note.fixture_id == fixture.id)
                .collect(),
            pricing: snapshot
                .pricing
                .iter()
                .filter(|pricing| pricing.fixture_id == fixture.id)
                .collect(),
        })
    }

    /// Returns `"HOME vs AWAY"` using team short names.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            short_name(self.home_team),
            short_name(self.away_team)
        )
    }
}

/// One line of the fixtures table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRow<'a> {
    pub fixture: &'a Fixture,
    pub home_team: Option<&'a Team>,
    pub away_team: Option<&'a Team>,
    pub classification: Option<&'a MarketClassification>,
    pub mappings: Vec<&'a FixtureMapping>,
    pub issues: Vec<&'a OperationIssue>,
}

impl<'a> FixtureRow<'a> {
    /// Builds one row per fixture, ordered by kick-off, earliest first.
    #[must_use]
    pub fn rows(snapshot: &'a Snapshot) -> Vec<Self> {
        let mut fixtures: Vec<&Fixture> = snapshot.fixtures.iter().collect();
        fixtures.sort_by_key(|fixture| fixture.kick_off);
        fixtures
            .into_iter()
            .map(|fixture| Self {
                fixture,
                home_team: snapshot.team(&fixture.home_team_id),
                away_team: snapshot.team(&fixture.away_team_id),
                classification: snapshot
                    .classifications
                    .iter()
                    .find(|classification| classification.fixture_id == fixture.id),
                mappings: snapshot
                    .mappings
                    .iter()
                    .filter(|mapping| mapping.fixture_id == fixture.id)
                    .collect(),
                issues: snapshot
                    .issues
                    .iter()
                    .filter(|issue| issue.fixture_id == fixture.id)
                    .collect(),
            })
            .collect()
    }

    /// Returns `"HOME vs AWAY"` using team short names.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            short_name(self.home_team),
            short_name(self.away_team)
        )
    }

    /// Counts the distinct bookmakers mapped to this fixture.
    #[must_use]
    pub fn bookmaker_count(&self) -> usize {
        self.mappings
            .iter()
            .map(|mapping| mapping.bookmaker_id.as_str())
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Returns the most urgent issue severity on this fixture.
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|issue| issue.severity).min()
    }
}
