// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_desk_domain::{
    Bookmaker, CollaborationNote, Competition, EntityKind, Fixture, FixtureMapping,
    MarketClassification, OperationIssue, Player, PricingSnapshot, Record, Sport, Team,
};
use serde::{Deserialize, Serialize};

/// The complete value of every entity collection at one point in time.
///
/// A snapshot is never mutated once published. `apply` builds the next
/// snapshot from the current one; readers holding the old value keep seeing
/// it unchanged. Collections are ordered newest first.
///
/// The serialized form is the persisted document: one top-level array per
/// collection, named as in [`EntityKind::collection`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub sports: Vec<Sport>,
    pub bookmakers: Vec<Bookmaker>,
    pub competitions: Vec<Competition>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub fixtures: Vec<Fixture>,
    pub mappings: Vec<FixtureMapping>,
    pub classifications: Vec<MarketClassification>,
    pub issues: Vec<OperationIssue>,
    pub notes: Vec<CollaborationNote>,
    pub pricing: Vec<PricingSnapshot>,
}

fn has_id<T: Record>(collection: &[T], id: &str) -> bool {
    collection.iter().any(|record| record.id() == id)
}

impl Snapshot {
    /// Creates a snapshot with every collection empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sports: Vec::new(),
            bookmakers: Vec::new(),
            competitions: Vec::new(),
            teams: Vec::new(),
            players: Vec::new(),
            fixtures: Vec::new(),
            mappings: Vec::new(),
            classifications: Vec::new(),
            issues: Vec::new(),
            notes: Vec::new(),
            pricing: Vec::new(),
        }
    }

    /// Checks whether a record with `id` exists in the `kind` collection.
    #[must_use]
    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        match kind {
            EntityKind::Sport => has_id(&self.sports, id),
            EntityKind::Bookmaker => has_id(&self.bookmakers, id),
            EntityKind::Competition => has_id(&self.competitions, id),
            EntityKind::Team => has_id(&self.teams, id),
            EntityKind::Player => has_id(&self.players, id),
            EntityKind::Fixture => has_id(&self.fixtures, id),
            EntityKind::Mapping => has_id(&self.mappings, id),
            EntityKind::Classification => has_id(&self.classifications, id),
            EntityKind::Issue => has_id(&self.issues, id),
            EntityKind::Note => has_id(&self.notes, id),
            EntityKind::Pricing => has_id(&self.pricing, id),
        }
    }

    /// Returns the number of records in the `kind` collection.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Sport => self.sports.len(),
            EntityKind::Bookmaker => self.bookmakers.len(),
            EntityKind::Competition => self.competitions.len(),
            EntityKind::Team => self.teams.len(),
            EntityKind::Player => self.players.len(),
            EntityKind::Fixture => self.fixtures.len(),
            EntityKind::Mapping => self.mappings.len(),
            EntityKind::Classification => self.classifications.len(),
            EntityKind::Issue => self.issues.len(),
            EntityKind::Note => self.notes.len(),
            EntityKind::Pricing => self.pricing.len(),
        }
    }

    /// Looks up a fixture by id.
    #[must_use]
    pub fn fixture(&self, fixture_id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|fixture| fixture.id == fixture_id)
    }

    /// Looks up a team by id.
    #[must_use]
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }
}
