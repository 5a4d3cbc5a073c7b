// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_desk_domain::{
    Clock, CollaborationNote, Competition, EntityKind, Fixture, FixtureMapping, IssueDraft,
    MappingDraft, MarketClassification, NoteDraft, OperationIssue, Player, PricingDraft,
    PricingSnapshot, Team, normalize_optional_text,
};
use serde::{Deserialize, Serialize};

/// A request submitted by a producing view.
///
/// Intents may omit timestamps on mappings, issues, notes and pricing rows,
/// and may carry untrimmed optional text. [`Command::from_intent`] turns an
/// intent into a fully-formed command.
///
/// The serialized form is `{"type": "UPSERT_FIXTURE", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::large_enum_variant)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    UpsertCompetition(Competition),
    UpsertTeam(Team),
    UpsertPlayer(Player),
    UpsertFixture(Fixture),
    UpsertMapping(MappingDraft),
    UpsertClassification(MarketClassification),
    UpsertIssue(IssueDraft),
    UpsertNote(NoteDraft),
    #[serde(alias = "RECORD_PRICING")]
    UpsertPricing(PricingDraft),
    DeleteFixture(String),
    DeleteMapping(String),
    DeleteNote(String),
}

/// A command represents a fully-formed state change as data only.
///
/// Commands are the only way to change a snapshot. Upserts carry complete
/// records: an upsert replaces the stored record wholesale.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Command {
    /// Create or replace a competition.
    UpsertCompetition {
        /// The complete record.
        competition: Competition,
    },
    /// Create or replace a team.
    UpsertTeam {
        /// The complete record.
        team: Team,
    },
    /// Create or replace a player.
    UpsertPlayer {
        /// The complete record.
        player: Player,
    },
    /// Create or replace a fixture.
    UpsertFixture {
        /// The complete record.
        fixture: Fixture,
    },
    /// Create or replace a bookmaker mapping.
    UpsertMapping {
        /// The complete record.
        mapping: FixtureMapping,
    },
    /// Create or replace a market classification.
    UpsertClassification {
        /// The complete record.
        classification: MarketClassification,
    },
    /// Create or replace an operational issue.
    UpsertIssue {
        /// The complete record.
        issue: OperationIssue,
    },
    /// Create or replace a collaboration note.
    UpsertNote {
        /// The complete record.
        note: CollaborationNote,
    },
    /// Record a price observation.
    UpsertPricing {
        /// The complete record.
        pricing: PricingSnapshot,
    },
    /// Delete a fixture together with its mappings, issues, classifications
    /// and notes.
    DeleteFixture {
        /// The fixture to delete.
        fixture_id: String,
    },
    /// Delete a single mapping.
    DeleteMapping {
        /// The mapping to delete.
        mapping_id: String,
    },
    /// Delete a single note.
    DeleteNote {
        /// The note to delete.
        note_id: String,
    },
}

impl Command {
    /// Builds a command from a producer intent.
    ///
    /// Missing timestamps are filled with `clock.now()`. Optional free text is
    /// trimmed and dropped when blank, so an empty string is never stored.
    #[must_use]
    pub fn from_intent(intent: Intent, clock: &dyn Clock) -> Self {
        match intent {
            Intent::UpsertCompetition(mut competition) => {
                competition.governing_body = normalize_optional_text(competition.governing_body);
                Self::UpsertCompetition { competition }
            }
            Intent::UpsertTeam(mut team) => {
                team.home_venue = normalize_optional_text(team.home_venue);
                Self::UpsertTeam { team }
            }
            Intent::UpsertPlayer(mut player) => {
                player.date_of_birth = normalize_optional_text(player.date_of_birth);
                Self::UpsertPlayer { player }
            }
            Intent::UpsertFixture(mut fixture) => {
                fixture.notes = normalize_optional_text(fixture.notes);
                Self::UpsertFixture { fixture }
            }
            Intent::UpsertMapping(draft) => Self::UpsertMapping {
                mapping: draft.stamp(clock.now()),
            },
            Intent::UpsertClassification(mut classification) => {
                classification.notes = normalize_optional_text(classification.notes);
                Self::UpsertClassification { classification }
            }
            Intent::UpsertIssue(draft) => Self::UpsertIssue {
                issue: draft.stamp(clock.now()),
            },
            Intent::UpsertNote(draft) => Self::UpsertNote {
                note: draft.stamp(clock.now()),
            },
            Intent::UpsertPricing(draft) => Self::UpsertPricing {
                pricing: draft.stamp(clock.now()),
            },
            Intent::DeleteFixture(fixture_id) => Self::DeleteFixture { fixture_id },
            Intent::DeleteMapping(mapping_id) => Self::DeleteMapping { mapping_id },
            Intent::DeleteNote(note_id) => Self::DeleteNote { note_id },
        }
    }

    /// Returns the action name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpsertCompetition { .. } => "UpsertCompetition",
            Self::UpsertTeam { .. } => "UpsertTeam",
            Self::UpsertPlayer { .. } => "UpsertPlayer",
            Self::UpsertFixture { .. } => "UpsertFixture",
            Self::UpsertMapping { .. } => "UpsertMapping",
            Self::UpsertClassification { .. } => "UpsertClassification",
            Self::UpsertIssue { .. } => "UpsertIssue",
            Self::UpsertNote { .. } => "UpsertNote",
            Self::UpsertPricing { .. } => "UpsertPricing",
            Self::DeleteFixture { .. } => "DeleteFixture",
            Self::DeleteMapping { .. } => "DeleteMapping",
            Self::DeleteNote { .. } => "DeleteNote",
        }
    }

    /// Returns the collection this command targets.
    #[must_use]
    pub const fn entity(&self) -> EntityKind {
        match self {
            Self::UpsertCompetition { .. } => EntityKind::Competition,
            Self::UpsertTeam { .. } => EntityKind::Team,
            Self::UpsertPlayer { .. } => EntityKind::Player,
            Self::UpsertFixture { .. } | Self::DeleteFixture { .. } => EntityKind::Fixture,
            Self::UpsertMapping { .. } | Self::DeleteMapping { .. } => EntityKind::Mapping,
            Self::UpsertClassification { .. } => EntityKind::Classification,
            Self::UpsertIssue { .. } => EntityKind::Issue,
            Self::UpsertNote { .. } | Self::DeleteNote { .. } => EntityKind::Note,
            Self::UpsertPricing { .. } => EntityKind::Pricing,
        }
    }

    /// Returns the identifier of the record this command writes or deletes.
    #[must_use]
    pub fn record_id(&self) -> &str {
        match self {
            Self::UpsertCompetition { competition } => &competition.id,
            Self::UpsertTeam { team } => &team.id,
            Self::UpsertPlayer { player } => &player.id,
            Self::UpsertFixture { fixture } => &fixture.id,
            Self::UpsertMapping { mapping } => &mapping.id,
            Self::UpsertClassification { classification } => &classification.id,
            Self::UpsertIssue { issue } => &issue.id,
            Self::UpsertNote { note } => &note.id,
            Self::UpsertPricing { pricing } => &pricing.id,
            Self::DeleteFixture { fixture_id } => fixture_id,
            Self::DeleteMapping { mapping_id } => mapping_id,
            Self::DeleteNote { note_id } => note_id,
        }
    }
}
