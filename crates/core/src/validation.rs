// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strict reference checking for commands.
//!
//! The mutation engine never checks foreign keys on its own: views treat a
//! missing sport, team or fixture as "TBC". Stores that opt into strict
//! references run every command through [`validate_command`] first and
//! reject it whole when a reference does not resolve.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::Snapshot;
use fixture_desk_domain::{EntityKind, Reference, validate_identifier, validate_references};

/// Validates the identifier and references of a command against a snapshot.
///
/// Delete commands only need a non-empty id; deleting an unknown id remains a
/// no-op.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the command's id is empty or any of its
/// references is missing from `snapshot`.
pub fn validate_command(snapshot: &Snapshot, command: &Command) -> Result<(), CoreError> {
    let entity: EntityKind = command.entity();
    let id: &str = command.record_id();
    validate_identifier(entity, id)?;

    let references: Vec<Reference<'_>> = match command {
        Command::UpsertCompetition { competition } => vec![Reference::new(
            "sportId",
            EntityKind::Sport,
            &competition.sport_id,
        )],
        Command::UpsertTeam { team } => {
            let mut references: Vec<Reference<'_>> =
                vec![Reference::new("sportId", EntityKind::Sport, &team.sport_id)];
            references.extend(team.competition_ids.iter().map(|competition_id| {
                Reference::new("competitionIds", EntityKind::Competition, competition_id)
            }));
            references
        }
        Command::UpsertPlayer { player } => {
            vec![Reference::new("teamId", EntityKind::Team, &player.team_id)]
        }
        Command::UpsertFixture { fixture } => vec![
            Reference::new("sportId", EntityKind::Sport, &fixture.sport_id),
            Reference::new(
                "competitionId",
                EntityKind::Competition,
                &fixture.competition_id,
            ),
            Reference::new("homeTeamId", EntityKind::Team, &fixture.home_team_id),
            Reference::new("awayTeamId", EntityKind::Team, &fixture.away_team_id),
        ],
        Command::UpsertMapping { mapping } => vec![
            Reference::new("fixtureId", EntityKind::Fixture, &mapping.fixture_id),
            Reference::new("bookmakerId", EntityKind::Bookmaker, &mapping.bookmaker_id),
        ],
        Command::UpsertClassification { classification } => vec![Reference::new(
            "fixtureId",
            EntityKind::Fixture,
            &classification.fixture_id,
        )],
        Command::UpsertIssue { issue } => {
            vec![Reference::new("fixtureId", EntityKind::Fixture, &issue.fixture_id)]
        }
        Command::UpsertNote { note } => {
            vec![Reference::new("fixtureId", EntityKind::Fixture, &note.fixture_id)]
        }
        Command::UpsertPricing { pricing } => vec![
            Reference::new("fixtureId", EntityKind::Fixture, &pricing.fixture_id),
            Reference::new("bookmakerId", EntityKind::Bookmaker, &pricing.bookmaker_id),
        ],
        Command::DeleteFixture { .. }
        | Command::DeleteMapping { .. }
        | Command::DeleteNote { .. } => Vec::new(),
    };

    validate_references(entity, id, &references, |target, target_id| {
        snapshot.contains(target, target_id)
    })?;
    Ok(())
}
