// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::Snapshot;
use crate::validation::validate_command;
use fixture_desk_domain::{FixtureScoped, Record};

/// Replaces every record sharing `record`'s id, or prepends it when absent.
///
/// Replacement keeps the stored position; new records go to the front so
/// collections stay newest first.
fn upsert<T: Record + Clone>(collection: &mut Vec<T>, record: T) {
    let mut replaced: bool = false;
    for item in collection.iter_mut() {
        if item.id() == record.id() {
            *item = record.clone();
            replaced = true;
        }
    }
    if !replaced {
        collection.insert(0, record);
    }
}

fn remove_by_id<T: Record>(collection: &mut Vec<T>, id: &str) {
    collection.retain(|item| item.id() != id);
}

fn remove_owned_by<T: FixtureScoped>(collection: &mut Vec<T>, fixture_id: &str) {
    collection.retain(|item| item.fixture_id() != fixture_id);
}

/// Applies a command to a snapshot, producing the next snapshot.
///
/// The function is pure and total: it performs no I/O, never fails, and the
/// input snapshot is left untouched. Deleting an id that does not exist
/// yields a snapshot equal to the input.
///
/// Deleting a fixture also removes every mapping, issue, classification and
/// note whose `fixture_id` matches, in the same transition. Pricing rows are
/// kept: they are the price history for the fixture and outlive it.
///
/// # Arguments
///
/// * `snapshot` - The current snapshot (immutable)
/// * `command` - The command to apply
#[must_use]
pub fn apply(snapshot: &Snapshot, command: Command) -> Snapshot {
    let mut next: Snapshot = snapshot.clone();
    match command {
        Command::UpsertCompetition { competition } => upsert(&mut next.competitions, competition),
        Command::UpsertTeam { team } => upsert(&mut next.teams, team),
        Command::UpsertPlayer { player } => upsert(&mut next.players, player),
        Command::UpsertFixture { fixture } => upsert(&mut next.fixtures, fixture),
        Command::UpsertMapping { mapping } => upsert(&mut next.mappings, mapping),
        Command::UpsertClassification { classification } => {
            upsert(&mut next.classifications, classification);
        }
        Command::UpsertIssue { issue } => upsert(&mut next.issues, issue),
        Command::UpsertNote { note } => upsert(&mut next.notes, note),
        Command::UpsertPricing { pricing } => upsert(&mut next.pricing, pricing),
        Command::DeleteFixture { fixture_id } => {
            remove_by_id(&mut next.fixtures, &fixture_id);
            remove_owned_by(&mut next.mappings, &fixture_id);
            remove_owned_by(&mut next.issues, &fixture_id);
            remove_owned_by(&mut next.classifications, &fixture_id);
            remove_owned_by(&mut next.notes, &fixture_id);
        }
        Command::DeleteMapping { mapping_id } => remove_by_id(&mut next.mappings, &mapping_id),
        Command::DeleteNote { note_id } => remove_by_id(&mut next.notes, &note_id),
    }
    next
}

/// Applies a command after checking that its references resolve.
///
/// Validation runs against the input snapshot before anything is applied, so
/// a rejected command leaves no trace.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the command carries an empty id or a
/// foreign key that does not resolve in `snapshot`.
pub fn apply_checked(snapshot: &Snapshot, command: Command) -> Result<Snapshot, CoreError> {
    validate_command(snapshot, &command)?;
    Ok(apply(snapshot, command))
}
