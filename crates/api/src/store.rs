// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;
use std::thread::JoinHandle;

use fixture_desk::{
    Command, CoreError, Intent, OperationalSummary, Snapshot, apply, apply_checked,
};
use fixture_desk_domain::{
    Clock, Competition, Fixture, IssueDraft, MappingDraft, MarketClassification, NoteDraft,
    Player, PricingDraft, Team,
};
use fixture_desk_persistence::Persistence;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::writer::{SnapshotQueue, spawn_writer};

/// The single owner of the operator snapshot.
///
/// Readers get an `Arc<Snapshot>` that never changes underneath them. Each
/// mutation computes the next snapshot, publishes it to every subscriber in
/// one replace, and queues it for the background writer. Mutations are
/// serialised: one is fully applied before the next starts.
///
/// Dropping the store waits for queued snapshots exactly as [`Store::close`]
/// does.
pub struct Store {
    state: watch::Sender<Arc<Snapshot>>,
    queue: Option<SnapshotQueue>,
    writer: Option<JoinHandle<Persistence>>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Loads the stored snapshot and starts the background writer.
    ///
    /// The snapshot document is read under `config.storage_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer thread cannot be started.
    pub fn open(
        persistence: Persistence,
        config: StoreConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let mut persistence: Persistence = persistence.with_storage_key(config.storage_key.clone());
        let snapshot: Snapshot = persistence.load_snapshot();
        info!(
            key = %config.storage_key,
            strict = config.strict_references,
            fixtures = snapshot.fixtures.len(),
            "Store opened"
        );

        let (queue, writer) = spawn_writer(persistence)?;
        let (state, _) = watch::channel(Arc::new(snapshot));

        Ok(Self {
            state,
            queue: Some(queue),
            writer: Some(writer),
            clock,
            config,
        })
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.borrow())
    }

    /// Returns a receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.state.subscribe()
    }

    /// Computes the headline metrics for the current snapshot.
    #[must_use]
    pub fn summary(&self) -> OperationalSummary {
        OperationalSummary::from_snapshot(&self.snapshot())
    }

    /// Stamps an intent with the store clock and applies it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if strict references are enabled and
    /// the command does not validate. The snapshot is unchanged in that case.
    pub fn dispatch(&self, intent: Intent) -> Result<(), StoreError> {
        let command: Command = Command::from_intent(intent, self.clock.as_ref());
        self.execute(command)
    }

    /// Applies a fully-formed command.
    ///
    /// A command that leaves the snapshot unchanged (for example deleting an
    /// unknown id) publishes nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if strict references are enabled and
    /// the command does not validate.
    pub fn execute(&self, command: Command) -> Result<(), StoreError> {
        let name: &'static str = command.name();
        let record_id: String = command.record_id().to_string();
        let strict: bool = self.config.strict_references;
        let mut rejection: Option<CoreError> = None;

        let changed: bool = self.state.send_if_modified(|current| {
            let next: Snapshot = if strict {
                match apply_checked(current, command) {
                    Ok(next) => next,
                    Err(e) => {
                        rejection = Some(e);
                        return false;
                    }
                }
            } else {
                apply(current, command)
            };

            if next == **current {
                return false;
            }

            let next: Arc<Snapshot> = Arc::new(next);
            // Queued under the channel lock so writes keep mutation order.
            let queued: bool = self
                .queue
                .as_ref()
                .is_some_and(|queue| queue.send(Arc::clone(&next)).is_ok());
            if !queued {
                warn!(command = name, "Snapshot writer is gone, change not persisted");
            }
            *current = next;
            true
        });

        if let Some(e) = rejection {
            warn!(command = name, id = %record_id, error = %e, "Command rejected");
            return Err(StoreError::Rejected(e));
        }

        if changed {
            debug!(command = name, id = %record_id, "Snapshot updated");
        } else {
            debug!(command = name, id = %record_id, "Command left snapshot unchanged");
        }
        Ok(())
    }

    // ========================================================================
    // Bound operations
    // ========================================================================

    /// Creates or replaces a competition.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_competition(&self, competition: Competition) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertCompetition(competition))
    }

    /// Creates or replaces a team.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_team(&self, team: Team) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertTeam(team))
    }

    /// Creates or replaces a player.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_player(&self, player: Player) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertPlayer(player))
    }

    /// Creates or replaces a fixture.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_fixture(&self, fixture: Fixture) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertFixture(fixture))
    }

    /// Creates or replaces a bookmaker mapping.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_mapping(&self, mapping: MappingDraft) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertMapping(mapping))
    }

    /// Creates or replaces a market classification.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_classification(
        &self,
        classification: MarketClassification,
    ) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertClassification(classification))
    }

    /// Creates or replaces an operational issue.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_issue(&self, issue: IssueDraft) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertIssue(issue))
    }

    /// Creates or replaces a collaboration note.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn upsert_note(&self, note: NoteDraft) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertNote(note))
    }

    /// Records a price observation.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn record_pricing(&self, pricing: PricingDraft) -> Result<(), StoreError> {
        self.dispatch(Intent::UpsertPricing(pricing))
    }

    /// Deletes a fixture and everything it owns.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn delete_fixture(&self, fixture_id: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(Intent::DeleteFixture(fixture_id.into()))
    }

    /// Deletes a single mapping.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn delete_mapping(&self, mapping_id: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(Intent::DeleteMapping(mapping_id.into()))
    }

    /// Deletes a single note.
    ///
    /// # Errors
    ///
    /// See [`Store::dispatch`].
    pub fn delete_note(&self, note_id: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(Intent::DeleteNote(note_id.into()))
    }

    /// Stops accepting mutations, waits for queued snapshots to be written,
    /// and returns the persistence adapter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriterPanicked` if the writer thread panicked.
    pub fn close(mut self) -> Result<Persistence, StoreError> {
        let persistence: Persistence = self
            .shutdown()
            .ok_or(StoreError::WriterPanicked)?
            .map_err(|_| StoreError::WriterPanicked)?;
        info!("Store closed");
        Ok(persistence)
    }

    /// Closes the queue and joins the writer once every queued snapshot has
    /// been saved. Returns `None` if the writer was already joined.
    fn shutdown(&mut self) -> Option<std::thread::Result<Persistence>> {
        drop(self.queue.take());
        self.writer.take().map(JoinHandle::join)
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Some(Err(_)) = self.shutdown() {
            warn!("Snapshot writer panicked before the store was dropped");
        }
    }
}
