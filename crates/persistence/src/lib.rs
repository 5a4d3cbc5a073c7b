// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Fixture Desk.
//!
//! The whole operator snapshot is stored as one JSON document in a `SQLite`
//! `documents` table, keyed by a storage key. The schema is created by
//! embedded Diesel migrations when the adapter is constructed.
//!
//! ## Loading
//!
//! [`Persistence::load_snapshot`] never fails. A missing document yields the
//! default snapshot. A document that cannot be read or decoded is logged at
//! `warn` level and the default snapshot is used instead. Collections the
//! stored document lacks are filled from the defaults.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, so tests never observe each other's documents.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use fixture_desk::{Snapshot, default_snapshot};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

mod backend;
mod diesel_schema;
mod document;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use document::{decode_snapshot, encode_snapshot};
pub use error::PersistenceError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "fixture_desk_state_v1";

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the snapshot document.
pub struct Persistence {
    conn: SqliteConnection,
    storage_key: String,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_fixture_desk_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self {
            conn,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self {
            conn,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        })
    }

    /// Uses `key` for the snapshot document instead of the default key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Returns the key the snapshot document is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    /// Loads the stored snapshot, falling back to the default snapshot.
    ///
    /// Read and decode failures are logged, never returned.
    pub fn load_snapshot(&mut self) -> Snapshot {
        let body: Option<String> = match self.read_document() {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    key = %self.storage_key,
                    error = %e,
                    "Failed to read stored snapshot, using defaults"
                );
                return default_snapshot();
            }
        };

        let Some(body) = body else {
            info!(key = %self.storage_key, "No stored snapshot, using defaults");
            return default_snapshot();
        };

        match decode_snapshot(&body) {
            Ok(snapshot) => {
                debug!(
                    key = %self.storage_key,
                    fixtures = snapshot.fixtures.len(),
                    "Loaded stored snapshot"
                );
                snapshot
            }
            Err(e) => {
                warn!(
                    key = %self.storage_key,
                    error = %e,
                    "Stored snapshot is unreadable, using defaults"
                );
                default_snapshot()
            }
        }
    }

    /// Replaces the stored snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let body: String = encode_snapshot(snapshot)?;
        self.write_document(&body)
    }

    // ========================================================================
    // Raw document access
    // ========================================================================

    /// Returns the raw stored body, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn read_document(&mut self) -> Result<Option<String>, PersistenceError> {
        queries::documents::read_document(&mut self.conn, &self.storage_key)
    }

    /// Stores `body` verbatim under the storage key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn write_document(&mut self, body: &str) -> Result<(), PersistenceError> {
        mutations::documents::write_document(&mut self.conn, &self.storage_key, body)
    }

    /// Removes the stored document so the next load yields the defaults.
    ///
    /// Returns whether a document was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_document(&mut self) -> Result<bool, PersistenceError> {
        let removed: bool = mutations::documents::delete_document(&mut self.conn, &self.storage_key)?;
        info!(key = %self.storage_key, removed, "Cleared stored snapshot");
        Ok(removed)
    }
}
