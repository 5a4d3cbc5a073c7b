// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Background snapshot writer.
//!
//! Runs on a dedicated thread so a slow disk never stalls a mutation. The
//! thread saves snapshots in the order they were queued and exits once every
//! sender has been dropped, handing the adapter back to whoever joins it.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use fixture_desk::Snapshot;
use fixture_desk_persistence::Persistence;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

/// Queue feeding the writer thread.
pub type SnapshotQueue = UnboundedSender<Arc<Snapshot>>;

/// Spawns the writer thread.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_writer(
    persistence: Persistence,
) -> std::io::Result<(SnapshotQueue, JoinHandle<Persistence>)> {
    let (tx, rx) = unbounded_channel();
    let handle: JoinHandle<Persistence> = thread::Builder::new()
        .name(String::from("snapshot-writer"))
        .spawn(move || writer_loop(persistence, rx))?;
    Ok((tx, handle))
}

fn writer_loop(
    mut persistence: Persistence,
    mut rx: UnboundedReceiver<Arc<Snapshot>>,
) -> Persistence {
    info!(key = persistence.storage_key(), "Snapshot writer started");
    let mut saved: u64 = 0;

    while let Some(snapshot) = rx.blocking_recv() {
        match persistence.save_snapshot(&snapshot) {
            Ok(()) => {
                saved += 1;
                debug!(saved, "Snapshot persisted");
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist snapshot");
            }
        }
    }

    info!(saved, "Snapshot writer stopped");
    persistence
}
