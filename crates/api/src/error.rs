// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the store.

use fixture_desk::CoreError;
use thiserror::Error;

/// Errors returned by [`crate::Store`].
///
/// Persistence failures after a mutation are logged by the writer and never
/// surface here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The command was rejected by strict reference checking.
    #[error("Command rejected: {0}")]
    Rejected(#[from] CoreError),

    /// The snapshot writer thread could not be started.
    #[error("Failed to start snapshot writer: {0}")]
    WriterSpawn(#[from] std::io::Error),

    /// The snapshot writer thread panicked before it could be joined.
    #[error("Snapshot writer terminated abnormally")]
    WriterPanicked,
}
