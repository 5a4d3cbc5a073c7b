// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::documents;
use crate::error::PersistenceError;

/// Retrieves the body stored under `key`.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if nothing is stored under `key`.
pub fn read_document(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    debug!(key, "Reading document");

    let body: Option<String> = documents::table
        .filter(documents::key.eq(key))
        .select(documents::body)
        .first::<String>(conn)
        .optional()?;

    Ok(body)
}

