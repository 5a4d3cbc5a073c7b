// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::diesel_schema::documents;
use crate::error::PersistenceError;

/// Stores `body` under `key`, replacing any previous body in one statement.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_document(
    conn: &mut SqliteConnection,
    key: &str,
    body: &str,
) -> Result<(), PersistenceError> {
    let updated_at: String = OffsetDateTime::now_utc().format(&Rfc3339)?;

    diesel::replace_into(documents::table)
        .values((
            documents::key.eq(key),
            documents::body.eq(body),
            documents::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;

    debug!(key, bytes = body.len(), "Document written");
    Ok(())
}

/// Removes the document stored under `key`.
///
/// Returns whether a document was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_document(conn: &mut SqliteConnection, key: &str) -> Result<bool, PersistenceError> {
    let removed: usize =
        diesel::delete(documents::table.filter(documents::key.eq(key))).execute(conn)?;
    Ok(removed > 0)
}
