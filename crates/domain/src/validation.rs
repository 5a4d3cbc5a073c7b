// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use crate::types::EntityKind;

/// Validates that a record identifier is present.
///
/// # Errors
///
/// Returns `ValidationError::EmptyIdentifier` if `id` is empty or whitespace.
pub fn validate_identifier(entity: EntityKind, id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier { entity });
    }
    Ok(())
}

/// A foreign key carried by a record, checked against the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    /// The serialized field name holding the reference.
    pub field: &'static str,
    /// The collection the reference resolves in.
    pub target: EntityKind,
    /// The referenced identifier.
    pub target_id: &'a str,
}

impl<'a> Reference<'a> {
    #[must_use]
    pub const fn new(field: &'static str, target: EntityKind, target_id: &'a str) -> Self {
        Self {
            field,
            target,
            target_id,
        }
    }
}

/// Validates that every reference resolves.
///
/// `resolves` answers whether an id exists in a collection; the first
/// reference it rejects is reported.
///
/// # Errors
///
/// Returns `ValidationError::DanglingReference` for the first unresolved
/// reference.
pub fn validate_references<F>(
    entity: EntityKind,
    id: &str,
    references: &[Reference<'_>],
    resolves: F,
) -> Result<(), ValidationError>
where
    F: Fn(EntityKind, &str) -> bool,
{
    for reference in references {
        if !resolves(reference.target, reference.target_id) {
            return Err(ValidationError::DanglingReference {
                entity,
                id: id.to_string(),
                field: reference.field,
                target: reference.target,
                target_id: reference.target_id.to_string(),
            });
        }
    }
    Ok(())
}
