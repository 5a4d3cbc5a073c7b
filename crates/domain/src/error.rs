// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EntityKind;

/// Errors raised while interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string did not name a known enum variant.
    UnknownVariant {
        /// The enum being parsed (e.g. "fixture status").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariant { kind, value } => {
                write!(f, "Unknown {kind}: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors raised by strict reference checking.
///
/// A command that fails validation is rejected whole; the snapshot is never
/// partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The record carries an empty identifier.
    EmptyIdentifier {
        /// The collection the record was destined for.
        entity: EntityKind,
    },
    /// A foreign key does not resolve to an existing record.
    DanglingReference {
        /// The collection of the record being written.
        entity: EntityKind,
        /// The identifier of the record being written.
        id: String,
        /// The field holding the reference (serialized name).
        field: &'static str,
        /// The collection the reference should resolve in.
        target: EntityKind,
        /// The unresolved identifier.
        target_id: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier { entity } => {
                write!(f, "Record for '{entity}' has an empty identifier")
            }
            Self::DanglingReference {
                entity,
                id,
                field,
                target,
                target_id,
            } => {
                write!(
                    f,
                    "Record '{id}' in '{entity}' references unknown {target} '{target_id}' via {field}"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
