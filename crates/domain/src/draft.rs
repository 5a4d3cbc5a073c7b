// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Producer-facing record shapes.
//!
//! Mappings, issues, notes and pricing rows may be submitted without a
//! timestamp. The mutation entry point stamps them with its clock before the
//! record reaches the store; the stored types always carry a timestamp.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{
    CollaborationNote, CollaborationTeam, FixtureMapping, MappingStatus, OperationIssue,
    PricingSnapshot, Severity,
};

/// Trims optional free text, dropping it entirely when blank.
#[must_use]
pub fn normalize_optional_text(text: Option<String>) -> Option<String> {
    text.and_then(|value| {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Trims every entry of an optional list, dropping blank entries and the
/// list itself when nothing remains.
#[must_use]
pub fn normalize_text_list(items: Option<Vec<String>>) -> Option<Vec<String>> {
    let kept: Vec<String> = items?
        .into_iter()
        .filter_map(|item| normalize_optional_text(Some(item)))
        .collect();
    if kept.is_empty() { None } else { Some(kept) }
}

/// A mapping whose `last_synced` may still be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingDraft {
    pub id: String,
    pub fixture_id: String,
    pub bookmaker_id: String,
    pub external_fixture_id: String,
    pub markets_covered: Vec<String>,
    pub status: MappingStatus,
    pub confidence: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_synced: Option<OffsetDateTime>,
    #[serde(default)]
    pub issues: Option<Vec<String>>,
}

impl MappingDraft {
    /// Completes the draft, using `now` when `last_synced` is unset.
    #[must_use]
    pub fn stamp(self, now: OffsetDateTime) -> FixtureMapping {
        FixtureMapping {
            id: self.id,
            fixture_id: self.fixture_id,
            bookmaker_id: self.bookmaker_id,
            external_fixture_id: self.external_fixture_id,
            markets_covered: self.markets_covered,
            status: self.status,
            confidence: self.confidence,
            last_synced: self.last_synced.unwrap_or(now),
            issues: normalize_text_list(self.issues),
        }
    }
}

/// An issue whose `detected_at` may still be unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub id: String,
    pub fixture_id: String,
    pub severity: Severity,
    pub message: String,
    pub suggested_action: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub detected_at: Option<OffsetDateTime>,
}

impl IssueDraft {
    /// Completes the draft, using `now` when `detected_at` is unset.
    #[must_use]
    pub fn stamp(self, now: OffsetDateTime) -> OperationIssue {
        OperationIssue {
            id: self.id,
            fixture_id: self.fixture_id,
            severity: self.severity,
            message: self.message,
            suggested_action: self.suggested_action,
            detected_at: self.detected_at.unwrap_or(now),
        }
    }
}

/// A note whose `created_at` may still be unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub id: String,
    pub fixture_id: String,
    pub author: String,
    pub team: CollaborationTeam,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    pub message: String,
}

impl NoteDraft {
    /// Completes the draft, using `now` when `created_at` is unset.
    #[must_use]
    pub fn stamp(self, now: OffsetDateTime) -> CollaborationNote {
        CollaborationNote {
            id: self.id,
            fixture_id: self.fixture_id,
            author: self.author,
            team: self.team,
            created_at: self.created_at.unwrap_or(now),
            message: self.message,
        }
    }
}

/// A pricing row whose `recorded_at` may still be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDraft {
    pub id: String,
    pub fixture_id: String,
    pub bookmaker_id: String,
    pub market: String,
    pub selection: String,
    pub price: f64,
    pub probability: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub recorded_at: Option<OffsetDateTime>,
}

impl PricingDraft {
    /// Completes the draft, using `now` when `recorded_at` is unset.
    #[must_use]
    pub fn stamp(self, now: OffsetDateTime) -> PricingSnapshot {
        PricingSnapshot {
            id: self.id,
            fixture_id: self.fixture_id,
            bookmaker_id: self.bookmaker_id,
            market: self.market,
            selection: self.selection,
            price: self.price,
            probability: self.probability,
            recorded_at: self.recorded_at.unwrap_or(now),
        }
    }
}
