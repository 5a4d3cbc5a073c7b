// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operational summary metrics.
//!
//! Metrics are **computed**, not stored. Every function is a pure projection
//! of the snapshot it is given; there are no counters to keep in sync.

use crate::state::Snapshot;
use fixture_desk_domain::{FixtureStatus, MappingStatus, MarketStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Rounds `part / total` to a whole percentage, halves rounding up.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let part: u128 = part as u128;
    let total: u128 = total as u128;
    let rounded: u128 = (part * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Counts distinct fixtures that have at least one `complete` mapping.
#[must_use]
pub fn mapped_fixture_count(snapshot: &Snapshot) -> usize {
    snapshot
        .mappings
        .iter()
        .filter(|mapping| mapping.status == MappingStatus::Complete)
        .map(|mapping| mapping.fixture_id.as_str())
        .collect::<HashSet<&str>>()
        .len()
}

/// Percentage of fixtures confirmed with at least one bookmaker.
#[must_use]
pub fn mapping_coverage(snapshot: &Snapshot) -> u32 {
    percent(mapped_fixture_count(snapshot), snapshot.fixtures.len())
}

/// Counts critical and high severity issues across all fixtures.
#[must_use]
pub fn high_priority_issue_count(snapshot: &Snapshot) -> usize {
    snapshot
        .issues
        .iter()
        .filter(|issue| issue.severity.is_high_priority())
        .count()
}

/// Counts classifications whose markets are ready to price.
#[must_use]
pub fn pricing_ready_count(snapshot: &Snapshot) -> usize {
    snapshot
        .classifications
        .iter()
        .filter(|classification| classification.market_status == MarketStatus::Ready)
        .count()
}

/// Percentage of fixtures with a `ready` classification.
#[must_use]
pub fn pricing_ready_coverage(snapshot: &Snapshot) -> u32 {
    percent(pricing_ready_count(snapshot), snapshot.fixtures.len())
}

/// Counts fixtures that have not started yet.
#[must_use]
pub fn scheduled_count(snapshot: &Snapshot) -> usize {
    snapshot
        .fixtures
        .iter()
        .filter(|fixture| fixture.status == FixtureStatus::Scheduled)
        .count()
}

/// All headline metrics for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSummary {
    pub fixture_count: usize,
    pub scheduled_count: usize,
    pub mapped_fixture_count: usize,
    pub mapping_coverage: u32,
    pub pricing_ready_count: usize,
    pub pricing_ready_coverage: u32,
    pub high_priority_issue_count: usize,
}

impl OperationalSummary {
    /// Computes every metric from `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            fixture_count: snapshot.fixtures.len(),
            scheduled_count: scheduled_count(snapshot),
            mapped_fixture_count: mapped_fixture_count(snapshot),
            mapping_coverage: mapping_coverage(snapshot),
            pricing_ready_count: pricing_ready_count(snapshot),
            pricing_ready_coverage: pricing_ready_coverage(snapshot),
            high_priority_issue_count: high_priority_issue_count(snapshot),
        }
    }
}

impl std::fmt::Display for OperationalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Fixtures scheduled:   {} upcoming fixtures requiring monitoring",
            self.scheduled_count
        )?;
        writeln!(
            f,
            "Mapping coverage:     {}% ({}/{} fixtures confirmed with bookmakers)",
            self.mapping_coverage, self.mapped_fixture_count, self.fixture_count
        )?;
        writeln!(
            f,
            "Pricing ready:        {} ({}% of fixtures have classifications)",
            self.pricing_ready_count, self.pricing_ready_coverage
        )?;
        if self.high_priority_issue_count == 0 {
            write!(f, "High priority issues: 0 (all clear across priority fixtures)")
        } else {
            write!(
                f,
                "High priority issues: {} (urgent attention required)",
                self.high_priority_issue_count
            )
        }
    }
}
