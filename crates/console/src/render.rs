// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of the snapshot.

use std::fmt::Write;

use fixture_desk::{FixtureDetail, FixtureRow, UNKNOWN_LABEL};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

/// Formats an instant in UTC, e.g. `2024-09-14 15:00 UTC`.
#[must_use]
pub fn timestamp(at: OffsetDateTime) -> String {
    let utc: OffsetDateTime = at.to_offset(UtcOffset::UTC);
    utc.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| utc.to_string())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Renders the fixtures table, earliest kick-off first.
#[must_use]
pub fn fixtures_table(rows: &[FixtureRow<'_>]) -> String {
    let mut out: String = format!(
        "{:<22} {:<20} {:<12} {:>5} {:<22} {:<9}\n",
        "KICK-OFF", "MATCH", "STATUS", "BOOKS", "MARKETS", "ISSUE"
    );
    for row in rows {
        let market: &str = row
            .classification
            .map_or("unclassified", |classification| {
                classification.market_status.as_str()
            });
        let issue: &str = row
            .highest_severity()
            .map_or("-", |severity| severity.as_str());
        let _ = writeln!(
            out,
            "{:<22} {:<20} {:<12} {:>5} {:<22} {:<9}",
            timestamp(row.fixture.kick_off),
            row.matchup(),
            row.fixture.status.as_str(),
            row.bookmaker_count(),
            market,
            issue
        );
    }
    if rows.is_empty() {
        out.push_str("(no fixtures)\n");
    }
    out
}

/// Renders everything known about one fixture.
#[must_use]
pub fn fixture_detail(detail: &FixtureDetail<'_>) -> String {
    let fixture = detail.fixture;
    let mut out: String = String::new();

    let _ = writeln!(out, "{} ({})", detail.matchup(), fixture.id);
    let _ = writeln!(
        out,
        "Sport:        {}",
        detail.sport.map_or(UNKNOWN_LABEL, |sport| sport.name.as_str())
    );
    let _ = writeln!(
        out,
        "Competition:  {}",
        detail
            .competition
            .map_or(UNKNOWN_LABEL, |competition| competition.name.as_str())
    );
    let _ = writeln!(out, "Kick-off:     {}", timestamp(fixture.kick_off));
    let _ = writeln!(out, "Venue:        {}", fixture.venue);
    let _ = writeln!(out, "Status:       {}", fixture.status);
    let _ = writeln!(
        out,
        "Coverage:     feed {}, streams {}, tracking {}",
        yes_no(fixture.coverage.feed),
        yes_no(fixture.coverage.streams),
        yes_no(fixture.coverage.tracking)
    );
    if let Some(notes) = &fixture.notes {
        let _ = writeln!(out, "Notes:        {notes}");
    }

    match detail.classification {
        Some(classification) => {
            let _ = writeln!(
                out,
                "Markets:      {} ({} template, {} risk, lead {})",
                classification.market_status,
                classification.template,
                classification.risk_level,
                classification.pricing_lead
            );
        }
        None => {
            let _ = writeln!(out, "Markets:      unclassified");
        }
    }

    let _ = writeln!(out, "\nMappings ({}):", detail.mappings.len());
    for mapping in &detail.mappings {
        let _ = writeln!(
            out,
            "  {} {} -> {} [{}] confidence {:.0}%",
            mapping.id,
            mapping.bookmaker_id,
            mapping.external_fixture_id,
            mapping.status,
            mapping.confidence * 100.0
        );
        for issue in mapping.issues.iter().flatten() {
            let _ = writeln!(out, "    ! {issue}");
        }
    }

    let _ = writeln!(out, "\nIssues ({}):", detail.issues.len());
    for issue in &detail.issues {
        let _ = writeln!(
            out,
            "  [{}] {} ({}), {}",
            issue.severity,
            issue.message,
            timestamp(issue.detected_at),
            issue.suggested_action
        );
    }

    let _ = writeln!(out, "\nNotes ({}):", detail.notes.len());
    for note in &detail.notes {
        let _ = writeln!(
            out,
            "  {} / {} at {}: {}",
            note.author,
            note.team,
            timestamp(note.created_at),
            note.message
        );
    }

    let _ = writeln!(out, "\nPricing ({}):", detail.pricing.len());
    for pricing in &detail.pricing {
        let _ = writeln!(
            out,
            "  {} {} {} @ {:.2} (p={:.2})",
            pricing.bookmaker_id,
            pricing.market,
            pricing.selection,
            pricing.price,
            pricing.probability
        );
    }

    out
}
