// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod metrics;
mod projection;
mod seed;
mod state;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_checked};
pub use command::{Command, Intent};
pub use error::CoreError;
pub use metrics::{
    OperationalSummary, high_priority_issue_count, mapped_fixture_count, mapping_coverage,
    percent, pricing_ready_count, pricing_ready_coverage, scheduled_count,
};
pub use projection::{FixtureDetail, FixtureRow, UNKNOWN_LABEL};
pub use seed::default_snapshot;
pub use state::Snapshot;
pub use validation::validate_command;
