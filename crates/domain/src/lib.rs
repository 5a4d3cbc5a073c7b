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

mod clock;
mod draft;
mod error;
mod ids;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::{
    IssueDraft, MappingDraft, NoteDraft, PricingDraft, normalize_optional_text,
    normalize_text_list,
};
pub use error::{DomainError, ValidationError};
pub use ids::generate_id;
pub use types::{
    Bookmaker, CollaborationNote, CollaborationTeam, Competition, CompetitionTier, Coverage,
    EntityKind, Fixture, FixtureMapping, FixtureScoped, FixtureStatus, MappingStatus,
    MarketClassification, MarketStatus, OperationIssue, Player, PlayerStatus, PricingSnapshot,
    Record, RiskLevel, Severity, Sport, Team,
};
pub use validation::{Reference, validate_identifier, validate_references};
