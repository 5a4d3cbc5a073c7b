// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// A record stored in one of the snapshot collections.
///
/// Identifiers are caller-supplied and immutable; two records with the same
/// id in the same collection are the same logical record.
pub trait Record {
    /// Returns the record identifier.
    fn id(&self) -> &str;
}

/// A record owned by a fixture and removed when that fixture is deleted.
pub trait FixtureScoped: Record {
    /// Returns the identifier of the owning fixture.
    fn fixture_id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

macro_rules! impl_fixture_scoped {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixtureScoped for $ty {
                fn fixture_id(&self) -> &str {
                    &self.fixture_id
                }
            }
        )*
    };
}

/// Generates `as_str`, `Display` and `FromStr` for a kebab-case enum.
macro_rules! string_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),* $(,)? }) => {
        impl $name {
            /// Returns the serialized representation of this value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)*
                    _ => Err(DomainError::UnknownVariant {
                        kind: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// The snapshot collections, named as they appear in the persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Sport,
    Bookmaker,
    Competition,
    Team,
    Player,
    Fixture,
    Mapping,
    Classification,
    Issue,
    Note,
    Pricing,
}

impl EntityKind {
    /// Returns the collection name used in the persisted document.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Sport => "sports",
            Self::Bookmaker => "bookmakers",
            Self::Competition => "competitions",
            Self::Team => "teams",
            Self::Player => "players",
            Self::Fixture => "fixtures",
            Self::Mapping => "mappings",
            Self::Classification => "classifications",
            Self::Issue => "issues",
            Self::Note => "notes",
            Self::Pricing => "pricing",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}

/// A sport, e.g. football or basketball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub id: String,
    /// Short code used for styling and feeds (e.g. `FOOT`).
    pub code: String,
    pub name: String,
}

/// A bookmaker whose fixtures are mapped and priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmaker {
    pub id: String,
    pub name: String,
    pub region: String,
}

/// The level a competition is played at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompetitionTier {
    #[default]
    Professional,
    SemiProfessional,
    International,
    Youth,
}

string_enum!(CompetitionTier, "competition tier", {
    Professional => "professional",
    SemiProfessional => "semi-professional",
    International => "international",
    Youth => "youth",
});

/// A league, cup or tournament within a sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub sport_id: String,
    pub name: String,
    pub region: String,
    pub tier: CompetitionTier,
    /// Season label, e.g. `2024/25`.
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_body: Option<String>,
}

/// A team, which may take part in several competitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub sport_id: String,
    pub competition_ids: Vec<String>,
    pub name: String,
    pub short_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_venue: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    #[default]
    Active,
    Injured,
    Suspended,
    Retired,
}

string_enum!(PlayerStatus, "player status", {
    Active => "active",
    Injured => "injured",
    Suspended => "suspended",
    Retired => "retired",
});

/// A player registered with a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub position: String,
    pub nationality: String,
    /// ISO calendar date (`YYYY-MM-DD`), kept as entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub status: PlayerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    InProgress,
    Delayed,
    Postponed,
    Cancelled,
    Completed,
}

string_enum!(FixtureStatus, "fixture status", {
    Scheduled => "scheduled",
    InProgress => "in-progress",
    Delayed => "delayed",
    Postponed => "postponed",
    Cancelled => "cancelled",
    Completed => "completed",
});

/// Which data products are available for a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub feed: bool,
    pub streams: bool,
    pub tracking: bool,
}

impl Default for Coverage {
    fn default() -> Self {
        Self {
            feed: true,
            streams: true,
            tracking: false,
        }
    }
}

/// A scheduled event between two teams within a competition.
///
/// `home_team_id != away_team_id` is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub sport_id: String,
    pub competition_id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub venue: String,
    #[serde(with = "time::serde::rfc3339")]
    pub kick_off: OffsetDateTime,
    pub status: FixtureStatus,
    pub coverage: Coverage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MappingStatus {
    Complete,
    #[default]
    Pending,
    Issue,
    NeedsReview,
}

string_enum!(MappingStatus, "mapping status", {
    Complete => "complete",
    Pending => "pending",
    Issue => "issue",
    NeedsReview => "needs-review",
});

/// A bookmaker's external identifier and market coverage for a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureMapping {
    pub id: String,
    pub fixture_id: String,
    pub bookmaker_id: String,
    pub external_fixture_id: String,
    pub markets_covered: Vec<String>,
    pub status: MappingStatus,
    /// Match confidence in `[0, 1]`; clamping is the producer's job.
    pub confidence: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_synced: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

string_enum!(RiskLevel, "risk level", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MarketStatus {
    Ready,
    #[default]
    NeedsPricing,
    AwaitingConfirmation,
}

string_enum!(MarketStatus, "market status", {
    Ready => "ready",
    NeedsPricing => "needs-pricing",
    AwaitingConfirmation => "awaiting-confirmation",
});

/// The pricing template, lead trader, and readiness for a fixture.
///
/// Producers keep at most one per fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketClassification {
    pub id: String,
    pub fixture_id: String,
    pub template: String,
    pub pricing_lead: String,
    pub risk_level: RiskLevel,
    pub market_status: MarketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Issue severity, ordered from most to least urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

string_enum!(Severity, "severity", {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl Severity {
    /// Critical and high issues count towards the high-priority metric.
    #[must_use]
    pub const fn is_high_priority(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

/// An operational problem detected on a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationIssue {
    pub id: String,
    pub fixture_id: String,
    pub severity: Severity,
    pub message: String,
    pub suggested_action: String,
    #[serde(with = "time::serde::rfc3339")]
    pub detected_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CollaborationTeam {
    Trading,
    #[default]
    Operations,
    Integrity,
    Engineering,
    Risk,
}

string_enum!(CollaborationTeam, "collaboration team", {
    Trading => "trading",
    Operations => "operations",
    Integrity => "integrity",
    Engineering => "engineering",
    Risk => "risk",
});

/// A message left on a fixture by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationNote {
    pub id: String,
    pub fixture_id: String,
    pub author: String,
    pub team: CollaborationTeam,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub message: String,
}

/// A recorded price for one selection of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSnapshot {
    pub id: String,
    pub fixture_id: String,
    pub bookmaker_id: String,
    pub market: String,
    pub selection: String,
    /// Decimal odds.
    pub price: f64,
    pub probability: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl_record!(
    Sport,
    Bookmaker,
    Competition,
    Team,
    Player,
    Fixture,
    FixtureMapping,
    MarketClassification,
    OperationIssue,
    CollaborationNote,
    PricingSnapshot,
);

impl_fixture_scoped!(
    FixtureMapping,
    MarketClassification,
    OperationIssue,
    CollaborationNote,
    PricingSnapshot,
);
