//! Closed value sets used by FACEIT resources and request parameters, and the resource
//! shapes themselves (see [`response`]).
//!
//! Every enum here is string-backed. Deserializing a value outside the set is a
//! materialization failure ([`SchemaErrorKind::InvalidEnumValue`]): an unrecognized value
//! means the API schema moved and the caller must hear about it.
//!
//! [`SchemaErrorKind::InvalidEnumValue`]: crate::error::SchemaErrorKind::InvalidEnumValue

use serde::{Deserialize, Serialize};

mod country;
mod game;
pub mod response;

pub use country::Country;
pub use game::Game;

/// A FACEIT matchmaking region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Region {
    /// Europe.
    #[serde(rename = "EU")]
    #[strum(serialize = "EU")]
    Eu,
    /// North America.
    #[serde(rename = "US")]
    #[strum(serialize = "US")]
    Us,
    /// South-east Asia.
    #[serde(rename = "SEA")]
    #[strum(serialize = "SEA")]
    Sea,
    /// Oceania.
    #[serde(rename = "Oceania")]
    #[strum(serialize = "Oceania")]
    Oceania,
    /// South America.
    #[serde(rename = "SA")]
    #[strum(serialize = "SA")]
    Sa,
}

/// Match state filter for championship, hub and tournament queries.
///
/// Default is [`All`](Self::All).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum MatchType {
    /// Every match regardless of state (default).
    #[default]
    All,
    /// Scheduled but not started.
    Upcoming,
    /// In progress.
    Ongoing,
    /// Finished.
    Past,
}

/// Which related resources the API should embed inline in a championship, hub or
/// tournament response.
///
/// [`None`](Self::None) is the default and is omitted from the query string.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Expansion {
    /// No expansion (default).
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    None,
    /// Embed the organizer as `organizer_data`.
    Organizer,
    /// Embed the game as `game_data`.
    Game,
}

impl Expansion {
    /// Whether this is [`Expansion::None`]. Used to skip the `expanded` query parameter.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
