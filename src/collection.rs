//! Paginated collections.
//!
//! [`Collection`] is the base page shape (`start`, `end`, `items`). The three
//! specializations add fields next to those without changing them, and all four implement
//! [`Page`] so callers can treat any of them as a plain page of items.
//!
//! Each item is materialized independently by the element type's own rules, so a failure
//! in one item is reported with its index (e.g. `items[3].country`).

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::envelope::Envelope;
use crate::types::response::Leaderboard;

/// Read access shared by every collection shape.
pub trait Page<T> {
    /// Offset of the first item.
    fn start(&self) -> i64;

    /// Offset one past the last item, as reported by the API.
    fn end(&self) -> i64;

    fn items(&self) -> &[T];

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }
}

/// A page of `T`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize"))]
#[non_exhaustive]
pub struct Collection<T> {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub items: Vec<T>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A page of `T` positioned around one entry, e.g. a player's place in a ranking.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize"))]
#[non_exhaustive]
pub struct RankedCollection<T> {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub items: Vec<T>,
    /// Position of the requested entry within the full ranking.
    pub position: i64,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A page of leaderboard rankings together with the leaderboard they belong to.
///
/// `leaderboard` is required: the API always sends it with a 2xx for this family of
/// endpoints, and its absence fails materialization.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize"))]
#[non_exhaustive]
pub struct LeaderboardCollection<T> {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub items: Vec<T>,
    pub leaderboard: Leaderboard,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A page of `T` restricted to a time window, in Unix seconds.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize"))]
#[non_exhaustive]
pub struct WindowedCollection<T> {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub items: Vec<T>,
    /// Lower bound of the window, from the JSON key `from`. `None` when the body carries no
    /// window, as for a history request sent without `from`/`to`.
    pub from: Option<i64>,
    /// Upper bound of the window.
    pub to: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

impl<T> Page<T> for Collection<T> {
    fn start(&self) -> i64 {
        self.start
    }

    fn end(&self) -> i64 {
        self.end
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Page<T> for RankedCollection<T> {
    fn start(&self) -> i64 {
        self.start
    }

    fn end(&self) -> i64 {
        self.end
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Page<T> for LeaderboardCollection<T> {
    fn start(&self) -> i64 {
        self.start
    }

    fn end(&self) -> i64 {
        self.end
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Page<T> for WindowedCollection<T> {
    fn start(&self) -> i64 {
        self.start
    }

    fn end(&self) -> i64 {
        self.end
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<RankedCollection<T>> for Collection<T> {
    fn from(ranked: RankedCollection<T>) -> Self {
        Self {
            start: ranked.start,
            end: ranked.end,
            items: ranked.items,
            envelope: ranked.envelope,
        }
    }
}

impl<T> From<LeaderboardCollection<T>> for Collection<T> {
    fn from(page: LeaderboardCollection<T>) -> Self {
        Self {
            start: page.start,
            end: page.end,
            items: page.items,
            envelope: page.envelope,
        }
    }
}

impl<T> From<WindowedCollection<T>> for Collection<T> {
    fn from(window: WindowedCollection<T>) -> Self {
        Self {
            start: window.start,
            end: window.end,
            items: window.items,
            envelope: window.envelope,
        }
    }
}
