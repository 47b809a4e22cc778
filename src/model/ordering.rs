//! Ordering primitives declared by resource adapters.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl From<SortDir> for sea_orm::Order {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => sea_orm::Order::Asc,
            SortDir::Desc => sea_orm::Order::Desc,
        }
    }
}

/// One internal sort column and its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderKey<C> {
    pub column: C,
    pub dir: SortDir,
}

impl<C> OrderKey<C> {
    pub fn asc(column: C) -> Self {
        Self {
            column,
            dir: SortDir::Asc,
        }
    }

    pub fn desc(column: C) -> Self {
        Self {
            column,
            dir: SortDir::Desc,
        }
    }
}

/// How a resource treats ordering names missing from its [`OrderingMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Ignore unknown names; fall back to the default order if nothing valid remains.
    DropSilently,
    /// Fail the whole request with a validation error naming every unknown field.
    Reject,
}

/// External (legacy) ordering names mapped to internal columns.
///
/// Lookups are case-insensitive; names are stored lowercased.
#[derive(Clone, Debug)]
#[must_use]
pub struct OrderingMap<C> {
    entries: Vec<(String, C)>,
}

impl<C> Default for OrderingMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OrderingMap<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(mut self, external: impl Into<String>, column: C) -> Self {
        self.entries.push((external.into().to_lowercase(), column));
        self
    }

    pub fn get(&self, external: &str) -> Option<&C> {
        let needle = external.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, column)| column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
