//! Small-integer identifiers exposed by the retired API.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Exclusive upper bound of every legacy identifier, `2^31 - 1`.
pub const LEGACY_ID_MODULUS: u32 = 2_147_483_647;

/// An identifier in the legacy range `0 <= value < 2_147_483_647`.
///
/// Never stored. It is recomputed from the canonical identifier whenever needed and
/// serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct LegacyId(i32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLegacyIdError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is outside the legacy identifier range")]
    OutOfRange(i64),
}

impl LegacyId {
    /// Returns `None` when `value` is negative or not below [`LEGACY_ID_MODULUS`].
    pub fn new(value: i64) -> Option<Self> {
        if (0..i64::from(LEGACY_ID_MODULUS)).contains(&value) {
            i32::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    /// Wraps a value already reduced modulo [`LEGACY_ID_MODULUS`].
    pub(crate) fn from_reduced(value: u32) -> Self {
        debug_assert!(value < LEGACY_ID_MODULUS);
        Self(value as i32)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LegacyId {
    type Err = ParseLegacyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| ParseLegacyIdError::NotAnInteger(trimmed.to_string()))?;

        Self::new(value).ok_or(ParseLegacyIdError::OutOfRange(value))
    }
}

impl TryFrom<i64> for LegacyId {
    type Error = ParseLegacyIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseLegacyIdError::OutOfRange(value))
    }
}

impl From<LegacyId> for i32 {
    fn from(id: LegacyId) -> Self {
        id.0
    }
}
