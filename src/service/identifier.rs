//! Forward and reverse mapping between canonical and legacy identifiers.
//!
//! The forward direction ([`virtualize`]) is a pure hash. The reverse direction has
//! no efficient inverse: [`resolve`] either short-circuits on a canonical identifier
//! or scans a [`CandidateSource`] in store order, virtualizing every candidate until
//! one matches. A [`LegacyIdIndex`] built from one scan makes later lookups O(1).

use async_trait::async_trait;
use md5::{Digest, Md5};
use sea_orm::DbErr;
use std::{collections::HashMap, fmt, ops::ControlFlow, str::FromStr};
use uuid::Uuid;

use crate::{
    model::legacy_id::{LegacyId, LEGACY_ID_MODULUS},
    util::parse::{parse_identifier, RawIdentifier},
};

/// Default number of identifiers read from the store per scan batch.
pub const DEFAULT_SCAN_BATCH_SIZE: u64 = 500;

/// Maps a canonical identifier to its legacy identifier.
///
/// MD5 over the lowercase hyphenated text of `id`, read as a big-endian unsigned
/// 128-bit integer and reduced modulo `2^31 - 1`. Deterministic across processes.
pub fn virtualize(id: Uuid) -> LegacyId {
    let text = id.hyphenated().to_string();
    let digest = Md5::digest(text.as_bytes());

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);

    let reduced = u128::from_be_bytes(bytes) % u128::from(LEGACY_ID_MODULUS);

    LegacyId::from_reduced(reduced as u32)
}

/// Supplies the canonical identifiers a reverse lookup scans, in store order.
///
/// The visitor returns `ControlFlow::Break` to stop the iteration early.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn for_each_candidate(
        &self,
        visit: &mut (dyn FnMut(Uuid) -> ControlFlow<()> + Send),
    ) -> Result<(), DbErr>;
}

#[async_trait]
impl CandidateSource for Vec<Uuid> {
    async fn for_each_candidate(
        &self,
        visit: &mut (dyn FnMut(Uuid) -> ControlFlow<()> + Send),
    ) -> Result<(), DbErr> {
        for id in self {
            if visit(*id).is_break() {
                break;
            }
        }

        Ok(())
    }
}

/// Tie-break applied when several candidates share a legacy identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Return the first match in store order and stop scanning.
    #[default]
    FirstMatch,
    /// Scan every candidate and return the smallest matching canonical identifier.
    /// Collisions are logged.
    SmallestCanonical,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::FirstMatch => write!(f, "first-match"),
            CollisionPolicy::SmallestCanonical => write!(f, "smallest-canonical"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-match" => Ok(CollisionPolicy::FirstMatch),
            "smallest-canonical" => Ok(CollisionPolicy::SmallestCanonical),
            other => Err(format!(
                "expected 'first-match' or 'smallest-canonical', got '{}'",
                other
            )),
        }
    }
}

/// Tuning for reverse lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub batch_size: u64,
    pub collision: CollisionPolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_SCAN_BATCH_SIZE,
            collision: CollisionPolicy::default(),
        }
    }
}

/// Resolves a raw identifier to a canonical identifier.
///
/// # Arguments
/// - `raw` - Identifier as supplied by the client, canonical or legacy
/// - `candidates` - Store-ordered identifiers of the resource, only read for legacy input
/// - `policy` - Tie-break for colliding legacy identifiers
///
/// # Returns
/// - `Ok(Some(Uuid))` - `raw` was canonical (no scan), or a candidate virtualizes to it
/// - `Ok(None)` - `raw` is unrecognized, or no candidate matched
/// - `Err(DbErr)` - The candidate source failed
pub async fn resolve<S>(
    raw: &str,
    candidates: &S,
    policy: CollisionPolicy,
) -> Result<Option<Uuid>, DbErr>
where
    S: CandidateSource + ?Sized,
{
    match parse_identifier(raw) {
        RawIdentifier::Canonical(id) => {
            tracing::debug!(%id, "canonical identifier supplied, skipping scan");
            Ok(Some(id))
        }
        RawIdentifier::Legacy(legacy_id) => scan(legacy_id, candidates, policy).await,
        RawIdentifier::Unrecognized => {
            tracing::debug!(raw, "identifier is neither canonical nor legacy");
            Ok(None)
        }
    }
}

/// Scans `candidates` for the canonical identifier that virtualizes to `target`.
pub async fn scan<S>(
    target: LegacyId,
    candidates: &S,
    policy: CollisionPolicy,
) -> Result<Option<Uuid>, DbErr>
where
    S: CandidateSource + ?Sized,
{
    let mut scanned: u64 = 0;
    let mut matches: Vec<Uuid> = Vec::new();

    candidates
        .for_each_candidate(&mut |id: Uuid| {
            scanned += 1;
            if virtualize(id) == target {
                matches.push(id);
                if policy == CollisionPolicy::FirstMatch {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        })
        .await?;

    let found = match policy {
        CollisionPolicy::FirstMatch => matches.first().copied(),
        CollisionPolicy::SmallestCanonical => {
            if matches.len() > 1 {
                tracing::warn!(
                    legacy_id = %target,
                    candidates = ?matches,
                    "legacy identifier collision, choosing smallest canonical identifier"
                );
            }
            matches.iter().min().copied()
        }
    };

    tracing::debug!(
        legacy_id = %target,
        scanned,
        found = found.is_some(),
        "legacy identifier scan finished"
    );

    Ok(found)
}

/// Precomputed legacy to canonical lookup table.
///
/// Built from one full scan and kept current with [`LegacyIdIndex::insert`] when
/// records are created. Colliding identifiers are kept in [`LegacyIdIndex::collisions`].
#[derive(Clone, Debug, Default)]
pub struct LegacyIdIndex {
    entries: HashMap<LegacyId, Uuid>,
    collisions: Vec<(LegacyId, Uuid)>,
    policy: CollisionPolicy,
}

impl LegacyIdIndex {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            collisions: Vec::new(),
            policy,
        }
    }

    /// Builds an index from every identifier `candidates` yields.
    pub async fn build<S>(candidates: &S, policy: CollisionPolicy) -> Result<Self, DbErr>
    where
        S: CandidateSource + ?Sized,
    {
        let mut ids = Vec::new();
        candidates
            .for_each_candidate(&mut |id: Uuid| {
                ids.push(id);
                ControlFlow::Continue(())
            })
            .await?;

        let mut index = Self::new(policy);
        for id in ids {
            index.insert(id);
        }

        tracing::debug!(
            entries = index.len(),
            collisions = index.collisions.len(),
            "built legacy identifier index"
        );

        Ok(index)
    }

    /// Adds a canonical identifier and returns its legacy identifier.
    ///
    /// On collision the entry kept follows the index's [`CollisionPolicy`]; the other
    /// identifier is recorded as a collision.
    pub fn insert(&mut self, id: Uuid) -> LegacyId {
        let legacy_id = virtualize(id);

        match self.entries.get(&legacy_id).copied() {
            None => {
                self.entries.insert(legacy_id, id);
            }
            Some(existing) if existing == id => {}
            Some(existing) => {
                tracing::warn!(%legacy_id, %existing, %id, "legacy identifier collision");

                let displaced = match self.policy {
                    CollisionPolicy::SmallestCanonical if id < existing => {
                        self.entries.insert(legacy_id, id);
                        existing
                    }
                    _ => id,
                };
                if !self.collisions.contains(&(legacy_id, displaced)) {
                    self.collisions.push((legacy_id, displaced));
                }
            }
        }

        legacy_id
    }

    pub fn get(&self, legacy_id: LegacyId) -> Option<Uuid> {
        self.entries.get(&legacy_id).copied()
    }

    /// Same contract as [`resolve`], answered from the table.
    pub fn resolve(&self, raw: &str) -> Option<Uuid> {
        match parse_identifier(raw) {
            RawIdentifier::Canonical(id) => Some(id),
            RawIdentifier::Legacy(legacy_id) => self.get(legacy_id),
            RawIdentifier::Unrecognized => None,
        }
    }

    /// Identifiers that lost a tie-break, paired with the shared legacy identifier.
    pub fn collisions(&self) -> &[(LegacyId, Uuid)] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
