//! Service layer for the legacy-identifier compatibility layer.
//!
//! The pure components each implement one step of a legacy list or detail request:
//!
//! - **Identifier** (`identifier`) - Canonical to legacy mapping and reverse resolution
//! - **Predicate** (`predicate`) - Keyword search over declared searchable columns
//! - **Ordering** (`ordering`) - Legacy ordering names to internal sort keys
//! - **Envelope** (`envelope`) - Page normalization and the paginated response shape
//!
//! `query::LegacyQueryService` composes them with a `ResourceAdapter` and the data layer.

pub mod envelope;
pub mod identifier;
pub mod ordering;
pub mod predicate;
pub mod query;

#[cfg(test)]
mod test;
