//! Legacy-identifier compatibility layer.
//!
//! Serves list, search and detail requests for resources whose legacy API exposed
//! small integer identifiers and a fixed paginated envelope, on top of a store keyed
//! by UUIDs.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Identifier virtualization, keyword predicates,
//!   ordering translation, page envelopes and the query service composing them
//! - **Resource Layer** (`resource/`) - One thin adapter per resource declaring its
//!   searchable columns, ordering names and per-endpoint policies
//! - **Data Layer** (`data/`) - Generic read-only repositories and candidate scans
//! - **Model Layer** (`model/`) - Search requests, page envelopes and legacy identifiers
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. The HTTP layer builds a `SearchSpec` or takes a raw identifier from the path
//! 2. `LegacyQueryService<A>` validates paging, ordering and advanced fields
//! 3. Reference filters and detail identifiers are resolved, by fast path or scan
//! 4. The repository counts and fetches the requested page
//! 5. The envelope is rendered with the resource's paging and messages policies

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod resource;
pub mod service;
pub mod startup;
pub mod util;
