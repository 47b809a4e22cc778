//! Read-only database access for resources behind the legacy API.
//!
//! Repositories here are generic over a `ResourceAdapter` and use its SeaORM entity
//! directly. They never write; records are owned by the rest of the application.

pub mod candidates;
pub mod repository;
