//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory resource models for use
//! in unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let category = fixture::category::entity();
//!
//! // Create with custom fields
//! let ticket = fixture::ticket::entity_builder()
//!     .subject("Broken boiler")
//!     .build();
//! ```

pub mod category;
pub mod ticket;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use ticket::{entity as ticket_entity, entity_builder as ticket_entity_builder};
