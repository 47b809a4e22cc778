//! SeaORM entity models for every resource exposed through the legacy facade.
//!
//! Every table uses a `Uuid` primary key assigned at creation. Legacy clients never
//! see these identifiers directly; they receive a small integer derived from them.

pub mod prelude;

pub mod address;
pub mod category;
pub mod faq;
pub mod repair_request;
pub mod ticket;
pub mod wallet_transaction;
pub mod zone;
