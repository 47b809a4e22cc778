//! Request and response models shared by every resource.
//!
//! These types are the normalized representation of what legacy clients send
//! (`SearchSpec`) and receive (`PageEnvelope`, `LegacyId`, `ErrorDto`), plus the
//! ordering and paging primitives resource adapters declare their policies with.

pub mod api;
pub mod legacy_id;
pub mod ordering;
pub mod page;
pub mod search;
