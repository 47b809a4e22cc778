//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting resource rows with sensible
//! defaults, reducing boilerplate in tests. Every factory assigns a fresh random
//! canonical identifier unless one is supplied explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (category, ticket) = factory::helpers::create_ticket_with_category(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let faq = factory::faq::FaqFactory::new(&db)
//!     .question("How do I reset my password?")
//!     .position(3)
//!     .build()
//!     .await?;
//! ```

pub mod address;
pub mod category;
pub mod faq;
pub mod helpers;
pub mod repair_request;
pub mod ticket;
pub mod wallet_transaction;
pub mod zone;

// Re-export commonly used factory functions for concise usage
pub use address::create_address;
pub use category::create_category;
pub use faq::create_faq;
pub use repair_request::create_repair_request;
pub use ticket::create_ticket;
pub use wallet_transaction::create_wallet_transaction;
pub use zone::create_zone;
