//! Legacy Facade Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the legacy
//! facade. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders that insert resource rows with sensible defaults
//! - **fixture**: In-memory resource models that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Category;
//!
//! #[tokio::test]
//! async fn test_category_search() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Category)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
