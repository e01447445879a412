//! Registrar Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the registrar
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding registration and blacklist rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn registers_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_registration_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
