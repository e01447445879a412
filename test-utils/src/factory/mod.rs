//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
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
//!     // Pending registration with generated identity, email and token
//!     let pending = factory::create_pending(&db).await?;
//!
//!     // Blacklisted address
//!     factory::create_blacklist_entry(&db, "bad@gmail.com").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::registration::RegistrationStatus;
//! use test_utils::factory::registration::RegistrationFactory;
//!
//! let registered = RegistrationFactory::new(&db)
//!     .discord_id("123456789")
//!     .email("someone@gmail.com")
//!     .status(RegistrationStatus::Registered)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `registration` - Create registration rows
//! - `blacklist` - Create blacklist entries
//! - `helpers` - Unique ID generation shared by factories

pub mod blacklist;
pub mod helpers;
pub mod registration;

pub use blacklist::create_blacklist_entry;
pub use registration::{create_pending, create_registered};
