//! SeaORM entity models for the registrar database.
//!
//! Generated in the shape of `sea-orm-cli generate entity` output and kept in sync with
//! the `migration` crate by hand.

pub mod prelude;

pub mod blacklist;
pub mod registration;
