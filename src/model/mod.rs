//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so the
//! service layer never handles raw database rows.

pub mod registration;
