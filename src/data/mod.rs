//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for the
//! registration and blacklist tables. Repositories use SeaORM entity models internally and
//! return domain models to keep the service layer free of database types.
//!
//! Repositories are generic over `ConnectionTrait` so the same code runs against the
//! connection pool or inside a transaction opened by the service layer.

pub mod blacklist;
pub mod registration;

#[cfg(test)]
mod test;
