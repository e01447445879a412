//! Business logic for registration and blacklist management.
//!
//! Services are generic over the SeaORM connection so that command handlers can pass an
//! open transaction and commit or roll back after their own side effects. Each service
//! still wraps its multi-step sequences in a nested transaction (a savepoint when the
//! caller already holds one), so calling it on a plain `DatabaseConnection` is safe too.

pub mod blacklist;
pub mod registration;

#[cfg(test)]
mod test;
