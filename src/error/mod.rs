//! Error types and reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Command handlers turn it
//! into a user-facing reply through `bot::reply`, logging anything that is not a
//! business-rule failure.

pub mod config;
pub mod internal;
pub mod mail;
pub mod registration;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, mail::MailError,
    registration::RegistrationError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Business-rule failure of the registration or blacklist services.
    ///
    /// These are expected outcomes and are rendered to the user with a specific message.
    #[error(transparent)]
    RegistrationErr(#[from] RegistrationError),

    /// Invariant violation inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Notification gateway error outside of a registration (e.g. transport setup).
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the business-rule failure wrapped by this error, if any.
    pub fn as_registration(&self) -> Option<&RegistrationError> {
        match self {
            Self::RegistrationErr(err) => Some(err),
            _ => None,
        }
    }
}
