use thiserror::Error;

use crate::error::mail::MailError;

/// Business-rule failures of the registration and blacklist services.
///
/// Each variant maps to exactly one user-facing reply. Variants that describe an identity
/// collision carry the observed state of both parties so the reply can tell a resend apart
/// from a rejection.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Email does not match the configured pattern or is blacklisted.
    #[error("Email {email} is not acceptable for registration")]
    InvalidEmail {
        /// The email as the user typed it
        email: String,
    },

    /// The sender already has a registration row.
    ///
    /// When `sender_pending` is true and the email is either free or held by another
    /// pending row, the old rows were replaced and a fresh token was sent.
    #[error(
        "Discord ID {discord_id} exists (sender pending: {sender_pending}), \
         email exists: {email_exists}, email owner pending: {email_pending:?}"
    )]
    UsernameConflict {
        /// The sender's Discord ID
        discord_id: u64,
        /// Whether another row already uses the requested email
        email_exists: bool,
        /// Whether the sender's own row is still pending
        sender_pending: bool,
        /// State of the row holding the email; `None` when no row holds it
        email_pending: Option<bool>,
    },

    /// The sender has no registration row, but the email is already in use.
    ///
    /// When `email_pending` is true the email was reassigned to the sender and a token was
    /// sent.
    #[error(
        "Discord ID {discord_id} doesn't exist, email exists: {email_exists}, \
         email owner pending: {email_pending}"
    )]
    UnknownUsername {
        /// The sender's Discord ID
        discord_id: u64,
        /// Whether another row already uses the requested email
        email_exists: bool,
        /// Whether the row holding the email is still pending
        email_pending: bool,
    },

    /// Token validation failed; the precise reason is only logged.
    #[error("Validation failed")]
    ValidationFailed,

    /// Deregister was requested for an identity without a registered row.
    #[error("User with ID {discord_id} isn't registered")]
    NotRegistered {
        /// The sender's Discord ID
        discord_id: u64,
    },

    /// At least one email is already blacklisted.
    #[error("Email already in blacklist")]
    BlacklistConflict,

    /// Removing from the blacklist deleted nothing.
    #[error("None of the emails are in the blacklist")]
    BlacklistNotFound,

    /// The token email could not be delivered; the registration was rolled back.
    #[error("Failed to deliver token to {email}: {source}")]
    DeliveryFailed {
        /// Recipient of the failed delivery
        email: String,
        /// The notification gateway failure
        #[source]
        source: MailError,
    },
}

impl RegistrationError {
    /// Whether this outcome still sent a fresh token to the user.
    ///
    /// Pending rows are superseded by a new attempt, so some collisions end in a resend
    /// rather than a rejection.
    pub fn token_resent(&self) -> bool {
        match self {
            Self::UsernameConflict {
                email_exists,
                sender_pending,
                email_pending,
                ..
            } => *sender_pending && (!email_exists || *email_pending == Some(true)),
            Self::UnknownUsername {
                email_exists,
                email_pending,
                ..
            } => *email_exists && *email_pending,
            _ => false,
        }
    }
}
