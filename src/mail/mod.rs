//! Notification gateway delivering registration tokens.
//!
//! The registration service only depends on the `TokenMailer` trait so the SMTP transport
//! can be swapped out in tests.

pub mod smtp;

use async_trait::async_trait;

use crate::error::mail::MailError;

/// Sends a registration token to one or more addresses.
#[async_trait]
pub trait TokenMailer: Send + Sync {
    /// Delivers `token` to `recipients`.
    ///
    /// # Returns
    /// - `Ok(())` - The SMTP server accepted the message
    /// - `Err(MailError)` - Building or delivering the message failed
    async fn send_token(&self, recipients: &[String], token: &str) -> Result<(), MailError>;
}
