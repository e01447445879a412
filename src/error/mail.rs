use thiserror::Error;

/// Failures of the notification gateway.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient address could not be parsed.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connecting to or talking with the SMTP server failed.
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// No recipient was supplied.
    #[error("No recipients given")]
    NoRecipients,
}
