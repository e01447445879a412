//! SMTP implementation of the token mailer.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{config::SmtpConfig, error::mail::MailError, mail::TokenMailer};

/// Token mailer talking to an SMTP relay over implicit TLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sent_from: Mailbox,
    subject: String,
    body: String,
}

impl SmtpMailer {
    /// Creates the mailer from configuration.
    ///
    /// No connection is opened here; the transport connects lazily on the first send.
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport configured
    /// - `Err(MailError::Address)` - `SMTP_SENT_FROM` is not a valid mailbox
    /// - `Err(MailError::Transport)` - TLS parameters for the relay host could not be built
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sent_from: config.sent_from.parse()?,
            subject: config.subject.clone(),
            body: config.body.clone(),
        })
    }

    /// Assembles the token email without sending it.
    fn build_message(&self, recipients: &[String], token: &str) -> Result<Message, MailError> {
        if recipients.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let mut builder = Message::builder()
            .from(self.sent_from.clone())
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN);

        for recipient in recipients {
            builder = builder.to(recipient.parse()?);
        }

        Ok(builder.body(render_body(&self.body, token))?)
    }
}

#[async_trait]
impl TokenMailer for SmtpMailer {
    async fn send_token(&self, recipients: &[String], token: &str) -> Result<(), MailError> {
        let message = self.build_message(recipients, token)?;

        self.transport.send(message).await?;

        tracing::debug!("Sent registration token to {}", recipients.join(", "));

        Ok(())
    }
}

/// Substitutes the token into the configured body template.
fn render_body(template: &str, token: &str) -> String {
    template.replace("{token}", token)
}
