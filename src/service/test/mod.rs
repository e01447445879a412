use std::sync::Mutex;

use async_trait::async_trait;
use regex::Regex;

use crate::{error::mail::MailError, mail::TokenMailer};

mod blacklist;
mod registration;

/// Mailer that records every delivery instead of talking to SMTP.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(Vec<String>, String)>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(Vec<String>, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_token(&self) -> Option<String> {
        self.sent().last().map(|(_, token)| token.clone())
    }
}

#[async_trait]
impl TokenMailer for RecordingMailer {
    async fn send_token(&self, recipients: &[String], token: &str) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::NoRecipients);
        }

        self.sent
            .lock()
            .unwrap()
            .push((recipients.to_vec(), token.to_string()));

        Ok(())
    }
}

pub fn email_pattern() -> Regex {
    Regex::new(r"^([a-zA-Z0-9]{3,})@gmail\.com$").unwrap()
}
