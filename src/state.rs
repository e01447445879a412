//! Shared application state handed to the Discord event handler.
//!
//! Built once at startup. Every field is cheap to clone: the database connection is a
//! pool handle and the mailer and configuration are reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, mail::TokenMailer};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the registration and blacklist tables.
    pub db: DatabaseConnection,

    /// Notification gateway used to deliver registration tokens.
    pub mailer: Arc<dyn TokenMailer>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn TokenMailer>, config: Config) -> Self {
        Self {
            db,
            mailer,
            config: Arc::new(config),
        }
    }
}
