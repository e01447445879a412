//! Registration domain models and parameters.
//!
//! Provides the `Record` domain model for a registration row, the `RecordFilter` template
//! used for every lookup, and the parameter types accepted by the registration service.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

pub use entity::registration::RegistrationStatus;

/// One registration attempt for a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Discord ID of the user who registered
    pub discord_id: u64,
    /// Normalized email the token was sent to
    pub email: String,
    /// Token the user must echo back to validate
    pub token: String,
    /// When the registration was submitted
    pub submitted_at: DateTime<Utc>,
    /// Name of the registered role the user asked for
    pub role_kind: String,
    /// Whether the token has been confirmed
    pub status: RegistrationStatus,
}

impl Record {
    /// Converts an entity model to a record domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Record)` - The converted record
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a `u64`
    pub fn from_entity(entity: entity::registration::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            email: entity.email,
            token: entity.token,
            submitted_at: entity.submitted_at,
            role_kind: entity.role_kind,
            status: entity.status,
        })
    }
}

/// Partially populated record used as a conjunctive query template.
///
/// Every field that is set becomes an equality predicate; unset fields are left out of the
/// query entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub discord_id: Option<u64>,
    pub email: Option<String>,
    pub token: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub role_kind: Option<String>,
    pub status: Option<RegistrationStatus>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching the row owned by a Discord user.
    pub fn by_discord_id(discord_id: u64) -> Self {
        Self::new().discord_id(discord_id)
    }

    /// Filter matching the row holding an email.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self::new().email(email)
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.discord_id = Some(discord_id);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }

    pub fn role_kind(mut self, role_kind: impl Into<String>) -> Self {
        self.role_kind = Some(role_kind.into());
        self
    }

    pub fn status(mut self, status: RegistrationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether no field is set, i.e. the filter would match every row.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Identity state derived from the stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityState {
    Absent,
    Pending,
    Registered,
}

impl IdentityState {
    pub fn exists(self) -> bool {
        self != Self::Absent
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Pending => "pending",
            Self::Registered => "registered",
        }
    }
}

impl From<Option<RegistrationStatus>> for IdentityState {
    fn from(status: Option<RegistrationStatus>) -> Self {
        match status {
            None => Self::Absent,
            Some(RegistrationStatus::Pending) => Self::Pending,
            Some(RegistrationStatus::Registered) => Self::Registered,
        }
    }
}

/// Parameters for inserting a fresh pending registration.
#[derive(Debug, Clone)]
pub struct CreateRecordParam {
    pub discord_id: u64,
    pub email: String,
    pub token: String,
    pub role_kind: String,
}

/// Parameters for a `register` request.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    /// Discord ID of the requesting user
    pub discord_id: u64,
    /// Email as typed by the user; normalized by the service
    pub email: String,
    /// Configured role name the user asked for
    pub role_kind: String,
}

/// Parameters for a `validate` request.
#[derive(Debug, Clone)]
pub struct ValidateParam {
    pub discord_id: u64,
    pub token: String,
}

/// Normalizes an email for storage and comparison.
///
/// Emails are compared case-insensitively everywhere, so the stored form is trimmed and
/// lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
