//! Registration service implementing the register / validate / deregister state machine.
//!
//! The state of an identity is derived from the stored rows: a Discord ID or an email is
//! either absent, held by a `pending` row or held by a `registered` row. Pending rows are
//! always superseded by a newer attempt, so several collisions end with the old rows
//! evicted and a fresh token sent. Those outcomes are still reported as
//! `RegistrationError` variants so the caller can tell the user why a new token arrived;
//! `RegistrationError::token_resent` distinguishes them from rejections.

use regex::Regex;
use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::{
    data::{blacklist::BlacklistRepository, registration::RegistrationRepository},
    error::{internal::InternalError, registration::RegistrationError, AppError},
    mail::TokenMailer,
    model::registration::{
        normalize_email, CreateRecordParam, IdentityState, Record, RecordFilter, RegisterParam,
        RegistrationStatus, ValidateParam,
    },
    util::token::generate_token,
};

/// What `register` does once both identity states are known.
enum Decision {
    /// Nothing is written; the attempt is refused.
    Reject(RegistrationError),
    /// Evict the listed pending rows, then issue a new token.
    ///
    /// `signal` is returned to the caller after the commit.
    Issue {
        evict: Vec<RecordFilter>,
        signal: Option<RegistrationError>,
    },
}

pub struct RegistrationService<'a, C, M: ?Sized> {
    db: &'a C,
    mailer: &'a M,
    email_pattern: &'a Regex,
}

impl<'a, C, M> RegistrationService<'a, C, M>
where
    C: ConnectionTrait + TransactionTrait,
    M: TokenMailer + ?Sized,
{
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run on
    /// - `mailer` - Notification gateway used to deliver tokens
    /// - `email_pattern` - Pattern every registration email must match
    pub fn new(db: &'a C, mailer: &'a M, email_pattern: &'a Regex) -> Self {
        Self {
            db,
            mailer,
            email_pattern,
        }
    }

    /// Starts or restarts a registration for `param.discord_id`.
    ///
    /// Validates the email, derives the state of the sender and of the current email
    /// owner, evicts superseded pending rows and sends a fresh token. Everything runs in
    /// one transaction; if the token cannot be delivered nothing is persisted, including
    /// the evictions.
    ///
    /// # Arguments
    /// - `param` - Sender Discord ID, requested email and requested role kind
    ///
    /// # Returns
    /// - `Ok(())` - New pending registration created and token sent
    /// - `Err(RegistrationError::InvalidEmail)` - Email fails the pattern or is blacklisted
    /// - `Err(RegistrationError::UsernameConflict)` - Sender already has a row; when the
    ///   sender row was pending a new token was still sent
    /// - `Err(RegistrationError::UnknownUsername)` - Email held by another row; when that
    ///   row was pending the email was reassigned and a token sent
    /// - `Err(RegistrationError::DeliveryFailed)` - Token email could not be sent
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<(), AppError> {
        let email = normalize_email(&param.email);

        if !self.is_email_valid(&email).await? {
            return Err(RegistrationError::InvalidEmail { email: param.email }.into());
        }

        let txn = self.db.begin().await?;
        let repo = RegistrationRepository::new(&txn);

        let sender_filter = RecordFilter::by_discord_id(param.discord_id);
        let owner_filter = RecordFilter::by_email(email.clone());

        let sender = state_of(repo.find_one(&sender_filter).await?.as_ref());
        let owner = state_of(repo.find_one(&owner_filter).await?.as_ref());

        tracing::debug!(
            "Register {} <{}>: sender {}, email owner {}",
            param.discord_id,
            email,
            sender.as_str(),
            owner.as_str()
        );

        let decision = decide(param.discord_id, sender, owner, sender_filter, owner_filter);
        let (evict, signal) = match decision {
            Decision::Reject(err) => {
                txn.rollback().await?;
                tracing::warn!("Registration for {} refused: {}", param.discord_id, err);
                return Err(err.into());
            }
            Decision::Issue { evict, signal } => (evict, signal),
        };

        for filter in &evict {
            let deleted = repo.delete(filter).await?;
            tracing::debug!("Evicted {} pending row(s) matching {:?}", deleted, filter);
        }

        let token = generate_token();
        repo.insert(CreateRecordParam {
            discord_id: param.discord_id,
            email: email.clone(),
            token: token.clone(),
            role_kind: param.role_kind,
        })
        .await?;

        if let Err(source) = self.mailer.send_token(&[email.clone()], &token).await {
            txn.rollback().await?;
            tracing::error!("Failed to send token to {}: {}", email, source);
            return Err(RegistrationError::DeliveryFailed { email, source }.into());
        }

        txn.commit().await?;

        match signal {
            Some(err) => {
                tracing::warn!("Token resent for {}: {}", param.discord_id, err);
                Err(err.into())
            }
            None => {
                tracing::info!("Issued registration token for {} <{}>", param.discord_id, email);
                Ok(())
            }
        }
    }

    /// Confirms a pending registration with the emailed token.
    ///
    /// Every failure is reported as the same opaque `ValidationFailed`; the precise
    /// reason is only logged.
    ///
    /// # Arguments
    /// - `param` - Sender Discord ID and the token they supplied
    ///
    /// # Returns
    /// - `Ok(())` - Registration flipped to `registered`
    /// - `Err(RegistrationError::ValidationFailed)` - No pending row or token mismatch
    /// - `Err(InternalError::UnexpectedRowCount)` - The update did not touch exactly one row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn validate(&self, param: ValidateParam) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = RegistrationRepository::new(&txn);

        let filter = RecordFilter::by_discord_id(param.discord_id);
        let status = repo.status(&filter).await?;
        let stored_token = repo.token(&filter).await?;

        let rejection = match (status, stored_token) {
            (None, _) | (_, None) => Some("no registration found"),
            (Some(RegistrationStatus::Registered), _) => Some("already registered"),
            (Some(RegistrationStatus::Pending), Some(stored)) if stored != param.token => {
                Some("token mismatch")
            }
            _ => None,
        };

        if let Some(reason) = rejection {
            txn.rollback().await?;
            tracing::warn!("Validation failed for {}: {}", param.discord_id, reason);
            return Err(RegistrationError::ValidationFailed.into());
        }

        let updated = repo
            .update_status(
                &filter
                    .token(param.token)
                    .status(RegistrationStatus::Pending),
                RegistrationStatus::Registered,
            )
            .await?;

        if updated != 1 {
            return Err(InternalError::UnexpectedRowCount {
                operation: "validate",
                expected: 1,
                actual: updated,
            }
            .into());
        }

        txn.commit().await?;

        tracing::info!("Validated registration for {}", param.discord_id);

        Ok(())
    }

    /// Deletes the registered row owned by `discord_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted
    /// - `Err(RegistrationError::NotRegistered)` - No row, or the row is still pending
    /// - `Err(InternalError::UnexpectedRowCount)` - Nothing was deleted after the check
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn deregister(&self, discord_id: u64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = RegistrationRepository::new(&txn);

        let filter =
            RecordFilter::by_discord_id(discord_id).status(RegistrationStatus::Registered);

        if !repo.exists(&filter).await? {
            txn.rollback().await?;
            tracing::warn!("Deregister refused for {}: not registered", discord_id);
            return Err(RegistrationError::NotRegistered { discord_id }.into());
        }

        let deleted = repo.delete(&filter).await?;

        if deleted == 0 {
            return Err(InternalError::UnexpectedRowCount {
                operation: "deregister",
                expected: 1,
                actual: 0,
            }
            .into());
        }

        txn.commit().await?;

        tracing::info!("Deregistered {}", discord_id);

        Ok(())
    }

    /// Role kind requested by `discord_id`, used to look up the guild role.
    pub async fn role_for_user(&self, discord_id: u64) -> Result<Option<String>, AppError> {
        RegistrationRepository::new(self.db)
            .role_kind(&RecordFilter::by_discord_id(discord_id))
            .await
    }

    /// All registrations matching `filter`, oldest first.
    pub async fn records(&self, filter: &RecordFilter) -> Result<Vec<Record>, AppError> {
        RegistrationRepository::new(self.db).find(filter).await
    }

    /// Whether `email` may be used for a registration.
    ///
    /// The email must match the configured pattern and must not be blacklisted. A
    /// blacklist hit is logged as a warning.
    pub async fn is_email_valid(&self, email: &str) -> Result<bool, AppError> {
        let email = normalize_email(email);

        if !self.email_pattern.is_match(&email) {
            tracing::debug!("Email {} does not match the registration pattern", email);
            return Ok(false);
        }

        if BlacklistRepository::new(self.db).contains(&email).await? {
            tracing::warn!("Registration attempted with blacklisted email {}", email);
            return Ok(false);
        }

        Ok(true)
    }
}

fn state_of(record: Option<&Record>) -> IdentityState {
    IdentityState::from(record.map(|record| record.status))
}

/// Maps the sender and email owner states onto the registration table.
fn decide(
    discord_id: u64,
    sender: IdentityState,
    owner: IdentityState,
    sender_filter: RecordFilter,
    owner_filter: RecordFilter,
) -> Decision {
    use IdentityState::{Absent, Pending, Registered};

    let email_exists = owner.exists();

    match (sender, owner) {
        (Absent, Absent) => Decision::Issue {
            evict: Vec::new(),
            signal: None,
        },
        (Absent, Pending) => Decision::Issue {
            evict: vec![owner_filter],
            signal: Some(RegistrationError::UnknownUsername {
                discord_id,
                email_exists,
                email_pending: true,
            }),
        },
        (Absent, Registered) => Decision::Reject(RegistrationError::UnknownUsername {
            discord_id,
            email_exists,
            email_pending: false,
        }),
        (Pending, Absent) => Decision::Issue {
            evict: vec![sender_filter],
            signal: Some(RegistrationError::UsernameConflict {
                discord_id,
                email_exists,
                sender_pending: true,
                email_pending: None,
            }),
        },
        (Pending, Pending) => Decision::Issue {
            evict: vec![sender_filter, owner_filter],
            signal: Some(RegistrationError::UsernameConflict {
                discord_id,
                email_exists,
                sender_pending: true,
                email_pending: Some(true),
            }),
        },
        (Pending, Registered) => Decision::Reject(RegistrationError::UsernameConflict {
            discord_id,
            email_exists,
            sender_pending: true,
            email_pending: Some(false),
        }),
        (Registered, owner) => Decision::Reject(RegistrationError::UsernameConflict {
            discord_id,
            email_exists,
            sender_pending: false,
            email_pending: owner.exists().then(|| owner.is_pending()),
        }),
    }
}
