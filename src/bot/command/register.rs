use sea_orm::TransactionTrait;
use serenity::all::UserId;

use crate::{
    bot::{command::log_outcome, reply},
    error::AppError,
    model::registration::RegisterParam,
    service::registration::RegistrationService,
    state::AppState,
};

/// Handles `register <role> <email>`.
///
/// An unknown role name is answered with the usage text.
pub async fn register(state: &AppState, author: UserId, role: &str, email: String) -> Vec<String> {
    let config = &state.config;

    let Some(role_kind) = config.registered_role(role) else {
        tracing::debug!("Register from {} with unknown role '{}'", author, role);
        return vec![reply::register_usage(config)];
    };

    let result = run(
        state,
        RegisterParam {
            discord_id: author.get(),
            email,
            role_kind: role_kind.to_string(),
        },
    )
    .await;

    log_outcome("register", author, &result);

    vec![reply::register(config, &result)]
}

/// Runs the registration in its own transaction.
///
/// Resend outcomes are reported as errors but their writes are kept.
async fn run(state: &AppState, param: RegisterParam) -> Result<(), AppError> {
    let txn = state.db.begin().await?;

    let result = RegistrationService::new(&txn, state.mailer.as_ref(), &state.config.email_pattern)
        .register(param)
        .await;

    let keep = match &result {
        Ok(()) => true,
        Err(err) => err.as_registration().is_some_and(|err| err.token_resent()),
    };

    if keep {
        txn.commit().await?;
    } else {
        txn.rollback().await?;
    }

    result
}
