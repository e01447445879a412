use sea_orm::TransactionTrait;
use serenity::all::{Context, GuildId, UserId};

use crate::{
    bot::{command::log_outcome, guild, reply},
    error::AppError,
    model::registration::ValidateParam,
    service::registration::RegistrationService,
    state::AppState,
};

/// Handles `validate <token>`.
///
/// The status flip is only committed once the registered role has been granted.
pub async fn validate(ctx: &Context, state: &AppState, author: UserId, token: String) -> Vec<String> {
    let result = run(ctx, state, author, token).await;

    log_outcome("validate", author, &result);

    vec![reply::validate(&state.config, &result)]
}

async fn run(ctx: &Context, state: &AppState, author: UserId, token: String) -> Result<(), AppError> {
    let txn = state.db.begin().await?;
    let service = RegistrationService::new(&txn, state.mailer.as_ref(), &state.config.email_pattern);

    service
        .validate(ValidateParam {
            discord_id: author.get(),
            token,
        })
        .await?;

    let role_kind = service.role_for_user(author.get()).await?.unwrap_or_default();

    if let Err(err) = grant_role(ctx, state, author, &role_kind).await {
        txn.rollback().await?;
        return Err(err);
    }

    txn.commit().await?;

    Ok(())
}

async fn grant_role(
    ctx: &Context,
    state: &AppState,
    author: UserId,
    role_kind: &str,
) -> Result<(), AppError> {
    let guild_id = GuildId::new(state.config.guild_id);
    let role_id = guild::find_role(ctx, guild_id, role_kind).await?;

    ctx.http
        .add_member_role(guild_id, author, role_id, Some("Registration validated"))
        .await?;

    Ok(())
}
