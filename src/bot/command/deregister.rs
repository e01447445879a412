use sea_orm::TransactionTrait;
use serenity::all::{Context, GuildId, UserId};

use crate::{
    bot::{command::log_outcome, guild, reply},
    error::AppError,
    service::registration::RegistrationService,
    state::AppState,
};

/// Handles `deregister`.
///
/// The row is only deleted for good once the registered role has been removed.
pub async fn deregister(ctx: &Context, state: &AppState, author: UserId) -> Vec<String> {
    let result = run(ctx, state, author).await;

    log_outcome("deregister", author, &result);

    vec![reply::deregister(&state.config, &result)]
}

async fn run(ctx: &Context, state: &AppState, author: UserId) -> Result<(), AppError> {
    let txn = state.db.begin().await?;
    let service = RegistrationService::new(&txn, state.mailer.as_ref(), &state.config.email_pattern);

    let role_kind = service.role_for_user(author.get()).await?.unwrap_or_default();

    service.deregister(author.get()).await?;

    if let Err(err) = remove_role(ctx, state, author, &role_kind).await {
        txn.rollback().await?;
        return Err(err);
    }

    txn.commit().await?;

    Ok(())
}

async fn remove_role(
    ctx: &Context,
    state: &AppState,
    author: UserId,
    role_kind: &str,
) -> Result<(), AppError> {
    let guild_id = GuildId::new(state.config.guild_id);
    let role_id = guild::find_role(ctx, guild_id, role_kind).await?;

    ctx.http
        .remove_member_role(guild_id, author, role_id, Some("Deregistered"))
        .await?;

    Ok(())
}
