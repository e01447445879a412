//! Lookups against the configured guild.

use serenity::all::{ChannelId, Context, GuildId, RoleId, UserId};

use crate::{
    config::Config,
    error::{internal::InternalError, AppError},
};

/// Finds the guild role with exactly `name`.
///
/// # Returns
/// - `Ok(RoleId)` - Role found
/// - `Err(InternalError::MissingGuildEntity)` - No role with that name
/// - `Err(AppError::DiscordErr)` - Fetching the guild roles failed
pub async fn find_role(ctx: &Context, guild_id: GuildId, name: &str) -> Result<RoleId, AppError> {
    let roles = guild_id.roles(&ctx.http).await?;

    roles
        .into_values()
        .find(|role| role.name == name)
        .map(|role| role.id)
        .ok_or_else(|| {
            InternalError::MissingGuildEntity {
                kind: "role",
                name: name.to_string(),
            }
            .into()
        })
}

/// Finds the guild channel with exactly `name`.
pub async fn find_channel(
    ctx: &Context,
    guild_id: GuildId,
    name: &str,
) -> Result<ChannelId, AppError> {
    let channels = guild_id.channels(&ctx.http).await?;

    channels
        .into_values()
        .find(|channel| channel.name == name)
        .map(|channel| channel.id)
        .ok_or_else(|| {
            InternalError::MissingGuildEntity {
                kind: "channel",
                name: name.to_string(),
            }
            .into()
        })
}

/// Whether `user` holds one of the configured developer roles in the guild.
pub async fn is_developer(
    ctx: &Context,
    guild_id: GuildId,
    user: UserId,
    config: &Config,
) -> Result<bool, AppError> {
    let member = guild_id.member(ctx, user).await?;
    let roles = guild_id.roles(&ctx.http).await?;

    let member_role_names = member
        .roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .map(|role| role.name.as_str());

    Ok(holds_any(member_role_names, &config.developer_role_names))
}

fn holds_any<'a>(mut role_names: impl Iterator<Item = &'a str>, wanted: &[String]) -> bool {
    role_names.any(|name| wanted.iter().any(|wanted| wanted == name))
}
