use serenity::all::{Context, GuildId};

use crate::{
    bot::{guild, reply},
    error::AppError,
    state::AppState,
};

/// Handles `postasbot <text>`: posts `text` to the bot channel.
pub async fn post_as_bot(ctx: &Context, state: &AppState, text: String) -> Vec<String> {
    post(ctx, state, text).await
}

/// Handles `postasbotdesc`: posts the registration instructions to the bot channel.
pub async fn post_description(ctx: &Context, state: &AppState) -> Vec<String> {
    post(ctx, state, reply::description(&state.config)).await
}

/// Posting is silent on success; failures are reported to the administrator.
async fn post(ctx: &Context, state: &AppState, text: String) -> Vec<String> {
    match send(ctx, state, text).await {
        Ok(()) => Vec::new(),
        Err(err) => {
            tracing::error!("Failed to post to #{}: {}", state.config.bot_channel, err);
            vec![reply::bot_error(&state.config)]
        }
    }
}

async fn send(ctx: &Context, state: &AppState, text: String) -> Result<(), AppError> {
    let guild_id = GuildId::new(state.config.guild_id);
    let channel_id = guild::find_channel(ctx, guild_id, &state.config.bot_channel).await?;

    channel_id.say(&ctx.http, text).await?;

    Ok(())
}
