use serenity::all::{Context, GuildId, Message};

use crate::{
    bot::{command, guild, reply},
    state::AppState,
};

/// Handle a message sent to the bot.
///
/// Only direct messages from humans starting with the command prefix are handled.
/// Administrator commands from members without a developer role are ignored silently.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_some() {
        return;
    }

    let Some(parsed) = command::parse(&message.content, &state.config.command_prefix) else {
        return;
    };

    let developer_only = match &parsed {
        Ok(command) => command.requires_developer(),
        Err(usage) => usage.requires_developer(),
    };

    if developer_only {
        let guild_id = GuildId::new(state.config.guild_id);

        match guild::is_developer(&ctx, guild_id, message.author.id, &state.config).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(
                    "Ignoring administrator command from non-developer {}",
                    message.author.id
                );
                return;
            }
            Err(e) => {
                tracing::error!("Failed to check developer roles: {}", e);
                return;
            }
        }
    }

    let replies = match parsed {
        Ok(command) => command::dispatch(&ctx, state, message.author.id, command).await,
        Err(usage) => vec![reply::usage(&state.config, usage)],
    };

    for text in replies {
        if let Err(e) = message.channel_id.say(&ctx.http, text).await {
            tracing::error!("Failed to reply to {}: {}", message.author.id, e);
        }
    }
}
