//! Ready event handler for bot initialization.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({})",
        ready.user.name,
        ready.user.id
    );

    ctx.set_activity(Some(ActivityData::listening("DMs")));
}
