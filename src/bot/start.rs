use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Starts the Discord bot in a blocking manner.
///
/// Builds the serenity client with the registration event handler and runs it until the
/// gateway connection shuts down.
///
/// # Arguments
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(())` - The bot ran and shut down cleanly
/// - `Err(AppError::DiscordErr)` - Client construction or the gateway connection failed
pub async fn start_bot(state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.discord_bot_token.clone();

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
