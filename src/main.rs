mod bot;
mod config;
mod data;
mod error;
mod logging;
mod mail;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let _log_guard = logging::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let mailer = startup::setup_mailer(&config)?;

    tracing::info!("Starting registration bot");

    let state = AppState::new(db, mailer, config);

    if let Err(e) = bot::start::start_bot(state).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
