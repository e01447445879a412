use crate::{
    bot::{command::BlacklistCommand, reply},
    config::Config,
    error::AppError,
    service::blacklist::BlacklistService,
    state::AppState,
};

/// Handles the `blacklist` administrator subcommands.
pub async fn blacklist(state: &AppState, command: BlacklistCommand) -> Vec<String> {
    let config = &state.config;
    let service = BlacklistService::new(&state.db);

    match command {
        BlacklistCommand::Get => match service.list().await {
            Ok(entries) => reply::blacklist_listing(&entries),
            Err(err) => vec![failure(config, "blacklist get", err)],
        },
        BlacklistCommand::Add(emails) => {
            let result = service.add(&emails).await;
            log_result("blacklist add", &result);
            vec![reply::blacklist_add(config, &result)]
        }
        BlacklistCommand::Remove(emails) => {
            let result = service.remove(&emails).await.map(|_| ());
            log_result("blacklist remove", &result);
            vec![reply::blacklist_remove(config, &result)]
        }
        BlacklistCommand::Check(email) => match service.contains(&email).await {
            Ok(listed) => vec![reply::blacklist_check(&email, listed)],
            Err(err) => vec![failure(config, "blacklist check", err)],
        },
    }
}

fn log_result(command: &str, result: &Result<(), AppError>) {
    match result {
        Ok(()) => tracing::info!("{} succeeded", command),
        Err(err) => tracing::error!("{} failed: {}", command, err),
    }
}

fn failure(config: &Config, command: &str, err: AppError) -> String {
    tracing::error!("{} failed: {}", command, err);
    reply::bot_error(config)
}
