use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    mail::{smtp::SmtpMailer, TokenMailer},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Creates the `registration` and `blacklist` tables on first start. This must complete
/// before the bot starts handling commands.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the SMTP token mailer from configuration.
///
/// # Returns
/// - `Ok(Arc<dyn TokenMailer>)` - Mailer ready for use; connects on first send
/// - `Err(AppError::MailErr)` - Sender address or relay host is invalid
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn TokenMailer>, AppError> {
    let mailer = SmtpMailer::new(&config.smtp)?;

    tracing::info!(
        "Token mailer configured for {}:{}",
        config.smtp.host,
        config.smtp.port
    );

    Ok(Arc::new(mailer))
}
