use regex::Regex;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DEVELOPER_ROLE_NAMES: &str = "Developer,Admin";
const DEFAULT_BOT_CHANNEL: &str = "register-channel";
const DEFAULT_COMMAND_PREFIX: &str = "$";
const DEFAULT_CODE_STYLE: &str = "fix";
const DEFAULT_EMAIL_REGEX: &str = r"^([a-zA-Z0-9]{3,})@gmail\.com$";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SMTP_SUBJECT: &str = "Registration token";
const DEFAULT_SMTP_BODY: &str = "Your access token is:\r\n\r\n{token}";
const DEFAULT_LOG_FILE: &str = "bot.log";

/// SMTP settings for the token mailer.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sent_from: String,
    pub subject: String,
    /// Message body; `{token}` is replaced with the issued token.
    pub body: String,
}

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub guild_id: u64,

    /// Mention of the person users should contact, e.g. `<@123456789>`.
    pub admin_user: String,
    /// Name of the guild channel `postasbot` commands post into.
    pub bot_channel: String,
    pub command_prefix: String,
    /// Discord code block language used when rendering usage help.
    pub code_style: String,

    /// Roles users may register for. Never empty.
    pub registered_role_names: Vec<String>,
    /// Roles allowed to run administrator commands.
    pub developer_role_names: Vec<String>,

    pub email_pattern: Regex,
    pub smtp: SmtpConfig,

    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let guild_id = parse_number::<u64>("DISCORD_GUILD_ID", &required("DISCORD_GUILD_ID")?)?;

        let registered_role_names = split_list(&required("REGISTERED_ROLE_NAMES")?);
        if registered_role_names.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "REGISTERED_ROLE_NAMES".to_string(),
                reason: "at least one role name is required".to_string(),
            }
            .into());
        }

        let smtp_port = match lookup("SMTP_PORT") {
            Some(port) => parse_number::<u16>("SMTP_PORT", &port)?,
            None => DEFAULT_SMTP_PORT,
        };

        let email_pattern = Regex::new(&optional("EMAIL_REGEX", DEFAULT_EMAIL_REGEX))
            .map_err(ConfigError::InvalidEmailPattern)?;

        let smtp_body = optional("SMTP_BODY", DEFAULT_SMTP_BODY);
        if !smtp_body.contains("{token}") {
            return Err(ConfigError::InvalidEnvVar {
                name: "SMTP_BODY".to_string(),
                reason: "must contain the {token} placeholder".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id,
            admin_user: optional("ADMIN_USER", ""),
            bot_channel: optional("BOT_CHANNEL", DEFAULT_BOT_CHANNEL),
            command_prefix: optional("BOT_COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            code_style: optional("CODE_STYLE", DEFAULT_CODE_STYLE),
            registered_role_names,
            developer_role_names: split_list(&optional(
                "DEVELOPER_ROLE_NAMES",
                DEFAULT_DEVELOPER_ROLE_NAMES,
            )),
            email_pattern,
            smtp: SmtpConfig {
                host: required("SMTP_HOST")?,
                port: smtp_port,
                username: required("SMTP_USER")?,
                password: required("SMTP_PASS")?,
                sent_from: required("SMTP_SENT_FROM")?,
                subject: optional("SMTP_SUBJECT", DEFAULT_SMTP_SUBJECT),
                body: smtp_body,
            },
            log_file: optional("LOG_FILE", DEFAULT_LOG_FILE),
        })
    }

    /// Finds the configured registered role matching `name`, ignoring case.
    pub fn registered_role(&self, name: &str) -> Option<&str> {
        self.registered_role_names
            .iter()
            .find(|role| role.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
