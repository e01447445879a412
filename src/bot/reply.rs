//! User-facing reply texts.
//!
//! Every command outcome maps to exactly one message. Business failures get a specific
//! text; infrastructure failures get a generic "contact admin" message.

use crate::{
    bot::command::Usage,
    config::Config,
    error::{registration::RegistrationError, AppError},
};

/// Maximum size of one blacklist listing message, below Discord's 2000 character limit.
pub const LISTING_CHUNK_LIMIT: usize = 1600;

const EMAIL_SENT: &str = "Email sent!";
const REGISTERED_EMAIL: &str = "This email belongs to a registered account.";

pub fn register(config: &Config, result: &Result<(), AppError>) -> String {
    let err = match result {
        Ok(()) => return EMAIL_SENT.to_string(),
        Err(err) => err,
    };

    match err.as_registration() {
        Some(RegistrationError::InvalidEmail { email }) => format!(
            "Email {} doesn't meet our requirements.\nCheck the server registration rules.",
            email
        ),
        Some(RegistrationError::UsernameConflict {
            sender_pending: false,
            ..
        }) => "You have already registered!".to_string(),
        Some(conflict @ RegistrationError::UsernameConflict { .. }) => {
            if conflict.token_resent() {
                format!(
                    "{}\nWarning: you have already tried registering this Discord ID. \
                     The old token is now invalid.",
                    EMAIL_SENT
                )
            } else {
                REGISTERED_EMAIL.to_string()
            }
        }
        Some(unknown @ RegistrationError::UnknownUsername { .. }) => {
            if unknown.token_resent() {
                EMAIL_SENT.to_string()
            } else {
                REGISTERED_EMAIL.to_string()
            }
        }
        Some(RegistrationError::DeliveryFailed { .. }) => format!(
            "An error occurred while attempting to send the email.\nTry again later or contact {}.",
            config.admin_user
        ),
        _ => bot_error(config),
    }
}

pub fn validate(config: &Config, result: &Result<(), AppError>) -> String {
    match result {
        Ok(()) => "Your account has been successfully validated.".to_string(),
        Err(AppError::RegistrationErr(RegistrationError::ValidationFailed)) => {
            "Validation failed.".to_string()
        }
        Err(AppError::DiscordErr(_)) => format!(
            "Unable to validate because the bot doesn't have sufficient permissions to give roles. \
             Contact: {}",
            config.admin_user
        ),
        Err(_) => bot_error(config),
    }
}

pub fn deregister(config: &Config, result: &Result<(), AppError>) -> String {
    match result {
        Ok(()) => "Successfully deregistered.".to_string(),
        Err(AppError::RegistrationErr(RegistrationError::NotRegistered { .. })) => {
            "Your Discord ID has not been registered.".to_string()
        }
        Err(AppError::DiscordErr(_)) => format!(
            "Unable to deregister because the bot doesn't have sufficient permissions to give roles. \
             Contact: {}",
            config.admin_user
        ),
        Err(_) => bot_error(config),
    }
}

pub fn blacklist_add(config: &Config, result: &Result<(), AppError>) -> String {
    match result {
        Ok(()) => "Emails successfully added to blacklist.".to_string(),
        Err(AppError::RegistrationErr(RegistrationError::BlacklistConflict)) => {
            "Error: email already in blacklist!".to_string()
        }
        Err(_) => bot_error(config),
    }
}

pub fn blacklist_remove(config: &Config, result: &Result<(), AppError>) -> String {
    match result {
        Ok(()) => "Emails successfully removed from blacklist.".to_string(),
        Err(AppError::RegistrationErr(RegistrationError::BlacklistNotFound)) => {
            "Error: email doesn't exist in blacklist. Nothing removed.".to_string()
        }
        Err(_) => bot_error(config),
    }
}

pub fn blacklist_check(email: &str, listed: bool) -> String {
    format!(
        "Email {} {} in blacklist.",
        email,
        if listed { "is" } else { "is not" }
    )
}

/// Splits the blacklist into messages of at most `LISTING_CHUNK_LIMIT` characters.
pub fn blacklist_listing(entries: &[String]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["Blacklist empty.".to_string()];
    }

    chunk_lines(entries, LISTING_CHUNK_LIMIT)
}

/// Groups lines into newline-joined chunks of at most `limit` bytes.
///
/// Separators count towards the limit. A single line longer than `limit` gets a chunk
/// of its own.
pub fn chunk_lines(lines: &[String], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut length = 0;

    for line in lines {
        if !current.is_empty() && length + 1 + line.len() > limit {
            chunks.push(current.join("\n"));
            current.clear();
            length = 0;
        }

        if !current.is_empty() {
            length += 1;
        }
        length += line.len();
        current.push(line);
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

pub fn bot_error(config: &Config) -> String {
    format!(
        "There is an error with the bot. Contact admin: {}",
        config.admin_user
    )
}

pub fn usage(config: &Config, usage: Usage) -> String {
    match usage {
        Usage::Register => register_usage(config),
        Usage::Validate => validate_usage(config),
        Usage::Blacklist => blacklist_usage(config),
    }
}

pub fn register_usage(config: &Config) -> String {
    let style = &config.code_style;
    let prefix = &config.command_prefix;
    let example_role = config
        .registered_role_names
        .first()
        .map(String::as_str)
        .unwrap_or_default();

    format!(
        "**Usage:**\n```{style}\n{prefix}register <{roles}> <email>```\n\
         **Example:**\n```{style}\n{prefix}register {example_role} johndoe@gmail.com```",
        roles = config.registered_role_names.join("/"),
    )
}

pub fn validate_usage(config: &Config) -> String {
    let style = &config.code_style;
    let prefix = &config.command_prefix;

    format!(
        "**Usage:**\n```{style}\n{prefix}validate <TOKEN>```\n\
         **Example:**\n```{style}\n{prefix}validate 123456789abcdefgh```"
    )
}

pub fn blacklist_usage(config: &Config) -> String {
    let style = &config.code_style;
    let prefix = &config.command_prefix;

    format!(
        "**Usage:**\n```{style}\n{prefix}blacklist <cmd> <arg>\n\n<cmd>:\n\
         get - print the blacklist\n\
         add <...email(s)> - add one or more emails to the blacklist, separated by space character\n\
         remove <...email(s)> - remove one or more emails from the blacklist, separated by space character\n\
         check <email> - check if the email is in blacklist```"
    )
}

/// Registration instructions posted by `postasbotdesc`.
pub fn description(config: &Config) -> String {
    let style = &config.code_style;
    let prefix = &config.command_prefix;

    format!(
        "**How to complete the registration:**\n\
         Send commands to bot (right click on my name -> Message) over DM.\n\
         Commands are:\n\
         ```{style}\n\
         {prefix}register <{roles}> <email>\n\
         {prefix}validate <TOKEN>\n\
         {prefix}deregister```\n\n\
         In case of any problems, contact:\n{admin}",
        roles = config.registered_role_names.join("/"),
        admin = config.admin_user,
    )
}
