//! Prefix command parsing and dispatch.
//!
//! Command names are case-sensitive. Extra arguments after the expected ones are
//! ignored; missing arguments produce a usage reply. Unknown commands are ignored.

pub mod blacklist;
pub mod deregister;
pub mod post;
pub mod register;
pub mod validate;

use serenity::all::{Context, UserId};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { role: String, email: String },
    Validate { token: String },
    Deregister,
    Blacklist(BlacklistCommand),
    PostAsBot { text: String },
    PostAsBotDesc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlacklistCommand {
    Get,
    Add(Vec<String>),
    Remove(Vec<String>),
    Check(String),
}

/// Malformed invocation of a known command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Register,
    Validate,
    Blacklist,
}

impl Command {
    /// Administrator commands are only run for members holding a developer role.
    pub fn requires_developer(&self) -> bool {
        matches!(
            self,
            Self::Blacklist(_) | Self::PostAsBot { .. } | Self::PostAsBotDesc
        )
    }
}

impl Usage {
    pub fn requires_developer(self) -> bool {
        self == Self::Blacklist
    }
}

/// Parses a message into a command.
///
/// # Returns
/// - `None` - Not a command for this bot
/// - `Some(Ok(Command))` - Well-formed command
/// - `Some(Err(Usage))` - Known command with missing or invalid arguments
pub fn parse(content: &str, prefix: &str) -> Option<Result<Command, Usage>> {
    let body = content.trim_end().strip_prefix(prefix)?;
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (body, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let parsed = match name {
        "register" => match args.as_slice() {
            [role, email, ..] => Ok(Command::Register {
                role: role.to_string(),
                email: email.to_string(),
            }),
            _ => Err(Usage::Register),
        },
        "validate" => match args.first() {
            Some(token) => Ok(Command::Validate {
                token: token.to_string(),
            }),
            None => Err(Usage::Validate),
        },
        "deregister" => Ok(Command::Deregister),
        "blacklist" => parse_blacklist(&args).map(Command::Blacklist),
        "postasbot" if !rest.is_empty() => Ok(Command::PostAsBot {
            text: rest.to_string(),
        }),
        "postasbotdesc" => Ok(Command::PostAsBotDesc),
        _ => return None,
    };

    Some(parsed)
}

fn parse_blacklist(args: &[&str]) -> Result<BlacklistCommand, Usage> {
    let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

    match args {
        ["get"] => Ok(BlacklistCommand::Get),
        ["add", emails @ ..] if !emails.is_empty() => Ok(BlacklistCommand::Add(owned(emails))),
        ["remove", emails @ ..] if !emails.is_empty() => {
            Ok(BlacklistCommand::Remove(owned(emails)))
        }
        ["check", email] => Ok(BlacklistCommand::Check(email.to_string())),
        _ => Err(Usage::Blacklist),
    }
}

/// Runs a parsed command and returns the replies to send back, in order.
pub async fn dispatch(
    ctx: &Context,
    state: &AppState,
    author: UserId,
    command: Command,
) -> Vec<String> {
    match command {
        Command::Register { role, email } => {
            register::register(state, author, &role, email).await
        }
        Command::Validate { token } => validate::validate(ctx, state, author, token).await,
        Command::Deregister => deregister::deregister(ctx, state, author).await,
        Command::Blacklist(command) => blacklist::blacklist(state, command).await,
        Command::PostAsBot { text } => post::post_as_bot(ctx, state, text).await,
        Command::PostAsBotDesc => post::post_description(ctx, state).await,
    }
}

/// Logs a command outcome; business failures are warnings, everything else an error.
fn log_outcome(command: &str, author: UserId, result: &Result<(), AppError>) {
    match result {
        Ok(()) => tracing::info!("{} from {} succeeded", command, author),
        Err(AppError::RegistrationErr(err)) => {
            tracing::warn!("{} from {}: {}", command, author, err)
        }
        Err(err) => tracing::error!("{} from {} failed: {}", command, author, err),
    }
}
