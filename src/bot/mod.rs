//! Discord bot surface for registration commands.
//!
//! Users talk to the bot over direct messages only. Every message starting with the
//! configured prefix is parsed into a `command::Command`, run against the services and
//! answered with the replies built in `reply`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve the configured guild's roles and channels
//! - `DIRECT_MESSAGES` - Receive commands sent over DM
//! - `MESSAGE_CONTENT` - Read the command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod guild;
pub mod handler;
pub mod reply;
pub mod start;
