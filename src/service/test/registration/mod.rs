use super::{email_pattern, RecordingMailer};
use crate::{
    error::{registration::RegistrationError, AppError},
    model::registration::{RecordFilter, RegisterParam, RegistrationStatus, ValidateParam},
    service::registration::RegistrationService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{create_blacklist_entry, registration::RegistrationFactory},
};

mod deregister;
mod queries;

fn register_param(discord_id: u64, email: &str) -> RegisterParam {
    RegisterParam {
        discord_id,
        email: email.to_string(),
        role_kind: "Registered1".to_string(),
    }
}
