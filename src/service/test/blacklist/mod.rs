use crate::{
    error::{registration::RegistrationError, AppError},
    service::blacklist::BlacklistService,
};
use test_utils::{builder::TestBuilder, factory::create_blacklist_entry};

mod add;
mod remove;

fn emails(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
