use crate::data::blacklist::BlacklistRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::create_blacklist_entry};

mod contains;
