pub use super::blacklist::Entity as Blacklist;
pub use super::registration::Entity as Registration;
