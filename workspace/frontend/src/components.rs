pub mod layout;
pub mod reports;
