pub mod initdb;
pub mod migrate_and_serve;
pub mod reports;
pub mod serve;

pub use initdb::init_database;
pub use migrate_and_serve::migrate_and_serve;
pub use reports::{list_reports, run_report};
pub use serve::serve;
