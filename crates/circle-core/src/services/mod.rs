//! Shared services used by the CLI and desktop clients

mod database;

pub use database::DatabaseService;
