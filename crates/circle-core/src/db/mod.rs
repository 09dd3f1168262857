//! Local database layer for Circle
//!
//! The local store is a key/value table in a libSQL file. All records live
//! in a single snapshot blob under one key; [`SnapshotRepository`] is the
//! only way in or out.

mod connection;
mod migrations;
mod snapshot_repository;

pub use connection::Database;
pub use snapshot_repository::{LibSqlSnapshotRepository, SnapshotRepository};
