pub mod common;
pub mod completions;
pub mod contacts;
pub mod migrate;
pub mod notes;
pub mod snapshot;
