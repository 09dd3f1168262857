//! circle-core - Core library for Circle
//!
//! This crate contains the shared models, reference-token handling, data
//! migrations, local snapshot storage and the remote store client used by the
//! Circle interfaces (desktop and CLI).

pub mod config;
pub mod db;
pub mod error;
pub mod interaction;
pub mod migrate;
pub mod models;
pub mod references;
pub mod remote;
pub mod search;
pub mod services;
pub mod util;

pub use error::{Error, Result};
pub use models::{Contact, ContactId, Draft, DraftId, LocalSnapshot, Note, NoteId};
