//! Data models for Circle

mod contact;
mod directory;
mod draft;
mod ids;
mod note;
mod snapshot;

pub use contact::Contact;
pub use directory::{Occupation, Organization, Relationship, Subject};
pub use draft::{Draft, DraftBook};
pub use ids::{ContactId, DraftId, NoteId, RecordId};
pub use note::Note;
pub use snapshot::{LocalSnapshot, SNAPSHOT_KEY, SNAPSHOT_SCHEMA_VERSION};
