//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod confirm_dialog;
mod contact_list;
mod draft_list;
mod header;
mod icon;
mod note_card;
mod note_detail;
mod search_bar;

pub use button::{Button, ButtonVariant};
pub use confirm_dialog::ConfirmDialog;
pub use contact_list::ContactList;
pub use draft_list::DraftList;
pub use header::Header;
pub use icon::{Icon, IconKind};
pub use note_card::NoteCard;
pub use note_detail::NoteDetail;
pub use search_bar::SearchBar;
