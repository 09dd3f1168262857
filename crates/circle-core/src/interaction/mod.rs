//! UI interaction state, kept free of any rendering framework
//!
//! The desktop note-detail panel drives these from its event handlers.

mod confirm;
mod scroll;

pub use confirm::DeleteConfirmation;
pub use scroll::{DragScroll, DragState, PanelInput, PointerButton};
