//! Home view - main application screen

use dioxus::prelude::*;

use circle_core::references::render_with_names;

use crate::components::{ContactList, DraftList, Header, IconKind, NoteCard, NoteDetail, SearchBar};
use crate::state::AppState;

/// Home view component - contacts, their notes and the selected note
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let contact_count = state.snapshot.read().contacts.len();
    let selected_contact = state.selected_contact();
    let notes = state.contact_notes();
    let selected_note = state.selected_note();
    let selected_note_id = (state.selected_note)();
    let contacts = state.snapshot.read().contacts.clone();
    let relationship_count = selected_contact.as_ref().map_or(0, |contact| {
        state
            .snapshot
            .read()
            .relationships
            .iter()
            .filter(|relationship| relationship.involves(&contact.id))
            .count()
    });
    let error = (state.last_error)();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            aside {
                class: "contacts-column",
                style: "
                    width: 260px;
                    display: flex;
                    flex-direction: column;
                    border-right: 1px solid {colors.border};
                    background: {colors.bg_secondary};
                ",
                Header {
                    title: "Circle",
                    subtitle: format!("{contact_count} contacts"),
                    icon: IconKind::Person,
                }
                SearchBar {}
                ContactList {}
            }

            div {
                class: "notes-column",
                style: "
                    width: 320px;
                    display: flex;
                    flex-direction: column;
                    border-right: 1px solid {colors.border};
                ",
                if let Some(contact) = selected_contact {
                    Header {
                        title: contact.name.clone(),
                        subtitle: format!("{} notes · {relationship_count} relationships", notes.len()),
                    }
                    div {
                        style: "flex: 1; overflow-y: auto;",
                        if notes.is_empty() {
                            div {
                                style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                                "No notes yet"
                            }
                        }
                        for note in notes {
                            {
                                let note_id = note.id.clone();
                                let is_selected = selected_note_id.as_ref() == Some(&note.id);
                                let rendered = render_with_names(&note.text, &contacts);
                                let title = rendered.lines().next().unwrap_or("").chars().take(40).collect::<String>();
                                let preview = rendered.lines().nth(1).unwrap_or("").chars().take(60).collect::<String>();
                                let timestamp = chrono::DateTime::from_timestamp_millis(note.updated_at)
                                    .map(|date_time| date_time.format("%b %d").to_string())
                                    .unwrap_or_default();

                                rsx! {
                                    NoteCard {
                                        key: "{note.id}",
                                        title,
                                        preview,
                                        timestamp,
                                        is_selected,
                                        onclick: move |_| state.selected_note.set(Some(note_id.clone())),
                                    }
                                }
                            }
                        }
                    }
                    DraftList { key: "{contact.id}", contact_id: contact.id.clone() }
                } else {
                    div {
                        style: "padding: 20px; color: {colors.text_muted};",
                        "Select a contact to see their notes"
                    }
                }
            }

            main {
                class: "detail-column",
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",
                if let Some(message) = error {
                    div {
                        style: "
                            padding: 8px 16px;
                            background: {colors.danger};
                            color: {colors.accent_text};
                            font-size: 12px;
                        ",
                        onclick: move |_| state.last_error.set(None),
                        "{message}"
                    }
                }
                if let Some(note) = selected_note {
                    NoteDetail { key: "{note.id}", note: note.clone() }
                } else {
                    div {
                        style: "padding: 20px; color: {colors.text_muted};",
                        "No note selected"
                    }
                }
            }
        }
    }
}
