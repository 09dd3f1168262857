//! Drafts written for the selected contact

use dioxus::prelude::*;

use circle_core::interaction::DeleteConfirmation;
use circle_core::models::{ContactId, Draft, DraftId};

use super::{Button, ButtonVariant, ConfirmDialog, Icon, IconKind};
use crate::state::AppState;

/// Draft composer plus the contact's pending drafts.
///
/// Saving an edited draft replaces the whole draft value; "Save as note"
/// extracts the draft into a note.
#[component]
pub fn DraftList(contact_id: ContactId) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut text = use_signal(String::new);
    let mut editing = use_signal(|| None::<Draft>);
    let mut deletion = use_signal(DeleteConfirmation::<DraftId>::default);

    let drafts = state.drafts.read().drafts(&contact_id).to_vec();
    let is_editing = editing.read().is_some();

    let save_contact_id = contact_id.clone();
    let save_draft = move |_| {
        let value = text().trim().to_string();
        if value.is_empty() {
            return;
        }
        match editing.take() {
            Some(draft) => {
                let replacement = Draft {
                    text: value,
                    ..draft
                };
                if state
                    .drafts
                    .write()
                    .replace(&save_contact_id, replacement)
                    .is_none()
                {
                    tracing::warn!("Draft disappeared while being edited");
                }
            }
            None => {
                let draft = Draft::new(value);
                tracing::debug!("Added draft {} for {}", draft.id, save_contact_id);
                state.drafts.write().add(save_contact_id.clone(), draft);
            }
        }
        text.set(String::new());
    };

    let delete_contact_id = contact_id.clone();

    rsx! {
        div {
            class: "draft-list",
            style: "
                border-top: 1px solid {colors.border};
                background: {colors.bg_secondary};
                padding: 10px 14px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                max-height: 45%;
                overflow-y: auto;
            ",

            textarea {
                rows: 3,
                placeholder: "Write a draft...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                style: "
                    resize: vertical;
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font: inherit;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
            }
            div {
                style: "display: flex; gap: 8px; justify-content: flex-end;",
                if is_editing {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            editing.set(None);
                            text.set(String::new());
                        },
                        "Cancel"
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: text.read().trim().is_empty(),
                    onclick: save_draft,
                    Icon { kind: IconKind::Plus, size: 14 }
                    if is_editing { "Update draft" } else { "Save draft" }
                }
            }

            for draft in drafts {
                {
                    let stamp = draft.stamp();
                    let extract_contact_id = contact_id.clone();
                    let extract_id = draft.id.clone();
                    let delete_id = draft.id.clone();
                    let edit_draft = draft.clone();

                    rsx! {
                        div {
                            key: "{draft.id}",
                            class: "draft-item",
                            style: "
                                padding: 8px 10px;
                                border: 1px dashed {colors.border};
                                border-radius: 6px;
                                background: {colors.bg_primary};
                            ",
                            div {
                                style: "font-size: 11px; color: {colors.text_muted}; margin-bottom: 4px;",
                                "{stamp}"
                            }
                            div {
                                style: "white-space: pre-wrap; margin-bottom: 6px;",
                                "{draft.text}"
                            }
                            div {
                                style: "display: flex; gap: 6px;",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| {
                                        let note = state
                                            .drafts
                                            .write()
                                            .extract(&extract_contact_id, &extract_id);
                                        if let Some(note) = note {
                                            tracing::info!("Saved draft {} as note {}", extract_id, note.id);
                                            state.selected_note.set(Some(note.id.clone()));
                                            state.save_note(note);
                                        }
                                    },
                                    "Save as note"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| {
                                        text.set(edit_draft.text.clone());
                                        editing.set(Some(edit_draft.clone()));
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| deletion.write().request(delete_id.clone()),
                                    Icon { kind: IconKind::Trash, size: 14 }
                                }
                            }
                        }
                    }
                }
            }

            if deletion.read().is_open() {
                ConfirmDialog {
                    title: "Delete draft?",
                    message: "This draft has not been saved as a note and will be lost.",
                    on_cancel: move |()| deletion.write().cancel(),
                    on_confirm: move |()| {
                        deletion.write().confirm(|draft_id| {
                            if state.drafts.write().remove(&delete_contact_id, &draft_id).is_some() {
                                tracing::debug!("Deleted draft {}", draft_id);
                            }
                            if editing.read().as_ref().is_some_and(|draft| draft.id == draft_id) {
                                editing.set(None);
                                text.set(String::new());
                            }
                        });
                    },
                }
            }
        }
    }
}
