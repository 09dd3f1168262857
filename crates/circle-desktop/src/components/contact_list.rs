//! Contact list component

use dioxus::prelude::*;

use crate::state::AppState;

/// Contacts matching the search query
#[component]
pub fn ContactList() -> Element {
    let mut state = use_context::<AppState>();
    let contacts = state.filtered_contacts();
    let selected = (state.selected_contact)();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "contact-list",
            style: "flex: 1; overflow-y: auto;",

            if contacts.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No contacts"
                }
            } else {
                for contact in contacts {
                    {
                        let is_selected = selected.as_ref() == Some(&contact.id);
                        let bg = if is_selected { colors.bg_tertiary } else { "transparent" };
                        let initials = contact.initials();
                        let contact_id = contact.id.clone();

                        rsx! {
                            div {
                                key: "{contact.id}",
                                class: if is_selected { "contact-item selected" } else { "contact-item" },
                                style: "
                                    display: flex;
                                    align-items: center;
                                    gap: 10px;
                                    padding: 8px 16px;
                                    cursor: pointer;
                                    background: {bg};
                                ",
                                onclick: move |_| state.select_contact(contact_id.clone()),

                                span {
                                    style: "
                                        display: inline-flex;
                                        align-items: center;
                                        justify-content: center;
                                        width: 28px;
                                        height: 28px;
                                        border-radius: 50%;
                                        font-size: 11px;
                                        font-weight: 600;
                                        background: {colors.accent};
                                        color: {colors.accent_text};
                                    ",
                                    "{initials}"
                                }
                                span {
                                    style: "
                                        overflow: hidden;
                                        text-overflow: ellipsis;
                                        white-space: nowrap;
                                    ",
                                    "{contact.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
