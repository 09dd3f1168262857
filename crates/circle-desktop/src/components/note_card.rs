//! Note card component

use dioxus::prelude::*;

use crate::state::AppState;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    timestamp: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let bg = if is_selected {
        colors.bg_tertiary
    } else {
        colors.bg_primary
    };
    let border_left = if is_selected {
        format!("3px solid {}", colors.accent)
    } else {
        "3px solid transparent".to_string()
    };

    rsx! {
        div {
            class: if is_selected { "note-item selected" } else { "note-item" },
            style: "
                padding: 10px 14px;
                border-bottom: 1px solid {colors.border};
                border-left: {border_left};
                cursor: pointer;
                background: {bg};
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                style: "display: flex; gap: 8px; margin-bottom: 4px;",
                div {
                    class: "note-title",
                    style: "
                        flex: 1;
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }
                span {
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "{timestamp}"
                }
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {colors.text_secondary};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
        }
    }
}
