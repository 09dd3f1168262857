//! Search bar component

use dioxus::prelude::*;

use super::{Icon, IconKind};
use crate::state::AppState;

/// Search bar for filtering contacts
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 10px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
                color: {colors.text_muted};
            ",

            Icon { kind: IconKind::Search }

            input {
                r#type: "text",
                placeholder: "Search contacts...",
                value: "{state.search_query}",
                oninput: move |evt| {
                    state.search_query.set(evt.value());
                },
                style: "
                    flex: 1;
                    padding: 6px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}
