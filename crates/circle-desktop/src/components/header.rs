//! Section header

use dioxus::prelude::*;

use super::{Icon, IconKind};
use crate::state::AppState;

#[component]
pub fn Header(
    #[props(into)] title: String,
    #[props(into, default)] subtitle: String,
    icon: Option<IconKind>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",
            if let Some(kind) = icon {
                Icon { kind, size: 18, color: colors.text_secondary }
            }
            div {
                style: "flex: 1; min-width: 0;",
                h2 {
                    style: "
                        margin: 0;
                        font-size: 15px;
                        font-weight: 600;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }
                if !subtitle.is_empty() {
                    div {
                        style: "font-size: 12px; color: {colors.text_muted};",
                        "{subtitle}"
                    }
                }
            }
            {children}
        }
    }
}
