//! Modal confirmation dialog

use dioxus::prelude::*;

use super::{Button, ButtonVariant, Icon, IconKind};
use crate::state::AppState;

#[component]
pub fn ConfirmDialog(
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(into, default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "confirm-backdrop",
            style: "
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",
            onclick: move |_| on_cancel.call(()),

            div {
                role: "alertdialog",
                style: "
                    width: 360px;
                    padding: 20px;
                    border-radius: 10px;
                    border: 1px solid {colors.border};
                    background: {colors.bg_primary};
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.25);
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                    h3 { style: "margin: 0; font-size: 16px;", "{title}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Close",
                        onclick: move |_| on_cancel.call(()),
                        Icon { kind: IconKind::Close, size: 14 }
                    }
                }
                p {
                    style: "margin: 0 0 20px 0; color: {colors.text_secondary};",
                    "{message}"
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
