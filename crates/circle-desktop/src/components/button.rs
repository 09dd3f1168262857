//! Button component

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

/// Themed button
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(into, default)] title: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (bg, fg, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => (colors.bg_tertiary, colors.text_primary, colors.border),
        ButtonVariant::Destructive => (colors.danger, colors.accent_text, colors.danger),
        ButtonVariant::Ghost => ("transparent", colors.text_secondary, "transparent"),
    };
    let opacity = if disabled { "0.5" } else { "1" };
    let cursor = if disabled { "default" } else { "pointer" };

    rsx! {
        button {
            r#type: "button",
            title: "{title}",
            disabled,
            style: "
                display: inline-flex;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border: 1px solid {border};
                border-radius: 6px;
                background: {bg};
                color: {fg};
                font-size: 13px;
                cursor: {cursor};
                opacity: {opacity};
            ",
            // Keep clicks from starting a drag in the panel underneath
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |evt| {
                if !disabled {
                    onclick.call(evt);
                }
            },
            {children}
        }
    }
}
