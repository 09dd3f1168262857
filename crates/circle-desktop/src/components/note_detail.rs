//! Note detail panel
//!
//! A fixed-height panel scrolled by wheel, mouse drag or touch drag. The
//! scroll position lives in a [`DragScroll`]; this component only turns DOM
//! events into [`PanelInput`]s.

use chrono::{DateTime, Local};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use circle_core::interaction::{DragScroll, PanelInput, PointerButton};
use circle_core::references::render_with_names;
use circle_core::Note;

use super::{Button, ButtonVariant, ConfirmDialog, Icon, IconKind};
use crate::state::AppState;

const fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Primary => Some(PointerButton::Primary),
        MouseButton::Secondary => Some(PointerButton::Secondary),
        MouseButton::Auxiliary => Some(PointerButton::Auxiliary),
        _ => None,
    }
}

fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| {
            date_time
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        },
    )
}

/// Note body with drag scrolling and a confirmed delete.
///
/// Render with a `key` of the note ID so the scroll position resets when the
/// note changes.
#[component]
pub fn NoteDetail(note: Note) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut scroll = use_signal(DragScroll::new);
    let mut viewport_height = use_signal(|| 0.0_f64);
    let mut content_height = use_signal(|| 0.0_f64);

    let body = render_with_names(&note.text, &state.snapshot.read().contacts);
    let created = format_timestamp(note.created_at);
    let updated = format_timestamp(note.updated_at);

    let current = scroll();
    let offset = current.offset();
    let dragging = current.is_dragging();
    let cursor = if dragging { "grabbing" } else { "grab" };

    // Scroll thumb, only when the content overflows
    let thumb = (current.max_offset() > 0.0 && content_height() > 0.0).then(|| {
        let viewport = viewport_height();
        let height = (viewport * viewport / content_height()).max(24.0);
        let top = offset / current.max_offset() * (viewport - height);
        (top, height)
    });

    let deletion_open = state.note_deletion.read().is_open();
    let pending_note = note.clone();

    rsx! {
        div {
            class: "note-detail",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                min-height: 0;
            ",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    padding: 10px 16px;
                    border-bottom: 1px solid {colors.border};
                    font-size: 12px;
                    color: {colors.text_muted};
                ",
                Icon { kind: IconKind::Note }
                span { style: "flex: 1;", "Created {created} · Updated {updated}" }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Delete note",
                    onclick: move |_| state.note_deletion.write().request(pending_note.clone()),
                    Icon { kind: IconKind::Trash, size: 14 }
                    "Delete"
                }
            }

            div {
                class: "note-detail-viewport",
                style: "
                    position: relative;
                    flex: 1;
                    overflow: hidden;
                    cursor: {cursor};
                    touch-action: none;
                ",
                onresize: move |evt| {
                    if let Ok(size) = evt.get_border_box_size() {
                        viewport_height.set(size.height);
                        scroll.write().set_bounds(content_height(), size.height);
                    }
                },
                onwheel: move |evt| {
                    let delta_y = evt.delta().strip_units().y;
                    scroll.write().apply(PanelInput::Wheel { delta_y });
                },
                onmousedown: move |evt| {
                    if let Some(button) = evt.trigger_button().and_then(pointer_button) {
                        let y = evt.client_coordinates().y;
                        scroll.write().apply(PanelInput::Press { button, y });
                    }
                },
                ontouchstart: move |evt| {
                    if let Some(touch) = evt.touches().first() {
                        let y = touch.client_coordinates().y;
                        scroll.write().apply(PanelInput::TouchStart { y });
                    }
                },
                // Touch events keep targeting the element the touch started on
                ontouchmove: move |evt| {
                    if let Some(touch) = evt.touches().first() {
                        let y = touch.client_coordinates().y;
                        scroll.write().apply(PanelInput::Move { y });
                    }
                },
                ontouchend: move |_| scroll.write().apply(PanelInput::Release),
                ontouchcancel: move |_| scroll.write().apply(PanelInput::Release),

                div {
                    class: "note-detail-content",
                    style: "
                        padding: 16px 20px;
                        line-height: 1.6;
                        white-space: pre-wrap;
                        word-break: break-word;
                        transform: translateY(-{offset}px);
                    ",
                    onresize: move |evt| {
                        if let Ok(size) = evt.get_border_box_size() {
                            content_height.set(size.height);
                            scroll.write().set_bounds(size.height, viewport_height());
                        }
                    },
                    "{body}"
                }

                if let Some((top, height)) = thumb {
                    div {
                        style: "
                            position: absolute;
                            right: 3px;
                            top: {top}px;
                            width: 4px;
                            height: {height}px;
                            border-radius: 2px;
                            background: {colors.text_muted};
                            opacity: 0.6;
                        ",
                    }
                }
            }

            // Pointer capture: move/up listeners only exist while dragging
            if dragging {
                div {
                    class: "drag-capture",
                    style: "
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        cursor: grabbing;
                    ",
                    onmousemove: move |evt| {
                        let y = evt.client_coordinates().y;
                        scroll.write().apply(PanelInput::Move { y });
                    },
                    onmouseup: move |_| scroll.write().apply(PanelInput::Release),
                    onmouseleave: move |_| scroll.write().apply(PanelInput::Release),
                }
            }

            if deletion_open {
                ConfirmDialog {
                    title: "Delete note?",
                    message: "This note will be removed permanently.",
                    on_cancel: move |()| state.note_deletion.write().cancel(),
                    on_confirm: move |()| {
                        let mut deletion = state.note_deletion;
                        deletion.write().confirm(|note| state.delete_note(&note.id));
                    },
                }
            }
        }
    }
}
