//! Main application component

use dioxus::prelude::*;

use circle_core::config::DB_PATH_ENV;
use circle_core::interaction::DeleteConfirmation;
use circle_core::models::{DraftBook, LocalSnapshot};
use circle_core::services::DatabaseService;

use crate::state::AppState;
use crate::theme::ResolvedTheme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut snapshot = use_signal(LocalSnapshot::default);
    let selected_contact = use_signal(|| None);
    let selected_note = use_signal(|| None);
    let search_query = use_signal(String::new);
    let drafts = use_signal(DraftBook::new);
    let note_deletion = use_signal(DeleteConfirmation::default);
    let theme = use_signal(ResolvedTheme::from_env);
    let mut db_service: Signal<Option<DatabaseService>> = use_signal(|| None);
    let mut last_error = use_signal(|| None::<String>);
    let mut db_initialized = use_signal(|| false);

    // Open the database and load the snapshot once
    use_effect(move || {
        if db_initialized() {
            return;
        }
        db_initialized.set(true);

        spawn(async move {
            let db_path = db_path();
            tracing::info!("Opening local database at {}", db_path.display());
            match DatabaseService::open_path(db_path).await {
                Ok(db) => {
                    match db.load_snapshot().await {
                        Ok(loaded) => {
                            tracing::info!(
                                "Loaded {} contacts and {} notes",
                                loaded.contacts.len(),
                                loaded.notes.len()
                            );
                            snapshot.set(loaded);
                        }
                        Err(e) => {
                            tracing::error!("Failed to load snapshot: {}", e);
                            last_error.set(Some(e.to_string()));
                        }
                    }
                    db_service.set(Some(db));
                }
                Err(e) => {
                    tracing::error!("Failed to initialize database: {}", e);
                    last_error.set(Some(e.to_string()));
                }
            }
        });
    });

    use_context_provider(|| AppState {
        snapshot,
        selected_contact,
        selected_note,
        search_query,
        drafts,
        note_deletion,
        theme,
        db_service,
        last_error,
    });

    let colors = theme().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                height: 100vh;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                user-select: none;
            ",
            Home {}
        }
    }
}

fn db_path() -> std::path::PathBuf {
    std::env::var_os(DB_PATH_ENV).map_or_else(
        || {
            dirs::data_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("circle")
                .join("circle.db")
        },
        std::path::PathBuf::from,
    )
}
