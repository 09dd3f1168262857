//! Circle Desktop Application
//!
//! Browse contacts, read and write notes about them.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circle=debug".parse().expect("valid log directive")),
        )
        .init();

    tracing::info!("Starting Circle...");

    let window = WindowBuilder::new()
        .with_title("Circle")
        .with_inner_size(LogicalSize::new(1100.0, 720.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
