// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting CAGR Tools GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let window_size = LogicalSize::new(app_config.app.window_width, app_config.app.window_height);
    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(window_size),
        )
        .with_custom_head(format!("<style>{}</style>", app_config.theme.stylesheet()));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);
}
