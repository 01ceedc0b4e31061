#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)] // not a library, default impls aren't necessary

mod app;
mod config;
mod context;
mod dialog;
mod perf;
mod screen;
mod state;
mod style;
mod tab;
#[cfg(test)]
mod test_util;
mod widget;

pub use config::AppConfig;
pub use context::Context;
pub use screen::Screen;
pub use state::{ephemeral::EphemeralState, ui::UiState};

fn main() -> eframe::Result<()> {
    use app::SchedulerApp;

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::debug!("starting with {config:?}");

    let title = config.title.clone();
    eframe::run_native(
        &title,
        eframe::NativeOptions {
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc, config)))),
    )
}
