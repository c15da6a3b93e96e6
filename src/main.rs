mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::config::{default_config_path, project_dirs, AppConfig};

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(&config);
    match config_error {
        Some(err) => warn!("using default config: {err}"),
        None => write_config_on_first_run(&config),
    }

    let mut desktop_config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
    );
    match default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => warn!("webview data directory unavailable: {err:#}"),
    }

    info!("starting {}", config.window_title);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(config)
        .launch(app::App);
}

/// Leaves an editable config file behind when none exists yet.
fn write_config_on_first_run(config: &AppConfig) {
    let Ok(path) = default_config_path() else {
        return;
    };
    if path.exists() {
        return;
    }
    match config.save() {
        Ok(path) => info!("wrote default config to {}", path.display()),
        Err(err) => warn!("could not write default config: {err}"),
    }
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs().ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
