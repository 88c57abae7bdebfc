mod app;
mod config;
mod domain;
mod error;
mod infra;
mod platform;
mod ui;
mod usecase;


use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::app::App;
use crate::config::AppConfig;

const WINDOW_TITLE: &str = "Dashboard DRE";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config();
    let webview_data_dir = default_webview_data_dir()?;
    tracing::info!(data_dir = %webview_data_dir.display(), "starting dashboard");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(WINDOW_TITLE))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
    Ok(())
}

/// A broken or unreachable config file never blocks startup.
fn load_config() -> AppConfig {
    let loaded = AppConfig::default_path().and_then(|path| AppConfig::load(&path));
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "config not usable, using defaults");
            AppConfig::default()
        }
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
    let project_dirs = ProjectDirs::from("br", "dre", "dre-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

#[cfg(test)]
mod main_tests {
    use super::*;
    use crate::tests::unique_test_dir;
    use std::fs;

    #[test]
    fn ensure_webview_data_dir_creates_webview2_subdir() {
        let temp_dir = unique_test_dir("webview-data-dir");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");

        let webview_dir =
            ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

        assert_eq!(webview_dir, temp_dir.join("webview2"));
        assert!(webview_dir.is_dir());

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
