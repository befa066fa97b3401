mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use layout_core::load_settings_from;
use tracing_subscriber::EnvFilter;

use crate::ui::{LayoutApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "layout.toml")]
    config: PathBuf,
    /// Initial window width; overrides the settings file.
    #[arg(long)]
    width: Option<f32>,
    #[arg(long)]
    height: Option<f32>,
    /// Used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn log_directives(flag: &str, rust_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| flag.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let directives = log_directives(&args.log_filter, std::env::var("RUST_LOG").ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .init();

    let settings = load_settings_from(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let startup = StartupConfig::from_settings(&settings).context("invalid layout presets")?;
    let inner_size = [
        args.width.unwrap_or(settings.window_width),
        args.height.unwrap_or(settings.window_height),
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Split Layout")
            .with_inner_size(inner_size)
            .with_min_inner_size([240.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Split Layout",
        options,
        Box::new(move |_cc| Ok(Box::new(LayoutApp::new(startup)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::log_directives;

    #[test]
    fn rust_log_overrides_log_filter_flag() {
        assert_eq!(
            log_directives("info", Some("layout_core=debug".to_string())),
            "layout_core=debug"
        );
        assert_eq!(log_directives("info", Some(String::new())), "info");
        assert_eq!(log_directives("warn", None), "warn");
    }
}
