use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use layout_core::{
    compute_layout_with, load_settings_from, LayoutComponent, LayoutState, ResizeNotifier,
    Settings, Viewport,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layout_probe")]
struct Cli {
    #[arg(long, default_value = "layout.toml")]
    config: PathBuf,
    #[arg(long)]
    json: bool,
    /// Used when `RUST_LOG` is unset. Reports go to stdout, logs to stderr.
    #[arg(long, default_value = "warn")]
    log_filter: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layout for one viewport size.
    Compute {
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
    },
    /// Feed a sequence of `WxH` sizes through a live component.
    Simulate { sizes: Vec<String> },
    /// Print the effective settings.
    Settings,
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    width: f32,
    height: f32,
    orientation: layout_core::Orientation,
    page_split_direction: layout_core::SplitDirection,
    header_size_in_percent: u8,
    body_size_in_percent: u8,
    content_split_direction: layout_core::SplitDirection,
    left_child_size_in_percent: u8,
    right_child_size_in_percent: u8,
    split_disabled: bool,
}

impl LayoutReport {
    fn new(viewport: Viewport, state: &LayoutState) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            orientation: state.orientation(),
            page_split_direction: state.page_split_direction,
            header_size_in_percent: state.header_size_in_percent(),
            body_size_in_percent: state.body_size_in_percent(),
            content_split_direction: state.content_split_direction,
            left_child_size_in_percent: state.left_child_size_in_percent(),
            right_child_size_in_percent: state.right_child_size_in_percent(),
            split_disabled: state.split_disabled,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!(
                "{}x{} {:?}: page={:?} header/body={}/{} content={:?} left/right={}/{}",
                self.width,
                self.height,
                self.orientation,
                self.page_split_direction,
                self.header_size_in_percent,
                self.body_size_in_percent,
                self.content_split_direction,
                self.left_child_size_in_percent,
                self.right_child_size_in_percent,
            );
        }
        Ok(())
    }
}

fn parse_size(raw: &str) -> Result<Viewport> {
    let Some((width, height)) = raw.split_once(['x', 'X']) else {
        bail!("size {raw:?} is not in WxH form");
    };
    let width = width.trim().parse::<f32>().with_context(|| format!("bad width in {raw:?}"))?;
    let height = height.trim().parse::<f32>().with_context(|| format!("bad height in {raw:?}"))?;
    Ok(Viewport::new(width, height))
}

/// Drives one component through `viewports` on a single poll-mode
/// subscription and reports the layout after each size.
fn simulate(settings: &Settings, viewports: &[Viewport]) -> Result<Vec<LayoutReport>> {
    let Some((first, rest)) = viewports.split_first() else {
        bail!("simulate needs at least one size");
    };

    let notifier = ResizeNotifier::new(settings.notifier_capacity);
    let mut component = LayoutComponent::new(settings.presets()?);
    component.init(&notifier, *first);

    let mut reports = Vec::with_capacity(viewports.len());
    reports.push(LayoutReport::new(*first, &component.state()));
    for viewport in rest {
        if notifier.notify(*viewport) == 0 {
            bail!("layout component is no longer subscribed");
        }
        let changed = component.poll();
        tracing::debug!(?viewport, changed, "simulated resize");
        reports.push(LayoutReport::new(*viewport, &component.state()));
    }
    component.destroy();
    Ok(reports)
}

fn log_directives(flag: &str, rust_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| flag.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let directives = log_directives(&cli.log_filter, std::env::var("RUST_LOG").ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .init();
    let settings = load_settings_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Command::Compute { width, height } => {
            let viewport = Viewport::new(width, height);
            let state = compute_layout_with(viewport, &settings.presets()?);
            LayoutReport::new(viewport, &state).print(cli.json)?;
        }
        Command::Simulate { sizes } => {
            let viewports = sizes
                .iter()
                .map(|raw| parse_size(raw))
                .collect::<Result<Vec<_>>>()?;
            for report in simulate(&settings, &viewports)? {
                report.print(cli.json)?;
            }
        }
        Command::Settings => {
            let presets = settings.presets()?;
            println!("{settings:#?}");
            println!("{presets:#?}");
        }
    }

    Ok(())
}
