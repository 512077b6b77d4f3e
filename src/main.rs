mod app;
mod channel;
mod decode;
mod graph;
mod problem;
mod series;
mod settings;
mod transform;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::TourScopeApp;
use crate::channel::StatusChannel;
use crate::settings::{GraphPosition, ViewerSettings};

/// Live viewer for an ant-colony TSP solver's status stream
#[derive(Parser, Debug)]
#[command(name = "tourscope", version, about)]
struct Args {
    /// status file written by the solver
    #[arg(short = 'f', long)]
    file: Option<String>,

    /// keep the default window size instead of fitting it to the problem
    #[arg(short = 'a', long)]
    no_adjust_window: bool,

    /// hide the tour-length graphs
    #[arg(short = 'g', long)]
    no_graphs: bool,

    /// visual refresh cap in frames per second
    #[arg(long)]
    refresh_rate: Option<f32>,

    /// draw the graph strip above the map instead of below it
    #[arg(long)]
    graph_top: bool,

    /// keep the status file when the viewer exits
    #[arg(long)]
    keep_file: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // saved settings first, command line wins
    let mut settings = ViewerSettings::load();
    if let Some(file) = args.file {
        settings.channel_name = file;
    }
    if args.no_adjust_window {
        settings.adjust_window = false;
    }
    if args.no_graphs {
        settings.show_graphs = false;
    }
    if let Some(hz) = args.refresh_rate {
        settings.refresh_rate_hz = hz;
    }
    if args.graph_top {
        settings.graph_position = GraphPosition::Top;
    }
    if args.keep_file {
        settings.delete_channel_on_exit = false;
    }

    // the channel file must exist before the solver (or this loop) touches it
    let channel = StatusChannel::new(settings.channel_name.as_str());
    channel
        .ensure(settings.force_recreate_channel)
        .with_context(|| format!("cannot create status file '{}'", settings.channel_name))?;
    info!("watching status file '{}'", settings.channel_name);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ACO Output")
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ACO Output",
        native_options,
        Box::new(move |_cc| {
            Ok::<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>>(Box::new(
                TourScopeApp::new(settings, channel),
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("display loop failed: {e}"))?;

    Ok(())
}
