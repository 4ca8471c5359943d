use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use rotation_core::Carousel;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod view;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(about = "Terminal preview of the event banner carousel")]
struct Args {
    /// JSON array of slide descriptors; a demo set is used when omitted.
    #[arg(long)]
    slides: Option<PathBuf>,
    /// TOML settings file; defaults to ./carousel.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Delay between automatic advances; overrides config and environment.
    #[arg(long)]
    rotation_interval_ms: Option<u64>,
    /// How long a slide change stays in its settling state.
    #[arg(long)]
    transition_window_ms: Option<u64>,
    /// Stop automatically after this many milliseconds.
    #[arg(long)]
    run_for_ms: Option<u64>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(v) = args.rotation_interval_ms {
        settings.rotation_interval_ms = v;
    }
    if let Some(v) = args.transition_window_ms {
        settings.transition_window_ms = v;
    }

    let slides = match &args.slides {
        Some(path) => view::load_slides(path)?,
        None => view::demo_slides(),
    };

    let carousel = Carousel::start(slides, settings).context("failed to start carousel")?;
    view::run(
        &carousel,
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
        shutdown_signal(),
        args.run_for_ms.map(Duration::from_millis),
    )
    .await
}

async fn shutdown_signal() {
    // Without a ctrl-c handler the other exits still apply.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
