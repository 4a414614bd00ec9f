use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use linksnap::cli::Cli;
use linksnap::config::Config;
use linksnap::logging::init_tracing;
use linksnap::shorten::HttpShortener;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!("Fatal error: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let settings = config.resolve(cli.api_url.as_deref(), &config_path)?;

    let shortener =
        HttpShortener::new(&settings.base_url).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = %shortener.endpoint(), "Shortening service configured");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    linksnap::ui::run(&settings, Arc::new(shortener), runtime.handle())
        .context("Terminal UI failed")?;
    Ok(())
}
