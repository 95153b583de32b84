use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bgate::app::AppContext;
use bgate::cli::{commands, Cli};
use bgate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the passage.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let settings = cli.into_settings(config)?;
    let ctx = AppContext::new(&settings.base_url)?;

    commands::show_passage(&ctx, &settings).await?;

    Ok(())
}
