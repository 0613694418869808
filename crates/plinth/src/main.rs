//! plinth CLI - static personal-website generator.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use plinth_site::{SiteBuilder, SiteConfig};

/// Generate the site into the `docs/` output directory.
#[derive(Parser)]
#[command(name = "plinth")]
#[command(about = "Static personal-website generator")]
#[command(version)]
struct Cli;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    tracing::info!("Building static site...");

    let result = SiteBuilder::new(SiteConfig::default()).build()?;

    tracing::info!(
        "Built {} pages in {}ms",
        result.pages,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
