use std::path::PathBuf;

use andes_seating::SeatingEngine;
use andes_store::{Config, JsonManifestSource, ManifestSource};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "andes_cli=info,andes_seating=info,andes_store=info".into()),
        )
        // stdout carries the JSON result
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Commands::Allocate { flight_id, manifest, config_dir, report } => {
            allocate(flight_id, manifest, config_dir, report).await
        }
    }
}

async fn allocate(
    flight_id: i64,
    manifest: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    report: bool,
) -> anyhow::Result<()> {
    let config = match config_dir {
        Some(dir) => Config::load_from(&dir),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let path = manifest.unwrap_or_else(|| PathBuf::from(&config.manifest.path));
    let source = JsonManifestSource::load(&path)
        .await
        .with_context(|| format!("Failed to open manifest {}", path.display()))?;
    let flight = source.fetch_manifest(flight_id).await?;

    let engine = SeatingEngine::new(config.seating);
    let allocation = engine.allocate_manifest(flight)?;
    tracing::info!(
        run_id = %allocation.report.run_id,
        assigned = allocation.report.assigned,
        unseated = allocation.report.unseated.len(),
        "Flight {} seated",
        flight_id
    );

    let output = if report {
        serde_json::to_string_pretty(&allocation)?
    } else {
        serde_json::to_string_pretty(&allocation.flight)?
    };
    println!("{}", output);

    Ok(())
}
