//! Faskes site - static generation and preview for the province pages
//!
//! `faskes build` writes the pages, `faskes serve` renders them on request.

mod cli;
mod commands;
mod components;
mod config;
mod error;
mod pages;
mod routes;
mod static_props;

use clap::Parser;
use faskes_core::date::SystemClock;
use faskes_core::provinces::load_or_bundled;

use cli::{Cli, Commands};
use commands::build::run_build;
use commands::list::run_list;
use commands::serve::run_serve;
use config::SiteConfig;
use error::SiteError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SiteError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("faskes=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    let env_config = SiteConfig::from_env()?;

    match cli.command {
        Commands::Build { out } => {
            let config = env_config.with_overrides(cli.data, out, None);
            let records = load_or_bundled(config.data_path.as_deref())?;
            let report = run_build(&config, &records, &SystemClock)?;
            println!(
                "Wrote {} pages to {}",
                report.pages,
                report.out_dir.display()
            );
        }
        Commands::Serve { bind } => {
            let config = env_config.with_overrides(cli.data, None, bind);
            tracing::info!("Starting faskes preview with config: {:?}", config);
            let records = load_or_bundled(config.data_path.as_deref())?;
            run_serve(config, records).await?;
        }
        Commands::List { query, json } => {
            let config = env_config.with_overrides(cli.data, None, None);
            let records = load_or_bundled(config.data_path.as_deref())?;
            run_list(&records, &query, json)?;
        }
    }

    Ok(())
}
