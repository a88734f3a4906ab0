use anyhow::Context;
use clap::Parser;
use demo::sample::DemoConfig;
use mineralcore::catalog::{load_catalog, load_descriptions};
use mineralcore::telemetry::ViewMetrics;
use site::config::SiteConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use web::server::WebServer;

mod demo;
mod site;
mod web;

#[derive(Parser)]
#[command(author, version, about = "Web driver for the Mars mineral image finder")]
struct Args {
    /// Load a site config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Image/flag table (CSV)
    #[arg(long, default_value = "data/db.csv")]
    images: PathBuf,
    /// Mineral description table (CSV)
    #[arg(long, default_value = "data/minerals.csv")]
    minerals: PathBuf,
    /// Directory of static image assets
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Serve a synthetic catalog instead of reading the tables
    #[arg(long, default_value_t = false)]
    demo: bool,
    #[arg(long, default_value_t = 24)]
    demo_records: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Load the tables, print a summary, and exit without serving
    #[arg(long, default_value_t = false)]
    probe: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let site_config = if let Some(path) = args.config {
        SiteConfig::load(path)?
    } else {
        SiteConfig::from_args(args.images, args.minerals, args.assets, args.port)
    };

    let (catalog, descriptions) = if args.demo {
        let demo_config = DemoConfig {
            records: args.demo_records,
            seed: args.seed,
        };
        (
            demo::sample::sample_catalog(&demo_config),
            demo::sample::sample_descriptions(),
        )
    } else {
        let catalog = load_catalog(&site_config.image_table, site_config.table_schema())
            .with_context(|| {
                format!(
                    "loading image table {}",
                    site_config.image_table.display()
                )
            })?;
        let descriptions =
            load_descriptions(&site_config.description_table).with_context(|| {
                format!(
                    "loading description table {}",
                    site_config.description_table.display()
                )
            })?;
        (catalog, descriptions)
    };

    println!(
        "Catalog ready -> records {}, mineral columns {}, descriptions {}",
        catalog.len(),
        catalog.minerals().len(),
        descriptions.len()
    );

    if args.probe {
        return Ok(());
    }

    let server = WebServer::new(
        &site_config,
        Arc::new(catalog),
        Arc::new(descriptions),
        Arc::new(ViewMetrics::new()),
    );
    server.spawn();
    println!(
        "Serving http://127.0.0.1:{}/ (Ctrl+C to stop)...",
        site_config.port
    );

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for signal handling")?;
    runtime.block_on(async {
        signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
