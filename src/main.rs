mod catalog;
mod fetcher;
mod parser;
mod pipeline;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use reqwest::Url;

use pipeline::PipelineConfig;

#[derive(Parser)]
#[command(
    name = "ring_importer",
    about = "Import ring products from a retailer's JSON-LD into the catalog file"
)]
struct Cli {
    /// Site root to start from
    #[arg(long, default_value = pipeline::DEFAULT_SITE)]
    site: String,
    /// Catalog file to (over)write [default: <package root>/assets/data/rings.json]
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let config = PipelineConfig {
        site_root: Url::parse(&cli.site).with_context(|| format!("Invalid site URL {}", cli.site))?,
        output: cli.output.unwrap_or_else(catalog::default_output),
        max_pages: pipeline::MAX_PRODUCT_PAGES,
    };

    let source = fetcher::HttpFetcher::new()?;
    let summary = pipeline::run(&source, &config).await?;

    println!(
        "Wrote {} records to {}",
        summary.written,
        config.output.display()
    );
    if summary.used_placeholder {
        println!("(no products found, placeholder catalog written)");
    }
    println!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
