use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use tracing::{debug, info};

use crate::catalog::{self, OutputRecord};
use crate::fetcher::PageSource;
use crate::parser::{self, listing};

/// Retailer root the importer starts from. Replace with the real storefront;
/// this value only ever yields the placeholder catalog.
pub const DEFAULT_SITE: &str = "https://www.example.com";
pub const MAX_PRODUCT_PAGES: usize = 60;

pub struct PipelineConfig {
    pub site_root: Url,
    pub output: PathBuf,
    /// Lowered for tests; never raised past `MAX_PRODUCT_PAGES`.
    pub max_pages: usize,
}

/// Counts from one run. Per-page failures only show up here.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub fetched: usize,
    pub failed: usize,
    pub without_product: usize,
    pub collected: usize,
    pub written: usize,
    pub used_placeholder: bool,
}

/// Homepage → listed product pages → records → catalog file.
///
/// Only the homepage fetch and the final write can fail the run; any single
/// product page that fails to fetch or carries no usable Product is skipped.
pub async fn run<S: PageSource>(source: &S, config: &PipelineConfig) -> Result<RunSummary> {
    let home_url = config.site_root.as_str();
    info!("Fetching homepage: {}", home_url);
    let home = source
        .fetch(home_url)
        .await
        .with_context(|| format!("Failed to fetch homepage {}", home_url))?;

    let urls = parser::with_candidates(&home, |items| {
        listing::listed_urls(items, &config.site_root)
    });
    let cap = config.max_pages.min(MAX_PRODUCT_PAGES);
    let targets = &urls[..urls.len().min(cap)];
    info!("Product URLs listed: {} (fetching {})", urls.len(), targets.len());

    let mut summary = RunSummary {
        discovered: urls.len(),
        ..Default::default()
    };
    let records = collect_products(source, targets, &mut summary).await?;
    summary.collected = records.len();

    let records = if records.is_empty() {
        summary.used_placeholder = true;
        info!("No product records found, writing placeholder catalog");
        catalog::placeholder_records()
    } else {
        catalog::dedupe_by_id(records)
    };
    summary.written = records.len();

    catalog::write_catalog(&config.output, &records)?;
    info!(
        discovered = summary.discovered,
        fetched = summary.fetched,
        failed = summary.failed,
        without_product = summary.without_product,
        collected = summary.collected,
        duplicates = summary.collected.saturating_sub(summary.written),
        "Catalog import finished"
    );
    Ok(summary)
}

/// Fetch each page in turn and map its first Product. Records come back in
/// discovery order, duplicates included.
async fn collect_products<S: PageSource>(
    source: &S,
    urls: &[String],
    summary: &mut RunSummary,
) -> Result<Vec<OutputRecord>> {
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut records = Vec::new();
    for url in urls {
        match source.fetch(url).await {
            Ok(html) => {
                summary.fetched += 1;
                match parser::page_product(&html) {
                    Some(mut record) => {
                        if record.href.is_empty() {
                            record.href = url.clone();
                        }
                        records.push(record);
                    }
                    None => {
                        summary.without_product += 1;
                        debug!(%url, "No usable Product on page");
                    }
                }
            }
            Err(e) => {
                summary.failed += 1;
                debug!(%url, error = %e, "Skipping product page");
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(records)
}
