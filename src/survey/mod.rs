//! Survey module: concurrent page fetching and record extraction
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching with fault classification
//! - Extraction of title, description, and headings from parsed HTML
//! - The per-URL fetch task that converts faults into data
//! - Scatter-gather coordination across a URL batch

mod coordinator;
mod extractor;
mod fetcher;
mod task;

pub use coordinator::gather_pages;
pub use extractor::{extract_content, PageContent};
pub use fetcher::{build_http_client, fetch_page, FetchFault};
pub use task::{survey_page, PageOutcome};

use crate::config::Config;
use crate::output::PageRecord;
use crate::SurveyError;

/// Runs a complete survey batch
///
/// This is the main entry point for surveying a set of URLs. It will:
/// 1. Build the HTTP client from the fetcher configuration
/// 2. Fetch and extract every URL concurrently
/// 3. Convert the collected outcomes into serializable records
///
/// Exactly one record is returned per submitted URL, in completion order.
/// Per-URL failures degrade record fields; the only error this function
/// itself can return is a failure to construct the HTTP client.
///
/// # Arguments
///
/// * `config` - The survey configuration
/// * `urls` - The URLs to survey, as supplied by the caller
///
/// # Returns
///
/// * `Ok(Vec<PageRecord>)` - One record per URL
/// * `Err(SurveyError)` - The HTTP client could not be built
pub async fn run_batch(config: &Config, urls: Vec<String>) -> Result<Vec<PageRecord>, SurveyError> {
    let client = build_http_client(&config.fetcher)?;
    let outcomes = gather_pages(&client, urls).await;
    Ok(outcomes.iter().map(PageRecord::from_outcome).collect())
}
