//! Per-URL fetch task
//!
//! The task is the boundary that converts every lower-level fault into
//! data. Nothing it calls can make it fail outward.

use crate::survey::extractor::{extract_content, PageContent};
use crate::survey::fetcher::{fetch_page, FetchFault};
use reqwest::Client;
use scraper::Html;

/// Outcome of surveying a single URL
///
/// Constructed entirely within one task invocation and handed to the
/// coordinator by value; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    /// The URL exactly as submitted by the caller
    pub url: String,

    /// Extracted content, or the classified fault that prevented extraction
    pub result: Result<PageContent, FetchFault>,
}

/// Fetches one URL and extracts its record
///
/// On a fetch fault this short-circuits to a fault outcome without invoking
/// the extractor. On success the body is parsed (the parser is lossy and
/// cannot fail) and the fields are extracted.
pub async fn survey_page(client: &Client, url: String) -> PageOutcome {
    let result = match fetch_page(client, &url).await {
        Ok(body) => {
            // Html is not Send; parse and extract between await points
            let document = Html::parse_document(&body);
            Ok(extract_content(&document))
        }
        Err(fault) => Err(fault),
    };

    PageOutcome { url, result }
}
