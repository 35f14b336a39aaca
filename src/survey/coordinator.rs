//! Scatter-gather coordination across a URL batch
//!
//! One task per URL, all spawned before any result is awaited. Tasks never
//! communicate with each other; the result channel is the only shared
//! synchronization point. Results arrive in completion order, so the output
//! carries no ordering guarantee relative to the input.

use crate::survey::task::{survey_page, PageOutcome};
use reqwest::Client;
use tokio::sync::mpsc;

/// Fetches and extracts every URL concurrently, returning one outcome each
///
/// The gather step blocks until all spawned tasks have reported; no task is
/// cancelled mid-flight and none is left running when this returns. Only
/// the per-fetch timeout bounds an individual task; there is no batch-level
/// timeout.
///
/// Concurrency is unbounded: every URL gets its own task immediately. That
/// keeps small batches simple and is a known scalability ceiling for large
/// ones.
///
/// # Arguments
///
/// * `client` - The HTTP client, cloned into each task
/// * `urls` - The URLs to survey
///
/// # Returns
///
/// Exactly `urls.len()` outcomes, in completion order
pub async fn gather_pages(client: &Client, urls: Vec<String>) -> Vec<PageOutcome> {
    if urls.is_empty() {
        return Vec::new();
    }

    let total = urls.len();
    let (result_tx, mut result_rx) = mpsc::channel::<PageOutcome>(total);

    tracing::info!("Dispatching {} fetch task(s)", total);

    for url in urls {
        let client = client.clone();
        let tx = result_tx.clone();
        tokio::spawn(async move {
            let outcome = survey_page(&client, url).await;
            // Capacity equals the task count, so this never blocks; it only
            // fails if the receiver was dropped, which means nobody is
            // waiting for the batch anymore.
            let _ = tx.send(outcome).await;
        });
    }

    // Closing the local sender lets recv() return None once every task has
    // reported and dropped its clone.
    drop(result_tx);

    let mut outcomes = Vec::with_capacity(total);
    while let Some(outcome) = result_rx.recv().await {
        tracing::debug!("Collected result for {}", outcome.url);
        outcomes.push(outcome);
    }

    tracing::info!("Batch complete: {} result(s) collected", outcomes.len());
    outcomes
}
