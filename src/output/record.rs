//! Serializable page records
//!
//! This is the only place where fault classes and absent fields become
//! sentinel strings. Everything upstream works with the tagged outcome, so
//! fault classification stays testable without matching on literals.

use crate::survey::{FetchFault, PageOutcome};
use serde::{Deserialize, Serialize};

/// Title used when a page was fetched but no title could be extracted, and
/// when the fetch itself failed in transit
pub const NO_TITLE: &str = "No Title Found";

/// Description used when a fetched page carries no usable meta description
pub const NO_DESCRIPTION: &str = "No Description Found";

/// Title reserved for URLs the request could not even be built for
pub const ERROR_TITLE: &str = "Error";

/// One surveyed page, ready for serialization
///
/// Field names are the external contract of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The URL as supplied by the caller
    pub url: String,

    /// Extracted title, or a sentinel describing why there is none
    pub title: String,

    /// Extracted meta description, or its fallback
    pub description: String,

    /// All h1-h3 texts in document order
    pub headings: Vec<String>,
}

impl PageRecord {
    /// Converts a task outcome into its external record
    ///
    /// Fallback substitution for description happens only on the success
    /// path: a faulted fetch gets an empty description, not the fallback
    /// string, matching the distinct degraded shapes of the three fault
    /// classes.
    pub fn from_outcome(outcome: &PageOutcome) -> Self {
        match &outcome.result {
            Ok(content) => PageRecord {
                url: outcome.url.clone(),
                title: content
                    .title
                    .clone()
                    .unwrap_or_else(|| NO_TITLE.to_string()),
                description: content
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                headings: content.headings.clone(),
            },
            Err(FetchFault::Construction { .. }) => PageRecord {
                url: outcome.url.clone(),
                title: ERROR_TITLE.to_string(),
                description: String::new(),
                headings: Vec::new(),
            },
            Err(FetchFault::Transport { .. }) | Err(FetchFault::BodyRead { .. }) => PageRecord {
                url: outcome.url.clone(),
                title: NO_TITLE.to_string(),
                description: String::new(),
                headings: Vec::new(),
            },
        }
    }
}
