//! Record extraction from parsed HTML
//!
//! This module pulls the surveyed fields out of a parsed document:
//! - The text of the first `<title>` element
//! - The `content` attribute of the first `<meta name="description">`
//! - The text of every `<h1>`, `<h2>`, `<h3>` in document order
//!
//! Extraction is a pure read-only traversal; substituting fallback strings
//! for absent fields happens at the output boundary, not here.

use scraper::{Html, Selector};

/// Content extracted from a single page
///
/// `None` means the field was absent or empty in the document. Headings may
/// be empty; empty heading text is kept as an empty string entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// Text of the first title element
    pub title: Option<String>,

    /// Content of the first meta description
    pub description: Option<String>,

    /// All h1-h3 texts, flattened into one sequence in document order
    pub headings: Vec<String>,
}

/// Extracts the surveyed fields from a parsed HTML document
pub fn extract_content(document: &Html) -> PageContent {
    PageContent {
        title: extract_title(document),
        description: extract_description(document),
        headings: extract_headings(document),
    }
}

/// Extracts the page title from the HTML document
///
/// A title element with empty text is treated the same as no title element
/// at all; both yield `None`.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.is_empty())
}

/// Extracts the meta description from the HTML document
fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
        .filter(|content| !content.is_empty())
}

/// Extracts all h1-h3 heading texts in document order
///
/// Heading levels are not grouped; the result is one flat sequence ordered
/// by position in the document. Text is kept exactly as the selector engine
/// yields it, including empty strings.
fn extract_headings(document: &Html) -> Vec<String> {
    let mut headings = Vec::new();

    if let Ok(selector) = Selector::parse("h1, h2, h3") {
        for element in document.select(&selector) {
            headings.push(element.text().collect::<String>());
        }
    }

    headings
}
