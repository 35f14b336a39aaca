//! Output module for rendering survey results
//!
//! This module owns the external representation of a batch:
//! - Converting internal outcomes into serializable records
//! - Rendering the record collection as an indented JSON array
//! - Writing the report to stdout or a file

mod record;

pub use record::{PageRecord, ERROR_TITLE, NO_DESCRIPTION, NO_TITLE};

use crate::SurveyError;
use std::io::Write;
use std::path::Path;

/// Renders the record collection as an indented JSON array
pub fn render_records(records: &[PageRecord]) -> Result<String, SurveyError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the rendered report to the given writer, followed by a newline
pub fn write_records<W: Write>(writer: &mut W, records: &[PageRecord]) -> Result<(), SurveyError> {
    let rendered = render_records(records)?;
    writeln!(writer, "{}", rendered)?;
    Ok(())
}

/// Writes the rendered report to a file, replacing any existing content
pub fn write_records_to_path(path: &Path, records: &[PageRecord]) -> Result<(), SurveyError> {
    let mut file = std::fs::File::create(path)?;
    write_records(&mut file, records)
}
