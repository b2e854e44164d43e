//! User actions, independent of any front end
//!
//! The window and the command line both call these; each one is a single
//! blocking request that either completes or returns the error to show.

use std::path::Path;
use tracing::warn;

use crate::error::{Error, Result};
use crate::export;
use crate::state::data::{LabelDraft, LabelSummary};
use crate::state::library::Library;
use crate::state::validate;

/// What the browse panel shows after a refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseView {
    pub rows: Vec<LabelSummary>,
    pub types: Vec<String>,
}

/// Validate a draft and store it, returning the new label ID
pub fn save_label(library: &Library, draft: &LabelDraft) -> Result<i64> {
    let problems = validate::validate(draft);
    if !problems.is_empty() {
        warn!("Rejected label for {:?}: {}", draft.image_name, problems.join("; "));
        return Err(Error::Validation(problems));
    }
    library.insert(draft)
}

/// Re-query the summary rows (optionally filtered) and the type list
pub fn browse(library: &Library, type_filter: Option<&str>) -> Result<BrowseView> {
    Ok(BrowseView {
        rows: library.list(type_filter)?,
        types: library.distinct_types()?,
    })
}

/// Export the compact CSV; returns the number of rows written
pub fn export_csv(library: &Library, path: &Path) -> Result<usize> {
    let rows = library.export_rows()?;
    export::write_csv(path, &rows)?;
    Ok(rows.len())
}

/// Export the full JSON document; returns the number of labels written
pub fn export_json(library: &Library, path: &Path) -> Result<usize> {
    let labels = library.all_labels()?;
    export::write_json(path, &labels)?;
    Ok(labels.len())
}
