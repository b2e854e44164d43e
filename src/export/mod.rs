/// Whole-table exports
///
/// Both exporters take rows that were already read from the store, so a
/// failed read never leaves a half-written file behind. Neither touches
/// the database.

pub mod json;
pub mod spreadsheet;

pub use json::write_json;
pub use spreadsheet::{write_csv, EXPORT_COLUMNS};
