/// State management module
///
/// This module handles everything that does not need a window:
/// - Database connection and queries (library.rs)
/// - Shared data structures (data.rs)
/// - Field validation before a record is saved (validate.rs)

pub mod data;
pub mod library;
pub mod validate;
