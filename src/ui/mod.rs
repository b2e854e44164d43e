/// Window widgets
///
/// - The metadata form (form.rs)
/// - The filtered browse table (browse.rs)
/// - Native message boxes (notify.rs)

pub mod browse;
pub mod form;
pub mod notify;
