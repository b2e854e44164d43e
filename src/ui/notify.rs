/// Native message boxes for results the user must acknowledge
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::error::Error;

pub fn info(title: &str, description: &str) {
    show(MessageLevel::Info, title, description);
}

/// Report a failed action, titled by its error category
pub fn error(err: &Error) {
    show(MessageLevel::Error, err.title(), &err.to_string());
}

pub fn error_text(title: &str, description: &str) {
    show(MessageLevel::Error, title, description);
}

fn show(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
