use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub(super) fn error(message: impl Into<String>) {
    let message = message.into();
    log::warn!("{message}");
    show(MessageLevel::Error, "Error", message);
}

pub(super) fn info(message: impl Into<String>) {
    let message = message.into();
    log::info!("{message}");
    show(MessageLevel::Info, "Success", message);
}

fn show(level: MessageLevel, title: &str, description: String) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
