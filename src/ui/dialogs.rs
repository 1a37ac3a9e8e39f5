//! Startup dialogs: native message boxes via rfd, welcome and picker via Slint.

use crate::error::Result;
use crate::services::Prompter;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use slint::{ComponentHandle, ModelRc, StandardListViewItem, VecModel};
use std::cell::Cell;
use std::rc::Rc;

/// Shows an error in a blocking native dialog.
pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Unexpected error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Prompter backed by real windows.
pub struct DesktopPrompter;

impl DesktopPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DesktopPrompter {
    fn notice(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn welcome(&mut self) -> Result<()> {
        let welcome = crate::WelcomeWindow::new()?;
        welcome.on_start({
            let ui_handle = welcome.as_weak();
            move || {
                if let Some(ui) = ui_handle.upgrade() {
                    let _ = ui.hide();
                }
            }
        });
        welcome.run()?;
        Ok(())
    }

    fn choose(&mut self, names: &[String]) -> Result<Option<String>> {
        let picker = crate::PickerWindow::new()?;
        let items: Vec<StandardListViewItem> = names
            .iter()
            .map(|name| StandardListViewItem::from(name.as_str()))
            .collect();
        picker.set_files(ModelRc::new(VecModel::from(items)));
        picker.set_current_item(0);

        // Closing the window without pressing Open leaves this unset.
        let chosen: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

        picker.on_accepted({
            let ui_handle = picker.as_weak();
            let chosen = chosen.clone();
            move |index| {
                chosen.set(usize::try_from(index).ok());
                if let Some(ui) = ui_handle.upgrade() {
                    let _ = ui.hide();
                }
            }
        });

        picker.on_cancelled({
            let ui_handle = picker.as_weak();
            move || {
                if let Some(ui) = ui_handle.upgrade() {
                    let _ = ui.hide();
                }
            }
        });

        picker.run()?;

        Ok(chosen.get().and_then(|index| names.get(index).cloned()))
    }
}
