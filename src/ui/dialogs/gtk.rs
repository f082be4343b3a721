//! GTK 4 backend for the open-book dialog.

// GtkFileChooserDialog is deprecated since GTK 4.10, but GtkFileDialog cannot
// carry a custom cancel label.
#![allow(deprecated)]

use super::error::DialogError;
use super::open_book::{ChooserAction, DialogFactory, OpenDialogSpec, OpenResponse};
use gtk4::gio::prelude::FileExt;
use gtk4::prelude::*;
use gtk4::{FileChooserAction, FileChooserDialog, ResponseType, Window};
use log::{debug, info};
use std::path::PathBuf;

/// Builds dialogs with `GtkFileChooserDialog`. Must be used on the GTK main
/// thread.
#[derive(Debug, Clone)]
pub struct GtkDialogFactory {
    _private: (),
}

impl GtkDialogFactory {
    /// Fails if GTK is not ready on this thread or there is no display.
    pub fn new() -> Result<Self, DialogError> {
        ensure_toolkit()?;
        Ok(Self { _private: () })
    }
}

fn ensure_toolkit() -> Result<(), DialogError> {
    if !gtk4::is_initialized_main_thread() {
        return Err(DialogError::ToolkitUnavailable);
    }
    if gtk4::gdk::Display::default().is_none() {
        return Err(DialogError::NoDisplay);
    }
    Ok(())
}

impl DialogFactory for GtkDialogFactory {
    type Dialog = DialogHandle;

    fn build(&self, spec: &OpenDialogSpec) -> Result<DialogHandle, DialogError> {
        ensure_toolkit()?;

        let buttons: Vec<(&str, ResponseType)> = spec
            .buttons()
            .iter()
            .map(|button| (button.label.as_str(), response_type(button.response)))
            .collect();

        let dialog = FileChooserDialog::new(
            Some(spec.title()),
            None::<&Window>,
            chooser_action(spec.action()),
            &buttons,
        );
        dialog.set_modal(spec.is_modal());

        debug!("Created file chooser dialog '{}'", spec.title());
        Ok(DialogHandle { dialog })
    }
}

fn chooser_action(action: ChooserAction) -> FileChooserAction {
    match action {
        ChooserAction::Open => FileChooserAction::Open,
    }
}

fn response_type(response: OpenResponse) -> ResponseType {
    match response {
        OpenResponse::Accept => ResponseType::Accept,
        OpenResponse::Cancel => ResponseType::Cancel,
        OpenResponse::Dismissed => ResponseType::DeleteEvent,
    }
}

impl From<ResponseType> for OpenResponse {
    fn from(response: ResponseType) -> Self {
        match response {
            ResponseType::Accept => Self::Accept,
            ResponseType::Cancel => Self::Cancel,
            _ => Self::Dismissed,
        }
    }
}

/// A configured, not yet shown, open-book dialog.
///
/// The handle owns a reference to the GTK widget; the widget itself lives
/// until it is closed and every handle is dropped.
#[derive(Debug, Clone)]
pub struct DialogHandle {
    dialog: FileChooserDialog,
}

impl DialogHandle {
    pub fn present(&self) {
        info!("Showing open-book dialog");
        self.dialog.present();
    }

    pub fn close(&self) {
        self.dialog.close();
    }

    /// The file currently selected in the dialog, if it has a local path.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.dialog.file().and_then(|file| file.path())
    }

    /// Call `f` whenever the user responds. The path is only set for
    /// [`OpenResponse::Accept`].
    pub fn connect_response<F>(&self, f: F)
    where
        F: Fn(&DialogHandle, OpenResponse, Option<PathBuf>) + 'static,
    {
        self.dialog.connect_response(move |dialog, response| {
            let handle = DialogHandle {
                dialog: dialog.clone(),
            };
            let response = OpenResponse::from(response);
            let path = match response {
                OpenResponse::Accept => handle.selected_path(),
                OpenResponse::Cancel | OpenResponse::Dismissed => None,
            };
            f(&handle, response, path);
        });
    }

    /// The underlying GTK widget.
    pub fn widget(&self) -> &FileChooserDialog {
        &self.dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_codes_are_not_confused() {
        assert_eq!(OpenResponse::from(ResponseType::Accept), OpenResponse::Accept);
        assert_eq!(OpenResponse::from(ResponseType::Cancel), OpenResponse::Cancel);
        assert_eq!(
            OpenResponse::from(ResponseType::DeleteEvent),
            OpenResponse::Dismissed
        );
        assert_eq!(OpenResponse::from(ResponseType::Ok), OpenResponse::Dismissed);
    }

    #[test]
    fn button_responses_map_to_gtk_constants() {
        assert_eq!(response_type(OpenResponse::Cancel), ResponseType::Cancel);
        assert_eq!(response_type(OpenResponse::Accept), ResponseType::Accept);
    }

    fn button_label(dialog: &FileChooserDialog, response: ResponseType) -> Option<String> {
        dialog
            .widget_for_response(response)
            .and_downcast::<gtk4::Button>()
            .and_then(|button| button.label())
            .map(|label| label.to_string())
    }

    #[test]
    #[ignore = "requires a display"]
    fn builds_modal_open_dialog_with_caller_labels() {
        gtk4::init().unwrap();
        let factory = GtkDialogFactory::new().unwrap();

        let handle = factory.create_open_dialog("Annuler", "Ouvrir").unwrap();
        let dialog = handle.widget();
        assert_eq!(dialog.title().as_deref(), Some("Choose Book"));
        assert_eq!(dialog.action(), FileChooserAction::Open);
        assert!(dialog.is_modal());
        assert!(!dialog.is_visible());
        assert_eq!(button_label(dialog, ResponseType::Cancel).as_deref(), Some("Annuler"));
        assert_eq!(button_label(dialog, ResponseType::Accept).as_deref(), Some("Ouvrir"));

        let handle = factory.create_open_dialog("", "").unwrap();
        let dialog = handle.widget();
        assert_eq!(dialog.title().as_deref(), Some("Choose Book"));
        assert!(dialog.widget_for_response(ResponseType::Cancel).is_some());
        assert!(dialog.widget_for_response(ResponseType::Accept).is_some());
        assert_eq!(handle.selected_path(), None);
    }
}
