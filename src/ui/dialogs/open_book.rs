//! Open-book dialog description and the factory capability.
//!
//! [`OpenDialogSpec`] fixes everything about the dialog that callers cannot
//! change: the title, the "open" action, the button order and modality.
//! Backends implement [`DialogFactory::build`] and get label validation for
//! free through [`DialogFactory::create_open_dialog`].

use super::error::{DialogError, LabelKind};
use crate::config::DIALOG_TITLE;

/// What the file chooser lets the user do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserAction {
    /// Pick an existing file.
    Open,
}

/// Outcome reported by the dialog, and the response bound to each button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenResponse {
    Accept,
    Cancel,
    /// Closed without pressing either button.
    Dismissed,
}

/// Validated button labels, ready for the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    cancel: String,
    open: String,
}

impl ButtonLabels {
    /// Empty labels are allowed; labels containing NUL are not, since the
    /// toolkit receives them as C strings.
    pub fn new(cancel: impl Into<String>, open: impl Into<String>) -> Result<Self, DialogError> {
        let cancel = cancel.into();
        let open = open.into();
        check_label(&cancel, LabelKind::Cancel)?;
        check_label(&open, LabelKind::Open)?;
        Ok(Self { cancel, open })
    }

    pub fn cancel(&self) -> &str {
        &self.cancel
    }

    pub fn open(&self) -> &str {
        &self.open
    }
}

fn check_label(label: &str, which: LabelKind) -> Result<(), DialogError> {
    if label.contains('\0') {
        return Err(DialogError::InvalidLabel {
            which,
            reason: "contains a NUL byte",
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: String,
    pub response: OpenResponse,
}

/// Full description of an open-book dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialogSpec {
    title: &'static str,
    action: ChooserAction,
    buttons: [ButtonSpec; 2],
    modal: bool,
}

impl OpenDialogSpec {
    pub fn open_book(labels: ButtonLabels) -> Self {
        let ButtonLabels { cancel, open } = labels;
        Self {
            title: DIALOG_TITLE,
            action: ChooserAction::Open,
            buttons: [
                ButtonSpec {
                    label: cancel,
                    response: OpenResponse::Cancel,
                },
                ButtonSpec {
                    label: open,
                    response: OpenResponse::Accept,
                },
            ],
            modal: true,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn action(&self) -> ChooserAction {
        self.action
    }

    /// Buttons in display order: cancel first, then accept.
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }
}

/// Something that can construct native open-file dialogs.
pub trait DialogFactory {
    type Dialog;

    /// Construct a dialog matching `spec`. The dialog is not shown.
    fn build(&self, spec: &OpenDialogSpec) -> Result<Self::Dialog, DialogError>;

    /// Create a modal "Choose Book" dialog with the given button labels.
    fn create_open_dialog(
        &self,
        cancel_text: &str,
        open_text: &str,
    ) -> Result<Self::Dialog, DialogError> {
        let labels = ButtonLabels::new(cancel_text, open_text)?;
        self.build(&OpenDialogSpec::open_book(labels))
    }
}
