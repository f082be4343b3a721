//! User interface: the open-book dialog and the picker application shell.

#[cfg(target_os = "linux")]
pub mod app;
pub mod dialogs;

use std::path::PathBuf;
use std::process::ExitCode;

/// How a picker run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user accepted a file.
    Picked(PathBuf),
    /// The dialog was cancelled or closed without a choice.
    Cancelled,
    /// The dialog could not be created.
    Failed,
}

impl PickOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Picked(_) => ExitCode::SUCCESS,
            Self::Cancelled => ExitCode::from(1),
            Self::Failed => ExitCode::from(2),
        }
    }
}
