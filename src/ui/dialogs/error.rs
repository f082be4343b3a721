//! Failures reported by dialog factories.

use std::fmt;

/// Which button a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Cancel,
    Open,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancel => f.write_str("cancel"),
            Self::Open => f.write_str("open"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// A button label cannot be handed to the toolkit.
    InvalidLabel { which: LabelKind, reason: &'static str },
    /// The toolkit is not initialized on the calling thread.
    ToolkitUnavailable,
    /// No display or desktop session to put the dialog on.
    NoDisplay,
    /// No native dialog backend exists for this platform.
    Unsupported { platform: &'static str },
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLabel { which, reason } => {
                write!(f, "invalid {which} button label: {reason}")
            }
            Self::ToolkitUnavailable => {
                f.write_str("GTK is not initialized on the calling thread")
            }
            Self::NoDisplay => f.write_str("no display available for the dialog"),
            Self::Unsupported { platform } => {
                write!(f, "native file dialogs are not supported on {platform}")
            }
        }
    }
}

impl std::error::Error for DialogError {}
