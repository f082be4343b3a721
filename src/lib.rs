//! Native "open book" dialog for Imprint.
//!
//! The dialog factory lives in [`ui::dialogs`]. The GTK backend is only
//! compiled on Linux; other platforms get a factory that always reports
//! [`ui::dialogs::DialogError::Unsupported`].

pub mod config;
pub mod logging;
pub mod ui;
