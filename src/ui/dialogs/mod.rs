//! Dialog windows for user interaction.
//!
//! This module contains the open-book dialog:
//! - `open_book`: the dialog description and the `DialogFactory` capability
//! - `gtk`: the GTK 4 factory (Linux only)
//! - `error`: failures reported by factories

pub mod error;
#[cfg(target_os = "linux")]
pub mod gtk;
pub mod open_book;

pub use error::{DialogError, LabelKind};
#[cfg(target_os = "linux")]
pub use gtk::{DialogHandle, GtkDialogFactory};
pub use open_book::{
    ButtonLabels, ButtonSpec, ChooserAction, DialogFactory, OpenDialogSpec, OpenResponse,
};

/// The dialog factory backed by the platform's native toolkit.
#[cfg(target_os = "linux")]
pub type NativeFactory = GtkDialogFactory;

/// Placeholder factory for platforms without a native backend. It has no
/// values, so [`native_factory`] can only ever return an error.
#[cfg(not(target_os = "linux"))]
#[derive(Debug)]
pub enum NativeFactory {}

#[cfg(not(target_os = "linux"))]
impl DialogFactory for NativeFactory {
    type Dialog = std::convert::Infallible;

    fn build(&self, _spec: &OpenDialogSpec) -> Result<Self::Dialog, DialogError> {
        match *self {}
    }
}

/// Select the native dialog factory for this platform at startup.
#[cfg(target_os = "linux")]
pub fn native_factory() -> Result<NativeFactory, DialogError> {
    GtkDialogFactory::new()
}

/// Select the native dialog factory for this platform at startup.
#[cfg(not(target_os = "linux"))]
pub fn native_factory() -> Result<NativeFactory, DialogError> {
    Err(DialogError::Unsupported {
        platform: std::env::consts::OS,
    })
}
