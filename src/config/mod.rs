//! Application constants and user configuration.

pub mod user;

/// GApplication identifier for the picker.
pub const APP_ID: &str = "org.imprint.BookPicker";

/// Title shown on every open-book dialog.
pub const DIALOG_TITLE: &str = "Choose Book";

/// GLib log domains forwarded into the `log` facade.
pub const GLIB_LOG_DOMAINS: &[&str] = &[
    "GLib",
    "GLib-GObject",
    "GLib-GIO",
    "GThread",
    "Gtk",
    "Gdk",
];
