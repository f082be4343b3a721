//! Picker application setup.

use crate::config;
use crate::ui::dialogs::{self, ButtonLabels, DialogFactory, OpenResponse};
use crate::ui::PickOutcome;
use adw::prelude::*;
use adw::Application;
use gtk4::gio::ApplicationFlags;
use log::{error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Flags for the picker application. Every run owns its own dialog, so
/// concurrent pickers must not be merged into one primary instance.
pub const APP_FLAGS: ApplicationFlags = ApplicationFlags::NON_UNIQUE;

/// Run the picker until the user answers the dialog.
pub fn run(labels: ButtonLabels) -> PickOutcome {
    let app = Application::builder()
        .application_id(config::APP_ID)
        .flags(APP_FLAGS)
        .build();

    let outcome = Rc::new(RefCell::new(PickOutcome::Cancelled));

    {
        let outcome = Rc::clone(&outcome);
        app.connect_activate(move |app| {
            if let Err(e) = show_open_dialog(app, &labels, Rc::clone(&outcome)) {
                error!("Could not create open dialog: {:#}", e);
                *outcome.borrow_mut() = PickOutcome::Failed;
                app.quit();
            }
        });
    }

    // Our own arguments are parsed by clap; keep GApplication from seeing them.
    let status = app.run_with_args::<&str>(&[]);
    if status != gtk4::glib::ExitCode::SUCCESS {
        warn!("Application exited with status {:?}", status);
    }

    outcome.replace(PickOutcome::Cancelled)
}

fn show_open_dialog(
    app: &Application,
    labels: &ButtonLabels,
    outcome: Rc<RefCell<PickOutcome>>,
) -> anyhow::Result<()> {
    let factory = dialogs::native_factory()?;
    let handle = factory.create_open_dialog(labels.cancel(), labels.open())?;

    // Keeps the application alive while only the dialog is open.
    handle.widget().set_application(Some(app));

    handle.connect_response(move |handle, response, path| {
        *outcome.borrow_mut() = match (response, path) {
            (OpenResponse::Accept, Some(path)) => {
                info!("Book selected: {}", path.display());
                PickOutcome::Picked(path)
            }
            (OpenResponse::Accept, None) => {
                warn!("Dialog accepted without a local file");
                PickOutcome::Cancelled
            }
            (OpenResponse::Cancel | OpenResponse::Dismissed, _) => {
                info!("Book selection cancelled");
                PickOutcome::Cancelled
            }
        };
        handle.close();
    });

    handle.present();
    Ok(())
}
