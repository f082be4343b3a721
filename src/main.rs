//! imprint-pick: ask the user for a book file and print its path.

use clap::Parser;
use imprint::config::user::Config;
use imprint::logging;
use imprint::ui::dialogs::ButtonLabels;
use imprint::ui::PickOutcome;
use log::{error, info, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "imprint-pick",
    version,
    about = "Pick a book file with the native open dialog"
)]
struct Cli {
    /// Label for the cancel button (defaults to the configured label)
    #[arg(long, value_name = "TEXT")]
    cancel_label: Option<String>,

    /// Label for the open button (defaults to the configured label)
    #[arg(long, value_name = "TEXT")]
    open_label: Option<String>,

    /// Store the given labels in the user configuration
    #[arg(long)]
    save_labels: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = logging::init(level) {
        eprintln!("{e:#}");
    }

    let mut config = Config::load();
    if let Some(label) = cli.cancel_label {
        config.dialog.cancel_label = label;
    }
    if let Some(label) = cli.open_label {
        config.dialog.open_label = label;
    }

    let labels = match config.dialog.labels() {
        Ok(labels) => labels,
        Err(e) => {
            error!("{}", e);
            return PickOutcome::Failed.exit_code();
        }
    };

    if cli.save_labels {
        match config.save() {
            Ok(path) => info!("Saved dialog labels to {}", path.display()),
            Err(e) => error!("Failed to save config: {}", e),
        }
    }

    let outcome = pick(labels);
    if let PickOutcome::Picked(path) = &outcome {
        println!("{}", path.display());
    }
    outcome.exit_code()
}

#[cfg(target_os = "linux")]
fn pick(labels: ButtonLabels) -> PickOutcome {
    info!("Starting book picker");
    imprint::ui::app::run(labels)
}

#[cfg(not(target_os = "linux"))]
fn pick(_labels: ButtonLabels) -> PickOutcome {
    match imprint::ui::dialogs::native_factory() {
        Ok(factory) => match factory {},
        Err(e) => {
            error!("{}", e);
            PickOutcome::Failed
        }
    }
}
