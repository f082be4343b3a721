//! Logger setup and GLib log forwarding.

use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the global logger and route GLib's own messages through it.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("Failed to install logger")?;

    #[cfg(target_os = "linux")]
    redirect_glib_logging(crate::config::GLIB_LOG_DOMAINS);

    Ok(())
}

/// Forward messages from the given GLib log domains into the `log` facade.
///
/// GTK 4 logs through the structured API, so this replaces the GLib writer
/// function. Messages from other domains go to GLib's default writer. The
/// writer can only be installed once per process.
#[cfg(target_os = "linux")]
pub fn redirect_glib_logging(domains: &'static [&'static str]) {
    install_glib_writer(domains, |level, domain, message| {
        log::log!(target: "glib", level, "{}: {}", domain, message);
    });
    log::debug!("Redirected GLib logging for {} domains", domains.len());
}

#[cfg(target_os = "linux")]
fn install_glib_writer<F>(domains: &'static [&'static str], sink: F)
where
    F: Fn(log::Level, &str, &str) + Send + Sync + 'static,
{
    use gtk4::glib::{self, LogField, LogWriterOutput};

    fn field<'a>(fields: &'a [LogField<'_>], key: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|field| field.key() == key)
            .and_then(|field| field.value_str())
    }

    glib::log_set_writer_func(move |level, fields| match field(fields, "GLIB_DOMAIN") {
        Some(domain) if domains.iter().any(|forwarded| *forwarded == domain) => {
            sink(level_for(level), domain, field(fields, "MESSAGE").unwrap_or_default());
            LogWriterOutput::Handled
        }
        _ => glib::log_writer_default(level, fields),
    });
}

#[cfg(target_os = "linux")]
fn level_for(level: gtk4::glib::LogLevel) -> log::Level {
    use gtk4::glib::LogLevel;

    match level {
        LogLevel::Error | LogLevel::Critical => log::Level::Error,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Message | LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use gtk4::glib::{self, LogLevel};
    use std::sync::{Arc, Mutex};

    #[test]
    fn glib_levels_map_onto_log_levels() {
        assert_eq!(level_for(LogLevel::Critical), log::Level::Error);
        assert_eq!(level_for(LogLevel::Warning), log::Level::Warn);
        assert_eq!(level_for(LogLevel::Message), log::Level::Info);
        assert_eq!(level_for(LogLevel::Debug), log::Level::Debug);
    }

    #[test]
    fn messages_in_forwarded_domains_reach_the_logger() {
        let seen: Arc<Mutex<Vec<(log::Level, String, String)>>> = Arc::default();
        let sink_seen = Arc::clone(&seen);
        install_glib_writer(&["Imprint-Test"], move |level, domain, message| {
            sink_seen
                .lock()
                .unwrap()
                .push((level, domain.to_string(), message.to_string()));
        });

        glib::g_message!("Imprint-Test", "Theme parser error: gtk.css:3:1");
        glib::g_message!("Imprint-Other", "not forwarded");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(
                log::Level::Info,
                "Imprint-Test".to_string(),
                "Theme parser error: gtk.css:3:1".to_string()
            )]
        );
    }
}
