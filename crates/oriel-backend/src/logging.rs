//! One-shot logger setup for hosts and tests.
//!
//! The library itself only calls `log` macros; whether anything is printed
//! is the host's choice. Hosts that want output call [`init`] early in
//! `main`.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "oriel_backend=debug"). When unset, `RUST_LOG` applies, and without
/// that the level defaults to info so lifecycle messages are visible.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: Option<String>,

    /// ANSI coloring behavior.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
