//! Logging setup for the bikeshare binary.
//!
//! Library code logs through the `log` macros; the binary installs an
//! `env_logger` backend writing to stderr so the report on stdout stays clean.
//!
//! The default level is `warn`. Each `-v` raises it one step (`info`, then
//! `debug`), and `RUST_LOG` overrides both:
//!
//! ```bash
//! RUST_LOG=bikeshare=debug bikeshare
//! ```

use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp_millis()
        .parse_default_env();
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
