//! kugiri CLI library
//!
//! This library provides the command-line interface for the kugiri
//! text segmentation system.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod locale_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Initialize logging from the verbosity count
///
/// `-q` silences everything but errors; `RUST_LOG` overrides both.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    // A second init in the same process (tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
