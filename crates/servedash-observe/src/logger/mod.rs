mod config;
mod error;
mod format;
mod level;
mod log;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LoggerFormat;
pub use level::{DEFAULT_DIRECTIVES, LoggerLevel};

/// Install the global subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] on a second call.
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    log::install(cfg)
}
