use thiserror::Error;

/// Reasons the servedash logger could not be configured or installed.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format `{0}` (expected: text|json|journald)")]
    InvalidFormat(String),
    #[error("journald output requires Linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global logger is already installed")]
    AlreadyInitialized,
    #[error("logger setup failed: {0}")]
    InitializationFailed(String),
    #[error("invalid log filter `{0}`")]
    InvalidLogLevel(String),
}
