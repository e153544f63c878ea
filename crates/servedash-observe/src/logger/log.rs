use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    Layer, Registry, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Build the output layer for `cfg.format` and install it behind the level filter.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.level.to_filter()?;
    let output = output_layer(cfg)?;

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .try_init()
        .map_err(|e| classify(e.to_string()))
}

fn output_layer(cfg: &LoggerConfig) -> Result<BoxedLayer, LoggerError> {
    match cfg.format {
        LoggerFormat::Text => Ok(fmt::layer()
            .with_ansi(cfg.use_color)
            .with_target(cfg.with_targets)
            .with_timer(local_rfc3339())
            .boxed()),
        LoggerFormat::Json => Ok(fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(cfg.with_targets)
            .with_timer(local_rfc3339())
            .boxed()),
        LoggerFormat::Journald => journald_layer(),
    }
}

/// Timestamps in the host's offset; UTC when the offset cannot be read.
fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn classify(message: String) -> LoggerError {
    let already_set = ["SetGlobalDefaultError", "global default trace dispatcher"]
        .iter()
        .any(|needle| message.contains(needle));
    if already_set {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(message)
    }
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald_layer() -> Result<BoxedLayer, LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?;
    Ok(layer.boxed())
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald_layer() -> Result<BoxedLayer, LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_already_initialized() {
        let cfg = LoggerConfig::default();
        assert!(install(&cfg).is_ok());

        let json = LoggerConfig {
            format: LoggerFormat::Json,
            ..LoggerConfig::default()
        };
        assert!(matches!(install(&json), Err(LoggerError::AlreadyInitialized)));
    }

    #[test]
    fn unrelated_failures_keep_their_message() {
        let err = classify("no journal socket".to_string());
        assert!(matches!(err, LoggerError::InitializationFailed(ref m) if m == "no journal socket"));
    }

    #[cfg(not(all(target_os = "linux", feature = "journald")))]
    #[test]
    fn journald_layer_needs_feature() {
        assert!(matches!(journald_layer(), Err(LoggerError::JournaldNotSupported)));
    }
}
