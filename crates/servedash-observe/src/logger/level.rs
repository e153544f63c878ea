use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Directives used when none are configured: `info` everywhere, with the
/// selection engine's filter and page changes visible at `debug`.
pub const DEFAULT_DIRECTIVES: &str = "info,servedash_core=debug";

/// Validated `EnvFilter` directive string (e.g. `info` or `servedash_core=trace,info`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(directives: impl Into<String>) -> Result<Self, LoggerError> {
        let directives = directives.into();
        let trimmed = directives.trim();
        if trimmed.is_empty() {
            return Err(LoggerError::InvalidLogLevel(directives));
        }
        EnvFilter::try_new(trimmed)
            .map_err(|_| LoggerError::InvalidLogLevel(directives.clone()))?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.0).map_err(|_| LoggerError::InvalidLogLevel(self.0.clone()))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self(DEFAULT_DIRECTIVES.to_string())
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoggerLevel> for String {
    fn from(level: LoggerLevel) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_targeted_directives() {
        assert_eq!(LoggerLevel::new("debug").unwrap().as_str(), "debug");
        assert_eq!(
            LoggerLevel::new(" servedash_core=trace,info ").unwrap().as_str(),
            "servedash_core=trace,info"
        );
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(
            LoggerLevel::new("  "),
            Err(LoggerError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            LoggerLevel::new("servedash_core=loud"),
            Err(LoggerError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn default_surfaces_selection_changes() {
        let level = LoggerLevel::default();
        assert_eq!(level.as_str(), DEFAULT_DIRECTIVES);
        assert_eq!(LoggerLevel::new(DEFAULT_DIRECTIVES).unwrap(), level);

        let filter = level.to_filter().unwrap().to_string();
        assert!(filter.contains("servedash_core=debug"));
    }

    #[test]
    fn deserializes_through_validation() {
        let level: LoggerLevel = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(level.as_str(), "warn");
        assert!(serde_json::from_str::<LoggerLevel>(r#""""#).is_err());
    }
}
