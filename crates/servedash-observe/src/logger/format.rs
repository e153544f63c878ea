use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::logger::error::LoggerError;

/// Where log events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// Human-readable lines on stdout.
    #[default]
    Text,
    /// One JSON object per event on stdout.
    Json,
    /// systemd journal; needs the `journald` feature on Linux.
    Journald,
}

impl LoggerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        }
    }

    /// Whether this build can install the format.
    pub fn is_available(&self) -> bool {
        match self {
            LoggerFormat::Journald => cfg!(all(target_os = "linux", feature = "journald")),
            LoggerFormat::Text | LoggerFormat::Json => true,
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    /// Case-insensitive; `journal` is accepted for `journald`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let format = [LoggerFormat::Text, LoggerFormat::Json, LoggerFormat::Journald]
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
            .or_else(|| name.eq_ignore_ascii_case("journal").then_some(LoggerFormat::Journald))
            .ok_or_else(|| LoggerError::InvalidFormat(s.to_string()))?;

        if !format.is_available() {
            return Err(LoggerError::JournaldNotSupported);
        }
        Ok(format)
    }
}
