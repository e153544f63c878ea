use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Deployment, EpochSecs};

/// Deployment state of a whole serve application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    NotStarted,
    Deploying,
    DeployFailed,
    Running,
    Unhealthy,
    Deleting,
}

/// A serve application and the deployments it is made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application name; the default application is reported with an empty name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub route_prefix: Option<String>,
    pub status: ApplicationStatus,
    pub last_deployed_time_s: EpochSecs,
    /// Deployments keyed by deployment name.
    #[serde(default)]
    pub deployments: BTreeMap<String, Deployment>,
}

impl Application {
    /// Name shown for display, `-` for the unnamed default application.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "-" } else { &self.name }
    }

    /// Last deploy time in milliseconds.
    pub fn last_deployed_time_ms(&self) -> u64 {
        (self.last_deployed_time_s * 1000.0).max(0.0) as u64
    }
}
