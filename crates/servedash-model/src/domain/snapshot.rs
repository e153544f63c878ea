use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Application, Deployment, DeploymentStatus, LookupError};

/// Point-in-time view of every serve application, as fetched by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServeSnapshot {
    /// Applications keyed by application name.
    #[serde(default)]
    pub applications: BTreeMap<String, Application>,
}

impl ServeSnapshot {
    /// Get an application by name.
    pub fn application(&self, name: &str) -> Result<&Application, LookupError> {
        self.applications
            .get(name)
            .ok_or_else(|| LookupError::ApplicationNotFound(name.to_string()))
    }

    /// Resolve a deployment inside an application.
    ///
    /// The application is checked first, so a missing application is reported
    /// even when the deployment name is also wrong.
    pub fn deployment(
        &self,
        application_name: &str,
        deployment_name: &str,
    ) -> Result<(&Application, &Deployment), LookupError> {
        let application = self.application(application_name)?;
        let deployment = application
            .deployments
            .get(deployment_name)
            .ok_or_else(|| LookupError::DeploymentNotFound(deployment_name.to_string()))?;
        Ok((application, deployment))
    }
}

/// Header metadata shown above the replica table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSummary {
    pub name: String,
    pub status: DeploymentStatus,
    /// Status details; `None` when the controller reported nothing.
    pub message: Option<String>,
    pub replica_count: usize,
    pub has_config: bool,
    pub last_deployed_time_ms: u64,
}

impl DeploymentSummary {
    pub fn new(application: &Application, deployment: &Deployment) -> Self {
        Self {
            name: deployment.name.clone(),
            status: deployment.status,
            message: (!deployment.message.is_empty()).then(|| deployment.message.clone()),
            replica_count: deployment.replica_count(),
            has_config: deployment.deployment_config.is_some(),
            last_deployed_time_ms: application.last_deployed_time_ms(),
        }
    }
}
