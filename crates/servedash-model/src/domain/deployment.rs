use serde::{Deserialize, Serialize};

use crate::{Replica, ReplicaState};

/// Aggregate health of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentStatus {
    Updating,
    Healthy,
    Unhealthy,
    Upscaling,
    Downscaling,
}

/// A serve deployment together with its replicas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    pub status: DeploymentStatus,
    /// Human-readable status details, empty when there is nothing to report.
    #[serde(default)]
    pub message: String,
    /// Raw deployment config as reported by the controller; opaque to the selection engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_config: Option<serde_json::Value>,
    #[serde(default)]
    pub replicas: Vec<Replica>,
}

impl Deployment {
    /// Number of replicas regardless of state.
    pub fn replica_count(&self) -> usize {
        self.replicas.len()
    }

    /// Number of replicas in `state`.
    pub fn count_in_state(&self, state: ReplicaState) -> usize {
        self.replicas.iter().filter(|r| r.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_replicas_by_state() {
        let deployment = Deployment {
            name: "Model".to_string(),
            status: DeploymentStatus::Healthy,
            message: String::new(),
            deployment_config: None,
            replicas: vec![
                Replica::new("a", ReplicaState::Running, 0.0),
                Replica::new("b", ReplicaState::Running, 0.0),
                Replica::new("c", ReplicaState::Stopping, 0.0),
            ],
        };

        assert_eq!(deployment.replica_count(), 3);
        assert_eq!(deployment.count_in_state(ReplicaState::Running), 2);
        assert_eq!(deployment.count_in_state(ReplicaState::Starting), 0);
    }

    #[test]
    fn keeps_opaque_config() {
        let json = r#"{
            "name": "Model",
            "status": "UPSCALING",
            "deployment_config": {"num_replicas": 3, "user_config": null, "autoscaling": false},
            "replicas": []
        }"#;

        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.status, DeploymentStatus::Upscaling);
        assert!(deployment.message.is_empty());
        assert!(deployment.deployment_config.is_some());

        let back = serde_json::to_string(&deployment).unwrap();
        assert!(back.contains("\"num_replicas\":3"));
    }
}
