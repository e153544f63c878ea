use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EpochSecs, ParseError, ReplicaState};

/// One replica of a serve deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replica {
    /// Unique replica identifier within the deployment.
    pub replica_id: String,
    /// Current lifecycle state.
    pub state: ReplicaState,
    /// Worker process id, once the actor is placed.
    #[serde(default)]
    pub pid: Option<String>,
    /// Name of the backing actor.
    #[serde(default)]
    pub actor_name: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub node_ip: Option<String>,
    /// When the replica was started.
    pub start_time_s: EpochSecs,
    #[serde(default)]
    pub log_file_path: Option<String>,
}

impl Replica {
    /// Create a replica with only the filterable fields populated.
    pub fn new(replica_id: impl Into<String>, state: ReplicaState, start_time_s: EpochSecs) -> Self {
        Self {
            replica_id: replica_id.into(),
            state,
            pid: None,
            actor_name: String::new(),
            actor_id: None,
            node_id: None,
            node_ip: None,
            start_time_s,
            log_file_path: None,
        }
    }

    /// Start time in milliseconds, the unit the dashboard formats dates in.
    pub fn start_time_ms(&self) -> u64 {
        (self.start_time_s * 1000.0).max(0.0) as u64
    }
}

/// Replica fields the operator can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplicaField {
    ReplicaId,
    State,
}

impl ReplicaField {
    /// Filter key used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicaField::ReplicaId => "replica_id",
            ReplicaField::State => "state",
        }
    }
}

impl fmt::Display for ReplicaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ReplicaField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replica_id" => Ok(ReplicaField::ReplicaId),
            "state" => Ok(ReplicaField::State),
            _ => Err(ParseError::ReplicaField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snapshot_record() {
        let json = r#"{
            "replica_id": "abc123",
            "state": "RUNNING",
            "pid": "4242",
            "actor_name": "SERVE_REPLICA::app#Model#abc123",
            "actor_id": "f00d",
            "node_id": "n1",
            "node_ip": "10.0.0.7",
            "start_time_s": 1700000000.5,
            "log_file_path": "/tmp/ray/session/logs/serve/replica.log"
        }"#;

        let replica: Replica = serde_json::from_str(json).unwrap();
        assert_eq!(replica.replica_id, "abc123");
        assert_eq!(replica.state, ReplicaState::Running);
        assert_eq!(replica.pid.as_deref(), Some("4242"));
        assert_eq!(replica.start_time_ms(), 1_700_000_000_500);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{"replica_id": "r1", "state": "STARTING", "start_time_s": 1.0}"#;
        let replica: Replica = serde_json::from_str(json).unwrap();
        assert_eq!(replica, Replica::new("r1", ReplicaState::Starting, 1.0));
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in [ReplicaField::ReplicaId, ReplicaField::State] {
            assert_eq!(field.as_str().parse::<ReplicaField>(), Ok(field));
        }
        assert!("node_ip".parse::<ReplicaField>().is_err());
    }
}
