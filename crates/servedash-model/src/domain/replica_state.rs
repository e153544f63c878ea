use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Lifecycle state of a single deployment replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicaState {
    /// Replica actor is being created.
    Starting,
    /// Replica is applying a new deployment config.
    Updating,
    /// Replica is being restored after a controller restart.
    Recovering,
    /// Replica is serving traffic.
    Running,
    /// Replica is shutting down.
    Stopping,
    /// Replica is scheduled to move off a draining node.
    PendingMigration,
}

impl ReplicaState {
    /// Every state, in lifecycle order.
    pub const ALL: [ReplicaState; 6] = [
        ReplicaState::Starting,
        ReplicaState::Updating,
        ReplicaState::Recovering,
        ReplicaState::Running,
        ReplicaState::Stopping,
        ReplicaState::PendingMigration,
    ];

    /// Wire name of the state, identical to its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicaState::Starting => "STARTING",
            ReplicaState::Updating => "UPDATING",
            ReplicaState::Recovering => "RECOVERING",
            ReplicaState::Running => "RUNNING",
            ReplicaState::Stopping => "STOPPING",
            ReplicaState::PendingMigration => "PENDING_MIGRATION",
        }
    }

    /// Returns `true` if the replica can currently accept requests.
    pub fn is_serving(&self) -> bool {
        matches!(self, ReplicaState::Running)
    }
}

impl fmt::Display for ReplicaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ReplicaState {
    type Err = ParseError;

    /// Parsing is exact: `"running"` is not a state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReplicaState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseError::ReplicaState(s.to_string()))
    }
}
