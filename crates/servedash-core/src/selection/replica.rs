use servedash_model::{Deployment, Replica, ReplicaField, SelectionConfig};

use crate::{FieldMatcher, FilterSchema, SelectionController};

/// Selection over the replicas of one deployment.
pub type ReplicaSelection = SelectionController<Replica>;

/// Replica filters: substring match on the id, exact match on the state.
///
/// A lone `-` in the id input is the picker's "none" option and clears it.
pub fn replica_schema() -> FilterSchema<Replica> {
    let by_id = FieldMatcher::contains(ReplicaField::ReplicaId.as_str(), |r: &Replica| {
        r.replica_id.as_str()
    })
    .with_placeholder("-");
    let by_state =
        FieldMatcher::exact(ReplicaField::State.as_str(), |r: &Replica| r.state.as_str());

    FilterSchema::new().with(by_id).with(by_state)
}

impl SelectionController<Replica> {
    /// Fresh selection over `deployment`'s replicas.
    pub fn for_deployment(deployment: &Deployment, cfg: SelectionConfig) -> Self {
        Self::new(replica_schema(), cfg).with_source(deployment.replicas.clone())
    }

    /// Typed variant of [`SelectionController::set_filter`].
    pub fn set_replica_filter(&mut self, field: ReplicaField, value: &str) {
        self.set_filter(field.as_str(), value);
    }

    /// Suggestions for the id or state input.
    pub fn replica_filter_options(&self, field: ReplicaField) -> Vec<String> {
        self.filter_options(field.as_str())
    }
}
