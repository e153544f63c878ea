mod replica_state;
pub use replica_state::ReplicaState;

mod replica;
pub use replica::{Replica, ReplicaField};

mod deployment;
pub use deployment::{Deployment, DeploymentStatus};

mod application;
pub use application::{Application, ApplicationStatus};

mod snapshot;
pub use snapshot::{DeploymentSummary, ServeSnapshot};

mod page_query;
pub use page_query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageKey, PageQuery};

mod page;
pub use page::Page;

mod selection_config;
pub use selection_config::SelectionConfig;

/// Seconds since the unix epoch, as reported by the serve controller.
pub type EpochSecs = f64;
