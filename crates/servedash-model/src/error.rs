use thiserror::Error;

/// Failure to locate a referenced entity inside a [`crate::ServeSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Application with name \"{0}\" not found.")]
    ApplicationNotFound(String),
    #[error("Deployment with name \"{0}\" not found.")]
    DeploymentNotFound(String),
}

/// Failure to parse a textual token into one of the closed model enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown replica state: {0}")]
    ReplicaState(String),
    #[error("unknown page key: {0} (expected: pageNo|pageSize)")]
    PageKey(String),
    #[error("unknown replica field: {0}")]
    ReplicaField(String),
}
