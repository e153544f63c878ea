//! Domain types shared by the replica selection engine and its callers.
//!
//! Everything here is plain data: serde-derived records mirroring the serve
//! snapshot, pagination parameters, and the derived [`Page`] handed to the
//! presentation layer.

mod domain;
pub use domain::*;

mod error;
pub use error::{LookupError, ParseError};
