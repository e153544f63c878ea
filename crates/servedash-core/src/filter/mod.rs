//! Per-field filter predicates and the filter set that combines them.
//!
//! A [`FilterSchema`] registers one [`FieldMatcher`] per filterable field.
//! A [`FilterSet`] holds the operator's current input for each field. An item
//! passes when it satisfies every non-empty entry (logical AND).

mod matcher;
pub use matcher::{FieldMatcher, MatchMode};

mod schema;
pub use schema::FilterSchema;

mod set;
pub use set::FilterSet;
