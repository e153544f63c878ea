pub mod filter;
pub use filter::{FieldMatcher, FilterSchema, FilterSet, MatchMode};
pub mod page;
pub use page::slice_to_page;
pub mod selection;
pub use selection::{ReplicaSelection, SelectionController, replica_schema};
