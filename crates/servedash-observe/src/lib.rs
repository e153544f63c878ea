//! Logging bootstrap for servedash binaries.
//!
//! Libraries in the workspace only emit `tracing` events; installing a
//! subscriber is left to the binary via [`init_logger`].

mod logger;
pub use logger::*;
