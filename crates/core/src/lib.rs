//! Domain building blocks for the items service.
//!
//! Nothing in this crate performs I/O. It holds the shared id/timestamp
//! types, the error taxonomy, the wire schema transform and the parser for
//! store integrity messages, so both the persistence and HTTP crates agree
//! on them.

pub mod error;
pub mod integrity;
pub mod patch;
pub mod schema;
pub mod types;
