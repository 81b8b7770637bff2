//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Patch` fields) for partial updates
//!
//! All of them are wire types: camelCase on the wire, with an explicit
//! field-name table per type.

pub mod item;
