//! Domain primitives shared by the store and the HTTP layer.
//!
//! Everything here is pure: enums for the closed vocabularies of each
//! entity, the id/timestamp aliases, the domain error type, and the
//! field-level readers used to validate JSON request bodies.

pub mod alert;
pub mod device;
pub mod error;
pub mod incident;
pub mod log_level;
pub mod schema;
pub mod types;
