//! Entity structs, create DTOs, and typed patches.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct with the camelCase wire shape
//! - A create DTO with a pure `validate` constructor from a JSON body
//! - For alerts, a patch struct (all `Option` fields) with a pure merge

pub mod alert;
pub mod device;
pub mod incident;
pub mod log_entry;
