//! Row models.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct shaped like the JSON
//! the dashboard expects.

pub mod reading;
pub mod threshold;
