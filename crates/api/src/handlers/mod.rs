//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `dht_db` and map
//! errors to HTTP responses.

pub mod reading;
pub mod threshold;
