//! Domain types, constants and input validation for the DHT dashboard.
//!
//! This crate has no I/O so it can be shared by the repository layer and
//! the HTTP layer alike.

pub mod error;
pub mod reading;
pub mod threshold;
pub mod types;
