//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod reading_repo;
pub mod threshold_repo;

pub use reading_repo::ReadingRepo;
pub use threshold_repo::ThresholdRepo;
