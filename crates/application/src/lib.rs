//! Application Layer
//!
//! Owns the in-memory job and builder collections, applies board commands
//! to them, raises notifications and writes snapshots after every change.

pub mod board;
pub mod builder_repository;
pub mod job_repository;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use board::{AssignedBuilder, JobBoard};
pub use builder_repository::BuilderRepository;
pub use job_repository::JobRepository;
