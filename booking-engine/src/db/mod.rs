//! Persistence boundary
//!
//! The engine and scheduler only see the trait contracts in
//! [`repository`]; [`memory`] ships an in-process backend used by the
//! tests and by single-node deployments without external storage.

pub mod memory;
pub mod repository;
