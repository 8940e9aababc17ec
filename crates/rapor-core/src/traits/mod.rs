//! Collaborator traits consumed by the clustering service.
//!
//! Both traits are async for I/O flexibility; the algorithms they feed are
//! synchronous.
//!
//! Implementations:
//! - In-memory stubs in [`crate::stubs`] (tests, prototyping)
//! - RocksDB stores in the `rapor-storage` crate

mod grade_store;
mod result_store;

pub use grade_store::GradeStore;
pub use result_store::ClusterResultStore;
