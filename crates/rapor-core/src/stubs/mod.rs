//! In-memory implementations of the collaborator traits.
//!
//! # TEST ONLY
//!
//! No persistence: all data is lost when a store is dropped. Use the
//! RocksDB stores from `rapor-storage` for anything that must survive a
//! restart.

mod grade_store_stub;
mod result_store_stub;

pub use grade_store_stub::InMemoryGradeStore;
pub use result_store_stub::InMemoryClusterResultStore;
