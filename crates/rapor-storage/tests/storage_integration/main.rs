//! Integration tests for RocksDbRaporStore.
//!
//! Every test opens a real database in a temporary directory.

mod common;

mod concurrent;
mod grade_import;
mod result_replace;
mod service_roundtrip;
