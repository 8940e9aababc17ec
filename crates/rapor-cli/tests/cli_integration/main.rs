//! Integration tests for the rapor CLI.
//!
//! Tests execute the REAL binary against a REAL RocksDB database in a
//! temporary directory.

mod helpers;

mod exit_code_test;
mod workflow_test;
