//! Tests for k-means clustering.
//!
//! # Test Organization
//!
//! - `helpers` - Common test utilities and data generators
//! - `config_tests` - KMeansConfig validation tests
//! - `engine_tests` - Main KMeansEngine clustering tests
//! - `edge_cases` - Edge case and boundary condition tests

mod helpers;
