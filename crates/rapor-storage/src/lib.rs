//! Rapor Storage
//!
//! RocksDB persistence for the clustering pipeline. One database holds
//! three column families:
//!
//! | CF | Key | Value |
//! |----|-----|-------|
//! | `subjects` | position (u64 BE) | [`SubjectRecord`] |
//! | `grades` | period prefix + student (u64 BE) + subject (u64 BE) | `GradeRow` |
//! | `cluster_results` | period prefix + student (u64 BE) | `ClusterResult` |
//!
//! [`RocksDbRaporStore`] implements both `GradeStore` and
//! `ClusterResultStore` from `rapor-core`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rapor_core::{ClusteringConfig, ClusteringService};
//! use rapor_storage::RocksDbRaporStore;
//!
//! let store = Arc::new(RocksDbRaporStore::open("./rapor-db")?);
//! let service = ClusteringService::new(store.clone(), store, ClusteringConfig::default())?;
//! ```

pub mod column_families;
pub mod config;
pub mod error;
pub mod import;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::{StorageError, StorageResult, STORAGE_VERSION};
pub use import::{GradeImport, GradeRecord, ImportSummary};
pub use store::{RocksDbRaporStore, SubjectRecord};
