//! RocksDB-backed grade and result storage.
//!
//! # FAIL FAST Policy
//!
//! Every RocksDB operation that fails returns a detailed error with:
//! - The operation that failed
//! - The column family involved
//! - The key being accessed
//! - The underlying RocksDB error
//!
//! # Thread Safety
//!
//! The store is thread-safe for concurrent reads and writes via RocksDB's
//! internal locking. Multi-key writes go through a single `WriteBatch`.
//!
//! # Module Structure
//!
//! - `grades` - Subject order and grade rows, `GradeStore` impl
//! - `results` - Cluster results, `ClusterResultStore` impl

mod grades;
mod results;

use std::path::{Path, PathBuf};

use rocksdb::{Cache, ColumnFamily, Direction, IteratorMode, Options, DB};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::column_families::{get_cf_descriptors, ALL_CFS};
use crate::config::StoreConfig;
use crate::error::{hex_key, StorageError, StorageResult, STORAGE_VERSION};

pub use grades::SubjectRecord;

/// RocksDB store for subjects, grades and cluster results.
///
/// # Example
///
/// ```ignore
/// use rapor_storage::RocksDbRaporStore;
/// use tempfile::TempDir;
///
/// let tmp = TempDir::new().unwrap();
/// let store = RocksDbRaporStore::open(tmp.path()).unwrap();
/// store.health_check().unwrap();
/// ```
pub struct RocksDbRaporStore {
    db: DB,
    /// Shared block cache across column families.
    #[allow(dead_code)]
    cache: Cache,
    path: PathBuf,
}

impl RocksDbRaporStore {
    /// Open a store at `path` with default configuration.
    ///
    /// Creates the database and all column families if they don't exist.
    ///
    /// # Errors
    ///
    /// - `StorageError::OpenFailed` - Path invalid, permissions denied, or DB locked
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::open_with_config(path, StoreConfig::default())
    }

    /// Open a store with custom configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: StoreConfig) -> StorageResult<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let path_str = path_buf.to_string_lossy().to_string();

        info!(
            "Opening RocksDbRaporStore at '{}' with cache_size={}MB",
            path_str,
            config.block_cache_size / (1024 * 1024)
        );

        let cache = Cache::new_lru_cache(config.block_cache_size);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(config.create_if_missing);
        db_opts.create_missing_column_families(true);
        db_opts.set_max_open_files(config.max_open_files);

        if !config.enable_wal {
            db_opts.set_manual_wal_flush(true);
        }

        let cf_descriptors = get_cf_descriptors(&cache);

        debug!(
            "Opening database with {} column families",
            cf_descriptors.len()
        );

        let db = DB::open_cf_descriptors(&db_opts, &path_str, cf_descriptors).map_err(|e| {
            error!("Failed to open RocksDB at '{}': {}", path_str, e);
            StorageError::OpenFailed {
                path: path_str.clone(),
                message: e.to_string(),
            }
        })?;

        info!(
            "Successfully opened RocksDbRaporStore with {} column families",
            ALL_CFS.len()
        );

        Ok(Self {
            db,
            cache,
            path: path_buf,
        })
    }

    /// Get a column family handle by name.
    pub(crate) fn get_cf(&self, name: &str) -> StorageResult<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound {
                name: name.to_string(),
            })
    }

    /// Serialize a value with version prefix.
    pub(crate) fn serialize_with_version<T: Serialize>(value: &T) -> StorageResult<Vec<u8>> {
        let mut result = vec![STORAGE_VERSION];
        let encoded = bincode::serialize(value).map_err(|e| StorageError::Serialization {
            type_name: std::any::type_name::<T>(),
            message: e.to_string(),
        })?;
        result.extend(encoded);
        Ok(result)
    }

    /// Deserialize a value with version check.
    pub(crate) fn deserialize_with_version<T: for<'de> Deserialize<'de>>(
        data: &[u8],
        cf: &'static str,
        key: &[u8],
    ) -> StorageResult<T> {
        let Some((&version, payload)) = data.split_first() else {
            return Err(StorageError::Deserialization {
                cf,
                key: hex_key(key),
                message: "Empty data".to_string(),
            });
        };

        if version != STORAGE_VERSION {
            return Err(StorageError::VersionMismatch {
                cf,
                expected: STORAGE_VERSION,
                actual: version,
            });
        }

        bincode::deserialize(payload).map_err(|e| StorageError::Deserialization {
            cf,
            key: hex_key(key),
            message: e.to_string(),
        })
    }

    /// All (key, value) pairs of `cf` whose key starts with `prefix`, in
    /// key order.
    pub(crate) fn scan_prefix(
        &self,
        cf_name: &'static str,
        prefix: &[u8],
    ) -> StorageResult<Vec<(Box<[u8]>, Box<[u8]>)>> {
        let cf = self.get_cf(cf_name)?;
        let mut out = Vec::new();
        for item in self
            .db
            .iterator_cf(cf, IteratorMode::From(prefix, Direction::Forward))
        {
            let (key, value) =
                item.map_err(|e| StorageError::rocksdb_op("iterate", cf_name, Some(prefix), e))?;
            if !key.starts_with(prefix) {
                break;
            }
            out.push((key, value));
        }
        Ok(out)
    }

    /// Get the database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Health check: verify all column families are accessible.
    pub fn health_check(&self) -> StorageResult<()> {
        for cf_name in ALL_CFS {
            self.get_cf(cf_name)?;
        }
        Ok(())
    }
}
