//! Store configuration.

use serde::{Deserialize, Serialize};

/// Options applied when opening a [`RocksDbRaporStore`](crate::RocksDbRaporStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Block cache shared by all column families, in bytes.
    #[serde(default = "default_block_cache_size")]
    pub block_cache_size: usize,

    #[serde(default = "default_max_open_files")]
    pub max_open_files: i32,

    /// Disable only for throwaway databases.
    #[serde(default = "default_true")]
    pub enable_wal: bool,

    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

fn default_block_cache_size() -> usize {
    64 * 1024 * 1024 // 64MB
}

fn default_max_open_files() -> i32 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            block_cache_size: default_block_cache_size(),
            max_open_files: default_max_open_files(),
            enable_wal: true,
            create_if_missing: true,
        }
    }
}
