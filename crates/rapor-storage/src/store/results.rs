//! Cluster result operations.

use std::collections::BTreeSet;

use async_trait::async_trait;
use rocksdb::WriteBatch;
use tracing::{debug, error, info};

use rapor_core::error::RaporResult;
use rapor_core::traits::ClusterResultStore;
use rapor_core::types::{ClusterResult, Period};

use super::RocksDbRaporStore;
use crate::column_families::CF_CLUSTER_RESULTS;
use crate::error::{hex_key, StorageError, StorageResult};
use crate::schema::{
    cluster_result_key, parse_cluster_result_key, period_prefix, period_prefix_end,
};

impl RocksDbRaporStore {
    /// Replace every result of `period` with `results` in one atomic write.
    ///
    /// The batch holds a range delete over the period prefix followed by
    /// one put per row, so readers see either the old rows or the new ones.
    ///
    /// # Errors
    /// - `ValidationFailed` if a row belongs to another period (nothing written)
    /// - `RocksDbOperation` if the batch write fails (old rows remain)
    pub fn replace_results(&self, period: &Period, results: &[ClusterResult]) -> StorageResult<usize> {
        if let Some(stray) = results.iter().find(|r| &r.period != period) {
            return Err(StorageError::ValidationFailed(format!(
                "result for student {} belongs to period '{}', expected '{}'",
                stray.student_id, stray.period, period
            )));
        }

        let cf = self.get_cf(CF_CLUSTER_RESULTS)?;
        let start = period_prefix(period);
        let end = period_prefix_end(period);

        let mut batch = WriteBatch::default();
        batch.delete_range_cf(cf, &start, &end);
        for result in results {
            let key = cluster_result_key(period, result.student_id);
            let value = Self::serialize_with_version(result)?;
            batch.put_cf(cf, key, value);
        }

        self.db.write(batch).map_err(|e| {
            error!(period = %period, error = %e, "Atomic result replace failed");
            StorageError::rocksdb_op("write_batch", CF_CLUSTER_RESULTS, Some(start.as_slice()), e)
        })?;

        info!(period = %period, count = results.len(), "Replaced cluster results");
        Ok(results.len())
    }

    /// Results of `period` in ascending student id order.
    pub fn results_for_period(&self, period: &Period) -> StorageResult<Vec<ClusterResult>> {
        self.scan_prefix(CF_CLUSTER_RESULTS, &period_prefix(period))?
            .into_iter()
            .map(|(key, value)| Self::deserialize_with_version(&value, CF_CLUSTER_RESULTS, &key))
            .collect()
    }

    /// Delete every result of `period`.
    ///
    /// # Returns
    /// Number of rows that existed before the delete.
    pub fn delete_results(&self, period: &Period) -> StorageResult<usize> {
        let start = period_prefix(period);
        let existing = self.scan_prefix(CF_CLUSTER_RESULTS, &start)?.len();
        if existing == 0 {
            return Ok(0);
        }

        let cf = self.get_cf(CF_CLUSTER_RESULTS)?;
        let end = period_prefix_end(period);
        let mut batch = WriteBatch::default();
        batch.delete_range_cf(cf, &start, &end);
        self.db.write(batch).map_err(|e| {
            StorageError::rocksdb_op("delete_range", CF_CLUSTER_RESULTS, Some(start.as_slice()), e)
        })?;

        debug!(period = %period, removed = existing, "Deleted cluster results");
        Ok(existing)
    }

    /// Distinct periods that have results, ascending.
    pub fn result_periods(&self) -> StorageResult<Vec<Period>> {
        let mut periods = BTreeSet::new();
        for (key, _) in self.scan_prefix(CF_CLUSTER_RESULTS, &[])? {
            let (period, _) =
                parse_cluster_result_key(&key).ok_or_else(|| StorageError::KeyCorrupted {
                    cf: CF_CLUSTER_RESULTS,
                    details: format!("cannot parse key {}", hex_key(&key)),
                })?;
            periods.insert(period);
        }
        Ok(periods.into_iter().collect())
    }
}

#[async_trait]
impl ClusterResultStore for RocksDbRaporStore {
    async fn replace_cluster_results(
        &self,
        period: &Period,
        results: Vec<ClusterResult>,
    ) -> RaporResult<usize> {
        Ok(self.replace_results(period, &results)?)
    }

    async fn list_cluster_results(&self, period: &Period) -> RaporResult<Vec<ClusterResult>> {
        Ok(self.results_for_period(period)?)
    }

    async fn clear_cluster_results(&self, period: &Period) -> RaporResult<usize> {
        Ok(self.delete_results(period)?)
    }

    async fn list_periods(&self) -> RaporResult<Vec<Period>> {
        Ok(self.result_periods()?)
    }
}
