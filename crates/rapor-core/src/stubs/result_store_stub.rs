//! In-memory ClusterResultStore.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use crate::error::{RaporError, RaporResult};
use crate::traits::ClusterResultStore;
use crate::types::{ClusterResult, Period};

/// Thread-safe in-memory result store.
///
/// Each period's rows live in one map entry, so a replace is a single
/// entry swap: readers see the old vector or the new one.
#[derive(Debug, Default)]
pub struct InMemoryClusterResultStore {
    results: DashMap<Period, Vec<ClusterResult>>,
    fail_writes: AtomicBool,
}

impl InMemoryClusterResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `Persistence`.
    ///
    /// Lets tests observe that a failed replace leaves prior rows intact.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> RaporResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RaporError::persistence("in-memory store rejected write"));
        }
        Ok(())
    }
}

#[async_trait]
impl ClusterResultStore for InMemoryClusterResultStore {
    async fn replace_cluster_results(
        &self,
        period: &Period,
        mut results: Vec<ClusterResult>,
    ) -> RaporResult<usize> {
        if let Some(stray) = results.iter().find(|r| &r.period != period) {
            return Err(RaporError::validation(format!(
                "result for student {} belongs to period '{}', expected '{}'",
                stray.student_id, stray.period, period
            )));
        }
        self.check_writable()?;

        results.sort_by_key(|r| r.student_id);
        let count = results.len();

        if results.is_empty() {
            self.results.remove(period);
        } else {
            self.results.insert(period.clone(), results);
        }

        info!(period = %period, count, "Replaced cluster results");
        Ok(count)
    }

    async fn list_cluster_results(&self, period: &Period) -> RaporResult<Vec<ClusterResult>> {
        Ok(self
            .results
            .get(period)
            .map(|r| r.value().clone())
            .unwrap_or_default())
    }

    async fn clear_cluster_results(&self, period: &Period) -> RaporResult<usize> {
        self.check_writable()?;
        let removed = self
            .results
            .remove(period)
            .map(|(_, rows)| rows.len())
            .unwrap_or(0);
        debug!(period = %period, removed, "Cleared cluster results");
        Ok(removed)
    }

    async fn list_periods(&self) -> RaporResult<Vec<Period>> {
        let mut periods: Vec<Period> = self.results.iter().map(|e| e.key().clone()).collect();
        periods.sort();
        Ok(periods)
    }
}
