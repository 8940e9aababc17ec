//! Persistence of clustering results.

use async_trait::async_trait;

use crate::error::RaporResult;
use crate::types::{ClusterResult, Period};

/// Storage for [`ClusterResult`] rows, scoped by period.
///
/// # Atomicity
///
/// `replace_cluster_results` deletes every row of the period and inserts
/// the new rows as one all-or-nothing write. A concurrent reader sees either
/// the old rows or the new rows, never a mix and never an empty period in
/// between. Rows of other periods are untouched.
#[async_trait]
pub trait ClusterResultStore: Send + Sync {
    /// Atomically replace all rows of `period` with `results`.
    ///
    /// # Returns
    /// Number of rows written.
    ///
    /// # Errors
    /// - `RaporError::Validation` if a row belongs to another period
    /// - `RaporError::Persistence` on backend failure; the previous rows
    ///   remain visible
    async fn replace_cluster_results(
        &self,
        period: &Period,
        results: Vec<ClusterResult>,
    ) -> RaporResult<usize>;

    /// Rows of `period`, ordered by ascending student id.
    async fn list_cluster_results(&self, period: &Period) -> RaporResult<Vec<ClusterResult>>;

    /// Delete all rows of `period`.
    ///
    /// # Returns
    /// Number of rows removed.
    async fn clear_cluster_results(&self, period: &Period) -> RaporResult<usize>;

    /// Periods that currently have rows, in ascending order.
    async fn list_periods(&self) -> RaporResult<Vec<Period>>;
}
