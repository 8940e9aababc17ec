//! Source of raw grades and the subject order.

use async_trait::async_trait;

use crate::error::RaporResult;
use crate::types::{GradeRow, Period, SubjectId};

/// Read access to grade rows and subjects.
///
/// # Implementation Notes
///
/// - `fetch_subject_order` must return a stable order; callers fetch it
///   once per run and build every vector against it
/// - Errors are reported as `RaporError::Persistence`
#[async_trait]
pub trait GradeStore: Send + Sync {
    /// All grade rows recorded for `period`.
    ///
    /// An empty vector is not an error here; the service turns it into
    /// `InsufficientData`.
    async fn fetch_grades(&self, period: &Period) -> RaporResult<Vec<GradeRow>>;

    /// Ordered list of every known subject.
    async fn fetch_subject_order(&self) -> RaporResult<Vec<SubjectId>>;
}
