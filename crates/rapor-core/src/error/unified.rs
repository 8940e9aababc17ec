//! Unified error type for the clustering pipeline.

use thiserror::Error;

// ============================================================================
// UNIFIED ERROR TYPE
// ============================================================================

/// Error type for every rapor-core operation.
///
/// # Status Codes
///
/// Each variant maps to an HTTP-style status code so the surrounding
/// request layer can translate failures without inspecting messages:
/// - `400`: Validation
/// - `422`: InsufficientData
/// - `500`: Computation, Persistence, Config
///
/// # Examples
///
/// ```rust
/// use rapor_core::error::RaporError;
///
/// let err = RaporError::insufficient_data(5, 4, "students for clustering");
/// assert_eq!(err.status_code(), 422);
/// assert!(err.to_string().contains("5"));
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum RaporError {
    /// Invalid request parameter.
    ///
    /// # When This Occurs
    ///
    /// - k is 0 or exceeds the configured maximum
    /// - max_k is 0 for elbow analysis
    /// - Unknown algorithm name
    /// - Empty or malformed period
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not enough data to satisfy the request.
    ///
    /// No partial result is ever returned alongside this error.
    #[error("Insufficient data: {context} requires at least {required}, found {available}")]
    InsufficientData {
        /// Minimum count needed
        required: usize,
        /// Count actually available
        available: usize,
        /// What was being counted
        context: String,
    },

    /// Numeric failure inside the algorithm.
    ///
    /// # When This Occurs
    ///
    /// - NaN or infinite values reached a distance or centroid
    /// - Feature vectors of different dimensions in one run
    #[error("Computation error: {0}")]
    Computation(String),

    /// A grade store or result store operation failed.
    ///
    /// The message of the underlying store error is carried unchanged.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RaporError {
    /// HTTP-style status code for the request layer.
    #[inline]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InsufficientData { .. } => 422,
            Self::Computation(_) => 500,
            Self::Persistence(_) => 500,
            Self::Config(_) => 500,
        }
    }

    /// Check if re-invoking the same request could succeed.
    ///
    /// Only store failures qualify; every other variant depends solely on the
    /// input and fails again for the same input. The pipeline itself never
    /// retries.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Create a validation error from a message.
    #[inline]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a computation error from a message.
    #[inline]
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    /// Create a persistence error from a message.
    #[inline]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an insufficient-data error naming the shortfall.
    #[inline]
    pub fn insufficient_data(required: usize, available: usize, context: impl Into<String>) -> Self {
        Self::InsufficientData {
            required,
            available,
            context: context.into(),
        }
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for rapor-core operations.
pub type RaporResult<T> = std::result::Result<T, RaporError>;
