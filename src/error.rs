use thiserror::Error;

/// Error types for the sasphere-rs library.
///
/// The numerical kernels never fail. These errors come from the layers around
/// them: shape checks on paired queries, override resolution and descriptor
/// export.
#[derive(Error, Debug)]
pub enum SasError {
    /// Error indicating a mismatch in query dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error for invalid parameter values.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// Parameter not found.
    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    /// Error for boundary definitions.
    #[error("Bounds error: {0}")]
    Bounds(#[from] crate::parameters::BoundsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sasphere-rs operations.
pub type Result<T> = std::result::Result<T, SasError>;
