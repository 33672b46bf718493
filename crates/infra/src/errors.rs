//! Conversions from driver errors into domain errors

use leadflow_domain::LeadflowError;

/// Infrastructure error wrapper so `?` can lift driver errors into the
/// domain error type.
#[derive(Debug)]
pub struct InfraError(pub LeadflowError);

impl From<rusqlite::Error> for InfraError {
    fn from(err: rusqlite::Error) -> Self {
        Self(LeadflowError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(err: r2d2::Error) -> Self {
        Self(LeadflowError::Database(format!("pool error: {err}")))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(err: std::io::Error) -> Self {
        Self(LeadflowError::Database(format!("io error: {err}")))
    }
}

impl From<InfraError> for LeadflowError {
    fn from(err: InfraError) -> Self {
        err.0
    }
}
