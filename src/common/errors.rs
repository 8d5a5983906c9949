use thiserror::Error;

/// Failure talking to the backend REST API.
///
/// The contract with the backend is deliberately shallow: send JSON or
/// form-data, expect JSON back, treat any non-2xx status as a generic
/// failure. Nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {0}")]
    Status(reqwest::StatusCode),
}
