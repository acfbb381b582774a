//! TfL API error types.

/// Errors that can occur when talking to the TfL API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The outbound request could not be built
    #[error("cannot create request: {0}")]
    Request(#[source] reqwest::Error),

    /// Network failure or timeout while sending or reading the response
    #[error("unable to download: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API does not know the requested station
    #[error("Id:{id:?} not found")]
    NotFound { id: String },

    /// The API returned a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Decode { message: String, body: String },
}
