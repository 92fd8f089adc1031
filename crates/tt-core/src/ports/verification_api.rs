use async_trait::async_trait;
use thiserror::Error;

use crate::verification::{VerificationOverview, VerificationSubmission};

/// Errors returned by the backend verification API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("session is missing or expired")]
    Unauthorized,

    #[error("backend rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("session store error: {0}")]
    Session(String),
}

#[async_trait]
pub trait VerificationApiPort: Send + Sync {
    /// Send the collected documents and details as one multipart request.
    ///
    /// Exactly one attempt; any non-success status is an error.
    async fn submit_verification(&self, submission: VerificationSubmission)
        -> Result<(), ApiError>;

    async fn verification_status(&self) -> Result<VerificationOverview, ApiError>;
}
