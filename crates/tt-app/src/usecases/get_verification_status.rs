use std::sync::Arc;

use tracing::{info_span, Instrument};
use tt_core::ports::{ApiError, VerificationApiPort};
use tt_core::verification::VerificationOverview;

/// Use case for loading the user's verification overview.
///
/// The hosting page calls this on load and again after the wizard completes.
pub struct GetVerificationStatus {
    verification_api: Arc<dyn VerificationApiPort>,
}

impl GetVerificationStatus {
    pub fn new(verification_api: Arc<dyn VerificationApiPort>) -> Self {
        Self { verification_api }
    }

    pub async fn execute(&self) -> Result<VerificationOverview, ApiError> {
        let span = info_span!("usecase.get_verification_status.execute");
        async {
            let overview = self.verification_api.verification_status().await?;
            tracing::debug!(
                identity_verified = overview.identity_verified,
                records = overview.results.len(),
                "verification status loaded"
            );
            Ok(overview)
        }
        .instrument(span)
        .await
    }
}
