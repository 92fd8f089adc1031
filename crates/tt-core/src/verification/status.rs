//! Verification status as reported by the backend.

use serde::{Deserialize, Serialize};

/// Review status of a verification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationRecordStatus {
    Pending,
    Approved,
    Rejected,
}

/// One verification the backend produced after reviewing submitted documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub verification_type: String,
    pub status: VerificationRecordStatus,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub reviewer_notes: Option<String>,
}

/// Response of the verification status endpoint.
///
/// 验证状态概览。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOverview {
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub overall_verified: bool,
    #[serde(default)]
    pub results: Vec<VerificationRecord>,
}

impl VerificationOverview {
    pub fn records_with_status(
        &self,
        status: VerificationRecordStatus,
    ) -> impl Iterator<Item = &VerificationRecord> {
        self.results.iter().filter(move |r| r.status == status)
    }

    /// Whether an identity verification is still waiting for review.
    pub fn has_pending(&self) -> bool {
        self.records_with_status(VerificationRecordStatus::Pending)
            .next()
            .is_some()
    }
}
