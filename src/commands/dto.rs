use std::path::PathBuf;

use serde::Serialize;
use tt_core::verification::snapshot::WizardPhase;
use tt_core::verification::{
    DocumentType, PersonalInfoField, VerificationOverview, WizardSnapshot,
};

/// Everything needed to walk the wizard from step 1 to submission in one go.
#[derive(Debug, Clone)]
pub struct SubmitVerificationRequest {
    pub document_path: PathBuf,
    pub selfie_path: PathBuf,
    pub document_type: DocumentType,
    pub document_number: String,
    /// Profile name; pre-fills the full name field.
    pub full_name: String,
    pub date_of_birth: String,
    pub address: String,
}

impl SubmitVerificationRequest {
    /// Step 3 fields other than the pre-filled full name, in form order.
    pub fn detail_fields(&self) -> [(PersonalInfoField, String); 3] {
        [
            (PersonalInfoField::DocumentNumber, self.document_number.clone()),
            (PersonalInfoField::DateOfBirth, self.date_of_birth.clone()),
            (PersonalInfoField::Address, self.address.clone()),
        ]
    }
}

/// Result printed after a submission attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitVerificationResponse {
    pub submitted: bool,
    pub document_type: Option<DocumentType>,
    pub message: String,
    /// Status fetched again once the wizard reported completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationOverview>,
}

impl SubmitVerificationResponse {
    pub fn from_final_snapshot(snapshot: &WizardSnapshot, document_type: DocumentType) -> Self {
        let submitted = snapshot.phase == WizardPhase::Submitted;
        let message = if submitted {
            "Verification submitted. Review usually takes 24-48 hours.".to_string()
        } else {
            snapshot
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "verification was not submitted".to_string())
        };
        Self {
            submitted,
            document_type: Some(document_type),
            message,
            status: None,
        }
    }
}
