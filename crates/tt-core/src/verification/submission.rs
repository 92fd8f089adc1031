use crate::verification::{DocumentType, EvidenceFile, PersonalInfo};

/// Everything the wizard collected, ready to be sent as one multipart request.
///
/// Can only be built by the state machine once all steps are complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSubmission {
    pub id_document: EvidenceFile,
    pub selfie_photo: EvidenceFile,
    pub document_type: DocumentType,
    pub personal_info: PersonalInfo,
}

impl VerificationSubmission {
    /// Text form fields in the order they are appended to the request.
    pub fn text_fields(&self) -> [(&'static str, String); 5] {
        [
            ("document_type", self.document_type.as_str().to_string()),
            (
                "document_number",
                self.personal_info.document_number().to_string(),
            ),
            ("full_name", self.personal_info.full_name().to_string()),
            (
                "date_of_birth",
                self.personal_info.date_of_birth().to_string(),
            ),
            ("address", self.personal_info.address().to_string()),
        ]
    }
}
