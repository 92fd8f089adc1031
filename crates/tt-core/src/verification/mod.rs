//! Identity verification domain module.
//!
//! This module defines the verification wizard state machine and the values
//! it collects before they are submitted to the backend.

pub mod document;
pub mod evidence;
pub mod personal_info;
pub mod snapshot;
pub mod state_machine;
pub mod status;
pub mod step;
pub mod submission;

pub use document::DocumentType;
pub use evidence::EvidenceFile;
pub use personal_info::{PersonalInfo, PersonalInfoDraft, PersonalInfoField};
pub use snapshot::WizardSnapshot;
pub use state_machine::{
    WizardAction, WizardDraft, WizardError, WizardEvent, WizardState, WizardStateMachine,
};
pub use status::{VerificationOverview, VerificationRecord, VerificationRecordStatus};
pub use step::WizardStep;
pub use submission::VerificationSubmission;
