//! # tt-core
//!
//! Core domain models and business logic for TrueTribe.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! The verification wizard lives here as a pure state machine; the side effects it
//! requests are executed by `tt-app` through the ports declared in [`ports`].

pub mod app_dirs;
pub mod config;
pub mod ports;
pub mod security;
pub mod session;
pub mod verification;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use security::SecretString;
pub use session::SessionTokens;
pub use verification::{
    DocumentType, EvidenceFile, PersonalInfo, PersonalInfoDraft, PersonalInfoField,
    VerificationOverview, VerificationSubmission, WizardAction, WizardEvent, WizardSnapshot,
    WizardState, WizardStateMachine, WizardStep,
};
