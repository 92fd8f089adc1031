//! Business logic use cases
//!
//! VerificationWizard        → four-step identity verification flow
//! GetVerificationStatus     → verification page overview
//! StoreSessionTokens / ClearSession → local session bookkeeping

pub mod get_verification_status;
pub mod session;
pub mod verification;

pub use get_verification_status::GetVerificationStatus;
pub use session::{ClearSession, StoreSessionTokens};
pub use verification::{CompletionCallback, VerificationWizard, WizardOrchestratorError};
