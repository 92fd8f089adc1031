//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the wizard and its use cases to remain independent of
//! HTTP, the filesystem and the hosting UI.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs in `tt-core/ports` when it represents a business capability,
//! is depended upon by use cases, and is implemented by `tt-infra` or
//! `tt-platform`.

pub mod app_dirs;
pub mod errors;
pub mod evidence_source;
pub mod session_token;
pub mod verification_api;
mod wizard_event;

pub use app_dirs::AppDirsPort;
pub use errors::AppDirsError;
pub use evidence_source::{EvidenceError, EvidenceSourcePort};
pub use session_token::SessionTokenPort;
pub use verification_api::{ApiError, VerificationApiPort};
pub use wizard_event::WizardEventPort;
