//! # Application Runtime / 应用运行时
//!
//! `AppRuntime` owns the wired dependencies; `UseCases` builds use case
//! instances from them on demand.

use std::sync::Arc;

use tt_app::usecases::{
    ClearSession, CompletionCallback, GetVerificationStatus, StoreSessionTokens,
    VerificationWizard,
};
use tt_app::AppDeps;
use tt_core::config::AppConfig;

use crate::adapters::TracingWizardEvents;
use crate::bootstrap::wiring::{wire_dependencies, WiringResult};

pub struct AppRuntime {
    deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    /// Access use cases.
    /// 访问用例。
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Wire dependencies for the terminal frontend and wrap them in a runtime.
///
/// load_config() → create_runtime() → commands
pub fn create_runtime(config: &AppConfig) -> WiringResult<AppRuntime> {
    let deps = wire_dependencies(config, Arc::new(TracingWizardEvents))?;
    Ok(AppRuntime::new(deps))
}

/// Use case accessor for AppRuntime.
///
/// Each method returns a use case whose dependencies are already connected
/// from `AppDeps`. Commands never touch ports directly.
///
/// AppRuntime 的用例访问器。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn get_verification_status(&self) -> GetVerificationStatus {
        GetVerificationStatus::new(self.runtime.deps.verification_api.clone())
    }

    pub fn store_session_tokens(&self) -> StoreSessionTokens {
        StoreSessionTokens::new(self.runtime.deps.session_tokens.clone())
    }

    pub fn clear_session(&self) -> ClearSession {
        ClearSession::new(self.runtime.deps.session_tokens.clone())
    }

    /// Start a fresh wizard session.
    ///
    /// `full_name` comes from the signed-in user's profile.
    pub fn verification_wizard(
        &self,
        full_name: Option<String>,
        on_complete: CompletionCallback,
    ) -> VerificationWizard {
        VerificationWizard::from_deps(&self.runtime.deps, full_name, on_complete)
    }
}
