//! Verification wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects:
//! reading selected images, the one-shot multipart submission, and the
//! caller's completion callback.

use std::path::Path;
use std::sync::{Arc, Mutex as StdMutex};

use tracing::{debug, error, info, info_span, warn, Instrument};

use tt_core::{
    ports::{EvidenceError, EvidenceSourcePort, VerificationApiPort, WizardEventPort},
    verification::{
        DocumentType, PersonalInfoField, WizardAction, WizardEvent, WizardSnapshot, WizardState,
        WizardStateMachine,
    },
};

use crate::deps::AppDeps;
use crate::usecases::verification::context::WizardContext;

/// Zero-argument callback invoked once after a successful submission.
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum WizardOrchestratorError {
    #[error("failed to load selected file: {0}")]
    Evidence(#[from] EvidenceError),
}

/// Orchestrator that drives wizard state and side effects.
///
/// One instance per wizard session; the state is discarded with it.
pub struct VerificationWizard {
    context: Arc<WizardContext>,
    on_complete: StdMutex<Option<CompletionCallback>>,

    verification_api: Arc<dyn VerificationApiPort>,
    evidence_source: Arc<dyn EvidenceSourcePort>,
    wizard_events: Arc<dyn WizardEventPort>,
}

impl VerificationWizard {
    pub fn new(
        verification_api: Arc<dyn VerificationApiPort>,
        evidence_source: Arc<dyn EvidenceSourcePort>,
        wizard_events: Arc<dyn WizardEventPort>,
        initial_state: WizardState,
        on_complete: CompletionCallback,
    ) -> Self {
        Self {
            context: WizardContext::new(initial_state).arc(),
            on_complete: StdMutex::new(Some(on_complete)),
            verification_api,
            evidence_source,
            wizard_events,
        }
    }

    /// Start a wizard for a user, pre-filling the full name from their profile.
    pub fn from_deps(
        deps: &AppDeps,
        full_name: Option<String>,
        on_complete: CompletionCallback,
    ) -> Self {
        let initial_state = match full_name {
            Some(name) => WizardState::for_user(name),
            None => WizardState::initial(),
        };
        Self::new(
            deps.verification_api.clone(),
            deps.evidence_source.clone(),
            deps.wizard_events.clone(),
            initial_state,
            on_complete,
        )
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::from(&self.context.get_state().await)
    }

    /// Read an image from disk and make it the ID document.
    ///
    /// A read failure leaves the wizard untouched.
    pub async fn select_id_document(
        &self,
        path: &Path,
    ) -> Result<WizardSnapshot, WizardOrchestratorError> {
        let file = self.read_evidence(path).await?;
        Ok(self.dispatch(WizardEvent::SelectIdDocument { file }).await)
    }

    pub async fn select_selfie(
        &self,
        path: &Path,
    ) -> Result<WizardSnapshot, WizardOrchestratorError> {
        let file = self.read_evidence(path).await?;
        Ok(self.dispatch(WizardEvent::SelectSelfie { file }).await)
    }

    pub async fn remove_id_document(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::RemoveIdDocument).await
    }

    pub async fn remove_selfie(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::RemoveSelfie).await
    }

    pub async fn choose_document_type(&self, document_type: DocumentType) -> WizardSnapshot {
        self.dispatch(WizardEvent::ChooseDocumentType { document_type }).await
    }

    pub async fn edit_field(&self, field: PersonalInfoField, value: String) -> WizardSnapshot {
        self.dispatch(WizardEvent::EditField { field, value }).await
    }

    pub async fn next(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn previous(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Previous).await
    }

    /// Submit on the review step and wait for the backend to settle.
    ///
    /// While a submission is in flight further calls are no-ops.
    pub async fn submit(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Submit).await
    }

    pub async fn cancel(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Cancel).await
    }

    pub async fn dispatch(&self, event: WizardEvent) -> WizardSnapshot {
        let span = info_span!("usecase.verification_wizard.dispatch", event = event.name());
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let actions = self.apply(event).await;
                for action in actions {
                    if let Some(follow_up) = self.execute_action(action).await {
                        pending_events.push(follow_up);
                    }
                }
            }

            self.snapshot().await
        }
        .instrument(span)
        .await
    }

    /// Run one transition under the dispatch lock and publish the new state.
    ///
    /// A finished wizard ignores every event and publishes nothing.
    async fn apply(&self, event: WizardEvent) -> Vec<WizardAction> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let event_name = event.name();
        let transition = self
            .context
            .replace_with(|current| {
                if current.is_terminal() {
                    debug!(event = event_name, "wizard finished, event ignored");
                    return (current, None);
                }
                let from = current.current_step();
                let (next, actions) = WizardStateMachine::transition(current, event);
                info!(
                    from = ?from,
                    to = ?next.current_step(),
                    in_flight = next.in_flight(),
                    event = event_name,
                    "wizard state transition"
                );
                let snapshot = WizardSnapshot::from(&next);
                (next, Some((snapshot, actions)))
            })
            .await;

        match transition {
            Some((snapshot, actions)) => {
                self.wizard_events.emit_wizard_state_changed(snapshot).await;
                actions
            }
            None => Vec::new(),
        }
    }

    async fn execute_action(&self, action: WizardAction) -> Option<WizardEvent> {
        match action {
            WizardAction::SubmitVerification { submission } => {
                debug!(
                    document_type = %submission.document_type,
                    id_document_bytes = submission.id_document.len(),
                    selfie_bytes = submission.selfie_photo.len(),
                    "wizard submitting verification"
                );
                match self.verification_api.submit_verification(submission).await {
                    Ok(()) => {
                        info!("verification submitted");
                        Some(WizardEvent::SubmissionSucceeded)
                    }
                    Err(err) => {
                        error!(error = %err, "verification submission failed");
                        Some(WizardEvent::SubmissionFailed)
                    }
                }
            }
            WizardAction::NotifyCompleted => {
                self.notify_completed();
                None
            }
        }
    }

    fn notify_completed(&self) {
        let callback = self
            .on_complete
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match callback {
            Some(callback) => {
                debug!("wizard invoking completion callback");
                callback();
            }
            None => warn!("wizard completion callback already consumed"),
        }
    }

    async fn read_evidence(
        &self,
        path: &Path,
    ) -> Result<tt_core::verification::EvidenceFile, WizardOrchestratorError> {
        self.evidence_source.read(path).await.map_err(|err| {
            warn!(path = %path.display(), error = %err, "wizard failed to load selected file");
            WizardOrchestratorError::from(err)
        })
    }
}
