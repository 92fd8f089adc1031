use tt_core::ports::WizardEventPort;
use tt_core::verification::snapshot::WizardPhase;
use tt_core::verification::WizardSnapshot;

/// Terminal adapter for wizard state changes.
///
/// Logs each snapshot; the command layer decides what to print.
pub struct TracingWizardEvents;

#[async_trait::async_trait]
impl WizardEventPort for TracingWizardEvents {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        match snapshot.phase {
            WizardPhase::Step(_) => tracing::info!(
                step = snapshot.step_number,
                title = snapshot.title,
                can_advance = snapshot.can_advance,
                in_flight = snapshot.in_flight,
                error = snapshot.error.as_ref().map(ToString::to_string),
                "wizard://state-changed"
            ),
            WizardPhase::Submitted => tracing::info!("wizard://submitted"),
            WizardPhase::Cancelled => tracing::info!("wizard://cancelled"),
        }
    }
}
