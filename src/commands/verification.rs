//! Verification commands
//! 身份验证相关命令

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info_span, Instrument};
use tt_core::verification::snapshot::WizardPhase;
use tt_core::verification::{VerificationOverview, WizardSnapshot, WizardStep};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{SubmitVerificationRequest, SubmitVerificationResponse};
use crate::commands::map_err;

/// Get the user's verification overview.
/// 获取验证状态概览。
pub async fn get_verification_status(runtime: &AppRuntime) -> Result<VerificationOverview, String> {
    let span = info_span!("command.verification.get_status");
    async {
        runtime
            .usecases()
            .get_verification_status()
            .execute()
            .await
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Walk the wizard through all four steps and submit once.
///
/// Stops at the first step whose gate does not open and reports why. After a
/// successful submission the verification status is fetched again; a failed
/// refresh is logged and leaves `status` empty.
pub async fn submit_verification(
    runtime: &AppRuntime,
    request: SubmitVerificationRequest,
) -> Result<SubmitVerificationResponse, String> {
    let span = info_span!(
        "command.verification.submit",
        document_type = %request.document_type,
    );
    async {
        let completed = Arc::new(AtomicBool::new(false));
        let completed_flag = completed.clone();
        let wizard = runtime.usecases().verification_wizard(
            Some(request.full_name.clone()),
            Box::new(move || completed_flag.store(true, Ordering::SeqCst)),
        );

        wizard.choose_document_type(request.document_type).await;
        wizard
            .select_id_document(&request.document_path)
            .await
            .map_err(map_err)?;
        expect_step(wizard.next().await, WizardStep::Selfie)?;

        wizard
            .select_selfie(&request.selfie_path)
            .await
            .map_err(map_err)?;
        expect_step(wizard.next().await, WizardStep::Details)?;

        for (field, value) in request.detail_fields() {
            wizard.edit_field(field, value).await;
        }
        let snapshot = wizard.next().await;
        if snapshot.phase != WizardPhase::Step(WizardStep::Review) {
            let missing = snapshot
                .personal_info
                .map(|info| info.missing_fields())
                .unwrap_or_default();
            return Err(format!("personal details incomplete, missing: {missing:?}"));
        }

        let snapshot = wizard.submit().await;
        let mut response =
            SubmitVerificationResponse::from_final_snapshot(&snapshot, request.document_type);
        if !(response.submitted && completed.load(Ordering::SeqCst)) {
            return Err(response.message);
        }

        // Completion means the backend holds a new pending record; show it.
        match runtime.usecases().get_verification_status().execute().await {
            Ok(overview) => response.status = Some(overview),
            Err(err) => tracing::warn!(error = %err, "status refresh after submission failed"),
        }
        Ok(response)
    }
    .instrument(span)
    .await
}

fn expect_step(snapshot: WizardSnapshot, expected: WizardStep) -> Result<(), String> {
    if snapshot.phase == WizardPhase::Step(expected) {
        Ok(())
    } else {
        Err(format!(
            "wizard did not advance to step {} ({}), still at {:?}",
            expected.number(),
            expected.title(),
            snapshot.title
        ))
    }
}
