//! Verification wizard state machine.
//!
//! Defines a pure state transition function for the identity verification
//! wizard. Each step variant carries only the data that earlier steps have
//! guaranteed, so states such as "on review without a selfie" cannot exist.

use crate::verification::{
    DocumentType, EvidenceFile, PersonalInfoDraft, PersonalInfoField, VerificationSubmission,
    WizardStep,
};

/// Values for steps that are not completed yet.
///
/// Files chosen on an earlier forward pass stay here when the user goes back,
/// so navigating never loses input. Invariant: a file that a step variant
/// carries explicitly is never also present in the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardDraft {
    pub document_type: DocumentType,
    pub id_document: Option<EvidenceFile>,
    pub selfie_photo: Option<EvidenceFile>,
    pub personal_info: PersonalInfoDraft,
}

/// Wizard flow state.
///
/// 验证向导状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Step 1: choose document type and upload the ID document.
    ///
    /// 第一步：上传证件。
    Document { draft: WizardDraft },
    /// Step 2: upload a selfie.
    ///
    /// 第二步：上传自拍。
    Selfie {
        id_document: EvidenceFile,
        draft: WizardDraft,
    },
    /// Step 3: personal details.
    ///
    /// 第三步：填写个人信息。
    Details {
        id_document: EvidenceFile,
        selfie_photo: EvidenceFile,
        draft: WizardDraft,
    },
    /// Step 4: review and submit.
    ///
    /// 第四步：确认并提交。
    Review {
        submission: VerificationSubmission,
        in_flight: bool,
        error: Option<WizardError>,
    },
    /// Submission accepted by the backend.
    ///
    /// 提交成功。
    Submitted,
    /// User left the wizard.
    ///
    /// 用户取消。
    Cancelled,
}

/// Events that drive the wizard.
///
/// 驱动验证向导的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    ChooseDocumentType { document_type: DocumentType },
    SelectIdDocument { file: EvidenceFile },
    RemoveIdDocument,
    SelectSelfie { file: EvidenceFile },
    RemoveSelfie,
    EditField { field: PersonalInfoField, value: String },
    /// Move forward one step.
    Next,
    /// Move back one step.
    Previous,
    /// Submit the collected data (step 4).
    Submit,
    /// Submission result (network).
    ///
    /// 提交结果（网络回调）。
    SubmissionSucceeded,
    SubmissionFailed,
    Cancel,
}

impl WizardEvent {
    /// Event name for logs. Never includes field values or file contents.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::ChooseDocumentType { .. } => "choose_document_type",
            WizardEvent::SelectIdDocument { .. } => "select_id_document",
            WizardEvent::RemoveIdDocument => "remove_id_document",
            WizardEvent::SelectSelfie { .. } => "select_selfie",
            WizardEvent::RemoveSelfie => "remove_selfie",
            WizardEvent::EditField { .. } => "edit_field",
            WizardEvent::Next => "next",
            WizardEvent::Previous => "previous",
            WizardEvent::Submit => "submit",
            WizardEvent::SubmissionSucceeded => "submission_succeeded",
            WizardEvent::SubmissionFailed => "submission_failed",
            WizardEvent::Cancel => "cancel",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Send the multipart submission to the backend (one attempt).
    ///
    /// 向后端提交验证资料（仅一次）。
    SubmitVerification { submission: VerificationSubmission },
    /// Invoke the caller's completion callback.
    ///
    /// 通知调用方完成。
    NotifyCompleted,
}

/// User-facing wizard error.
///
/// Failure causes are not distinguished here; the concrete cause is only
/// logged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum WizardError {
    #[error("verification submission failed")]
    SubmissionFailed,
}

impl WizardState {
    /// Fresh wizard on step 1.
    pub fn initial() -> Self {
        WizardState::Document {
            draft: WizardDraft::default(),
        }
    }

    /// Fresh wizard with the full name pre-filled from the user's profile.
    pub fn for_user(full_name: impl Into<String>) -> Self {
        WizardState::Document {
            draft: WizardDraft {
                personal_info: PersonalInfoDraft::with_full_name(full_name),
                ..WizardDraft::default()
            },
        }
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self {
            WizardState::Document { .. } => Some(WizardStep::Document),
            WizardState::Selfie { .. } => Some(WizardStep::Selfie),
            WizardState::Details { .. } => Some(WizardStep::Details),
            WizardState::Review { .. } => Some(WizardStep::Review),
            WizardState::Submitted | WizardState::Cancelled => None,
        }
    }

    /// 1-based step number, `None` once the wizard has finished.
    pub fn current_step(&self) -> Option<u8> {
        self.step().map(|step| step.number())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Submitted | WizardState::Cancelled)
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, WizardState::Review { in_flight: true, .. })
    }

    /// Whether `Next` would move forward from the current step.
    pub fn can_advance(&self) -> bool {
        match self {
            WizardState::Document { draft } => draft.id_document.is_some(),
            WizardState::Selfie { draft, .. } => draft.selfie_photo.is_some(),
            WizardState::Details { draft, .. } => draft.personal_info.is_complete(),
            _ => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        match self {
            WizardState::Selfie { .. } | WizardState::Details { .. } => true,
            WizardState::Review { in_flight, .. } => !in_flight,
            _ => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, WizardState::Review { in_flight: false, .. })
    }

    pub fn id_document(&self) -> Option<&EvidenceFile> {
        match self {
            WizardState::Document { draft } => draft.id_document.as_ref(),
            WizardState::Selfie { id_document, .. } | WizardState::Details { id_document, .. } => {
                Some(id_document)
            }
            WizardState::Review { submission, .. } => Some(&submission.id_document),
            WizardState::Submitted | WizardState::Cancelled => None,
        }
    }

    pub fn selfie_photo(&self) -> Option<&EvidenceFile> {
        match self {
            WizardState::Document { draft } | WizardState::Selfie { draft, .. } => {
                draft.selfie_photo.as_ref()
            }
            WizardState::Details { selfie_photo, .. } => Some(selfie_photo),
            WizardState::Review { submission, .. } => Some(&submission.selfie_photo),
            WizardState::Submitted | WizardState::Cancelled => None,
        }
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        match self {
            WizardState::Document { draft }
            | WizardState::Selfie { draft, .. }
            | WizardState::Details { draft, .. } => Some(draft.document_type),
            WizardState::Review { submission, .. } => Some(submission.document_type),
            WizardState::Submitted | WizardState::Cancelled => None,
        }
    }

    pub fn personal_info(&self) -> Option<PersonalInfoDraft> {
        match self {
            WizardState::Document { draft }
            | WizardState::Selfie { draft, .. }
            | WizardState::Details { draft, .. } => Some(draft.personal_info.clone()),
            WizardState::Review { submission, .. } => {
                Some(submission.personal_info.clone().into_draft())
            }
            WizardState::Submitted | WizardState::Cancelled => None,
        }
    }

    pub fn error(&self) -> Option<&WizardError> {
        match self {
            WizardState::Review { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            // Step 1
            (
                WizardState::Document { mut draft },
                WizardEvent::ChooseDocumentType { document_type },
            ) => {
                draft.document_type = document_type;
                (WizardState::Document { draft }, Vec::new())
            }
            (WizardState::Document { mut draft }, WizardEvent::SelectIdDocument { file }) => {
                draft.id_document = Some(file);
                (WizardState::Document { draft }, Vec::new())
            }
            (WizardState::Document { mut draft }, WizardEvent::RemoveIdDocument) => {
                draft.id_document = None;
                (WizardState::Document { draft }, Vec::new())
            }
            (WizardState::Document { mut draft }, WizardEvent::Next) => {
                match draft.id_document.take() {
                    Some(id_document) => (WizardState::Selfie { id_document, draft }, Vec::new()),
                    None => (WizardState::Document { draft }, Vec::new()),
                }
            }

            // Step 2
            (
                WizardState::Selfie {
                    id_document,
                    mut draft,
                },
                WizardEvent::SelectSelfie { file },
            ) => {
                draft.selfie_photo = Some(file);
                (WizardState::Selfie { id_document, draft }, Vec::new())
            }
            (WizardState::Selfie { id_document, mut draft }, WizardEvent::RemoveSelfie) => {
                draft.selfie_photo = None;
                (WizardState::Selfie { id_document, draft }, Vec::new())
            }
            (WizardState::Selfie { id_document, mut draft }, WizardEvent::Next) => {
                match draft.selfie_photo.take() {
                    Some(selfie_photo) => (
                        WizardState::Details {
                            id_document,
                            selfie_photo,
                            draft,
                        },
                        Vec::new(),
                    ),
                    None => (WizardState::Selfie { id_document, draft }, Vec::new()),
                }
            }
            (WizardState::Selfie { id_document, mut draft }, WizardEvent::Previous) => {
                draft.id_document = Some(id_document);
                (WizardState::Document { draft }, Vec::new())
            }

            // Step 3
            (
                WizardState::Details {
                    id_document,
                    selfie_photo,
                    mut draft,
                },
                WizardEvent::EditField { field, value },
            ) => {
                draft.personal_info.set(field, value);
                (
                    WizardState::Details {
                        id_document,
                        selfie_photo,
                        draft,
                    },
                    Vec::new(),
                )
            }
            (
                WizardState::Details {
                    id_document,
                    selfie_photo,
                    mut draft,
                },
                WizardEvent::Next,
            ) => match std::mem::take(&mut draft.personal_info).complete() {
                Ok(personal_info) => (
                    WizardState::Review {
                        submission: VerificationSubmission {
                            id_document,
                            selfie_photo,
                            document_type: draft.document_type,
                            personal_info,
                        },
                        in_flight: false,
                        error: None,
                    },
                    Vec::new(),
                ),
                Err(personal_info) => {
                    draft.personal_info = personal_info;
                    (
                        WizardState::Details {
                            id_document,
                            selfie_photo,
                            draft,
                        },
                        Vec::new(),
                    )
                }
            },
            (
                WizardState::Details {
                    id_document,
                    selfie_photo,
                    mut draft,
                },
                WizardEvent::Previous,
            ) => {
                draft.selfie_photo = Some(selfie_photo);
                (WizardState::Selfie { id_document, draft }, Vec::new())
            }

            // Step 4
            (
                WizardState::Review {
                    submission,
                    in_flight: false,
                    ..
                },
                WizardEvent::Submit,
            ) => (
                WizardState::Review {
                    submission: submission.clone(),
                    in_flight: true,
                    error: None,
                },
                vec![WizardAction::SubmitVerification { submission }],
            ),
            (
                WizardState::Review {
                    submission,
                    in_flight: false,
                    ..
                },
                WizardEvent::Previous,
            ) => {
                let VerificationSubmission {
                    id_document,
                    selfie_photo,
                    document_type,
                    personal_info,
                } = submission;
                (
                    WizardState::Details {
                        id_document,
                        selfie_photo,
                        draft: WizardDraft {
                            document_type,
                            id_document: None,
                            selfie_photo: None,
                            personal_info: personal_info.into_draft(),
                        },
                    },
                    Vec::new(),
                )
            }
            (WizardState::Review { in_flight: true, .. }, WizardEvent::SubmissionSucceeded) => {
                (WizardState::Submitted, vec![WizardAction::NotifyCompleted])
            }
            (
                WizardState::Review {
                    submission,
                    in_flight: true,
                    ..
                },
                WizardEvent::SubmissionFailed,
            ) => (
                WizardState::Review {
                    submission,
                    in_flight: false,
                    error: Some(WizardError::SubmissionFailed),
                },
                Vec::new(),
            ),

            // Cancel is refused while a submission is in flight.
            (
                WizardState::Document { .. }
                | WizardState::Selfie { .. }
                | WizardState::Details { .. }
                | WizardState::Review {
                    in_flight: false, ..
                },
                WizardEvent::Cancel,
            ) => (WizardState::Cancelled, Vec::new()),

            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    event = _event.name(),
                    step = ?state.current_step(),
                    "wizard event ignored in current state"
                );
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn png(name: &str) -> EvidenceFile {
        EvidenceFile::new(name, "image/png", Bytes::from(name.as_bytes().to_vec()))
    }

    fn run(state: WizardState, events: Vec<WizardEvent>) -> (WizardState, Vec<WizardAction>) {
        let mut actions = Vec::new();
        let mut current = state;
        for event in events {
            let (next, mut emitted) = WizardStateMachine::transition(current, event);
            actions.append(&mut emitted);
            current = next;
        }
        (current, actions)
    }

    fn edit(field: PersonalInfoField, value: &str) -> WizardEvent {
        WizardEvent::EditField {
            field,
            value: value.to_string(),
        }
    }

    fn details_events() -> Vec<WizardEvent> {
        vec![
            edit(PersonalInfoField::DocumentNumber, "A123"),
            edit(PersonalInfoField::DateOfBirth, "1990-01-01"),
            edit(PersonalInfoField::FullName, "Jane Doe"),
            edit(PersonalInfoField::Address, "1 Main St"),
        ]
    }

    fn at_selfie() -> WizardState {
        run(
            WizardState::initial(),
            vec![
                WizardEvent::SelectIdDocument { file: png("id.png") },
                WizardEvent::Next,
            ],
        )
        .0
    }

    fn at_details() -> WizardState {
        run(
            at_selfie(),
            vec![
                WizardEvent::SelectSelfie {
                    file: png("selfie.png"),
                },
                WizardEvent::Next,
            ],
        )
        .0
    }

    fn at_review() -> WizardState {
        let mut events = details_events();
        events.push(WizardEvent::Next);
        run(at_details(), events).0
    }

    #[test]
    fn wizard_starts_on_document_step() {
        let state = WizardState::initial();
        assert_eq!(state.current_step(), Some(1));
        assert!(!state.can_advance());
        assert!(!state.can_go_back());
    }

    #[test]
    fn next_without_required_data_is_noop_on_every_gated_step() {
        let blocked = vec![WizardState::initial(), at_selfie(), at_details()];
        for state in blocked {
            let before = state.clone();
            let (next, actions) = WizardStateMachine::transition(state, WizardEvent::Next);
            assert_eq!(next, before);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn details_with_three_of_four_fields_stays_blocked() {
        let mut events = details_events();
        events.pop();
        events.push(WizardEvent::Next);
        let (state, _) = run(at_details(), events);
        assert_eq!(state.current_step(), Some(3));
        assert!(!state.can_advance());
    }

    #[test]
    fn previous_decrements_step_by_one() {
        for (state, expected) in [(at_selfie(), 1), (at_details(), 2), (at_review(), 3)] {
            let (next, actions) = WizardStateMachine::transition(state, WizardEvent::Previous);
            assert_eq!(next.current_step(), Some(expected));
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn previous_on_first_step_is_noop() {
        let (next, _) =
            WizardStateMachine::transition(WizardState::initial(), WizardEvent::Previous);
        assert_eq!(next, WizardState::initial());
    }

    #[test]
    fn going_back_keeps_collected_values() {
        let (state, _) = run(
            at_review(),
            vec![
                WizardEvent::Previous,
                WizardEvent::Previous,
                WizardEvent::Previous,
            ],
        );
        assert_eq!(state.current_step(), Some(1));
        assert_eq!(state.id_document(), Some(&png("id.png")));
        assert_eq!(state.selfie_photo(), Some(&png("selfie.png")));
        assert_eq!(
            state.personal_info().map(|info| info.document_number),
            Some("A123".to_string())
        );

        let (state, _) = run(state, vec![WizardEvent::Next, WizardEvent::Next, WizardEvent::Next]);
        assert_eq!(state.current_step(), Some(4));
    }

    #[test]
    fn selecting_a_replacement_file_replaces_prior_blob() {
        let (state, _) = run(
            WizardState::initial(),
            vec![
                WizardEvent::SelectIdDocument { file: png("old.png") },
                WizardEvent::SelectIdDocument { file: png("new.png") },
            ],
        );
        assert_eq!(state.id_document(), Some(&png("new.png")));

        let (state, _) = run(
            at_selfie(),
            vec![
                WizardEvent::SelectSelfie { file: png("a.png") },
                WizardEvent::SelectSelfie { file: png("b.png") },
            ],
        );
        assert_eq!(state.selfie_photo(), Some(&png("b.png")));
    }

    #[test]
    fn removing_file_blocks_forward_progress_again() {
        let (state, _) = run(
            WizardState::initial(),
            vec![
                WizardEvent::SelectIdDocument { file: png("id.png") },
                WizardEvent::RemoveIdDocument,
                WizardEvent::Next,
            ],
        );
        assert_eq!(state.current_step(), Some(1));
        assert!(!state.can_advance());

        let (state, _) = run(
            at_selfie(),
            vec![
                WizardEvent::SelectSelfie { file: png("s.png") },
                WizardEvent::RemoveSelfie,
                WizardEvent::Next,
            ],
        );
        assert_eq!(state.current_step(), Some(2));
        assert!(!state.can_advance());
    }

    #[test]
    fn submit_marks_in_flight_and_emits_single_submission() {
        let (state, actions) = WizardStateMachine::transition(at_review(), WizardEvent::Submit);
        assert!(state.in_flight());
        assert_eq!(state.current_step(), Some(4));
        assert_eq!(actions.len(), 1);
        let WizardAction::SubmitVerification { submission } = &actions[0] else {
            panic!("expected SubmitVerification, got {:?}", actions[0]);
        };
        assert_eq!(submission.id_document, png("id.png"));
        assert_eq!(submission.selfie_photo, png("selfie.png"));
        assert_eq!(submission.document_type, DocumentType::Passport);
        assert_eq!(submission.personal_info.full_name(), "Jane Doe");
    }

    #[test]
    fn submit_while_in_flight_is_noop() {
        let (state, _) = WizardStateMachine::transition(at_review(), WizardEvent::Submit);
        let before = state.clone();
        let (state, actions) = WizardStateMachine::transition(state, WizardEvent::Submit);
        assert_eq!(state, before);
        assert!(actions.is_empty());

        let (state, actions) = WizardStateMachine::transition(state, WizardEvent::Previous);
        assert_eq!(state, before);
        assert!(actions.is_empty());
    }

    #[test]
    fn failed_submission_returns_to_review_with_error() {
        let (state, actions) = run(
            at_review(),
            vec![WizardEvent::Submit, WizardEvent::SubmissionFailed],
        );
        assert_eq!(state.current_step(), Some(4));
        assert!(!state.in_flight());
        assert_eq!(state.error(), Some(&WizardError::SubmissionFailed));
        assert_eq!(actions.len(), 1, "only the submit action, no retry");
        assert!(state.can_submit());
    }

    #[test]
    fn resubmit_after_failure_clears_error() {
        let (state, actions) = run(
            at_review(),
            vec![
                WizardEvent::Submit,
                WizardEvent::SubmissionFailed,
                WizardEvent::Submit,
            ],
        );
        assert!(state.in_flight());
        assert_eq!(state.error(), None);
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn successful_submission_completes_and_ignores_further_events() {
        let (state, actions) = run(
            at_review(),
            vec![WizardEvent::Submit, WizardEvent::SubmissionSucceeded],
        );
        assert_eq!(state, WizardState::Submitted);
        assert_eq!(actions.last(), Some(&WizardAction::NotifyCompleted));

        let (state, actions) = WizardStateMachine::transition(state, WizardEvent::Submit);
        assert_eq!(state, WizardState::Submitted);
        assert!(actions.is_empty());
    }

    #[test]
    fn submission_result_without_in_flight_is_ignored() {
        let review = at_review();
        let (state, actions) =
            WizardStateMachine::transition(review.clone(), WizardEvent::SubmissionSucceeded);
        assert_eq!(state, review);
        assert!(actions.is_empty());
    }

    #[test]
    fn cancel_is_refused_while_in_flight() {
        let (state, _) = WizardStateMachine::transition(at_review(), WizardEvent::Cancel);
        assert_eq!(state, WizardState::Cancelled);

        let (in_flight, _) = WizardStateMachine::transition(at_review(), WizardEvent::Submit);
        let (state, _) = WizardStateMachine::transition(in_flight.clone(), WizardEvent::Cancel);
        assert_eq!(state, in_flight);
    }

    #[test]
    fn document_type_is_carried_into_submission() {
        let (state, _) = run(
            WizardState::initial(),
            vec![WizardEvent::ChooseDocumentType {
                document_type: DocumentType::NationalId,
            }],
        );
        assert_eq!(state.document_type(), Some(DocumentType::NationalId));
    }

    #[test]
    fn for_user_prefills_full_name() {
        let state = WizardState::for_user("Jane Doe");
        assert_eq!(
            state.personal_info().map(|info| info.full_name),
            Some("Jane Doe".to_string())
        );
    }
}
