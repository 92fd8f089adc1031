use crate::verification::{
    DocumentType, EvidenceFile, PersonalInfoDraft, WizardError, WizardState, WizardStep,
};

/// Display-ready view of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EvidenceSummary {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
    /// `data:` URL the hosting UI renders as the thumbnail.
    pub preview: String,
}

impl From<&EvidenceFile> for EvidenceSummary {
    fn from(file: &EvidenceFile) -> Self {
        Self {
            file_name: file.file_name().to_string(),
            content_type: file.content_type().to_string(),
            size: file.len(),
            preview: file.preview_data_url(),
        }
    }
}

/// Coarse wizard phase, including the terminal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    Step(WizardStep),
    Submitted,
    Cancelled,
}

/// Serializable projection of [`WizardState`] emitted to the hosting UI.
///
/// 发送给前端的向导状态快照。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WizardSnapshot {
    pub phase: WizardPhase,
    pub step_number: Option<u8>,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub document_type: Option<DocumentType>,
    pub id_document: Option<EvidenceSummary>,
    pub selfie_photo: Option<EvidenceSummary>,
    pub personal_info: Option<PersonalInfoDraft>,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub can_submit: bool,
    pub in_flight: bool,
    pub error: Option<WizardError>,
}

impl From<&WizardState> for WizardSnapshot {
    fn from(state: &WizardState) -> Self {
        let step = state.step();
        let phase = match (step, state) {
            (Some(step), _) => WizardPhase::Step(step),
            (None, WizardState::Submitted) => WizardPhase::Submitted,
            (None, _) => WizardPhase::Cancelled,
        };
        Self {
            phase,
            step_number: step.map(|s| s.number()),
            title: step.map(|s| s.title()),
            description: step.map(|s| s.description()),
            document_type: state.document_type(),
            id_document: state.id_document().map(EvidenceSummary::from),
            selfie_photo: state.selfie_photo().map(EvidenceSummary::from),
            personal_info: state.personal_info(),
            can_advance: state.can_advance(),
            can_go_back: state.can_go_back(),
            can_submit: state.can_submit(),
            in_flight: state.in_flight(),
            error: state.error().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::{WizardEvent, WizardStateMachine};
    use bytes::Bytes;

    #[test]
    fn snapshot_describes_current_step() {
        let (state, _) = WizardStateMachine::transition(
            WizardState::initial(),
            WizardEvent::SelectIdDocument {
                file: EvidenceFile::new("id.png", "image/png", Bytes::from_static(b"1234")),
            },
        );

        let snapshot = WizardSnapshot::from(&state);

        assert_eq!(snapshot.phase, WizardPhase::Step(WizardStep::Document));
        assert_eq!(snapshot.step_number, Some(1));
        assert_eq!(snapshot.title, Some("Document Upload"));
        assert!(snapshot.can_advance);
        assert!(!snapshot.can_go_back);
        assert_eq!(
            snapshot.id_document,
            Some(EvidenceSummary {
                file_name: "id.png".into(),
                content_type: "image/png".into(),
                size: 4,
                preview: "data:image/png;base64,MTIzNA==".into(),
            })
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"]["step"], "document");
        assert_eq!(json["document_type"], "passport");
    }

    #[test]
    fn snapshot_exposes_selfie_preview_as_data_url() {
        let mut state = WizardState::initial();
        for event in [
            WizardEvent::SelectIdDocument {
                file: EvidenceFile::new("id.png", "image/png", Bytes::from_static(b"id")),
            },
            WizardEvent::Next,
            WizardEvent::SelectSelfie {
                file: EvidenceFile::new(
                    "me.jpg",
                    "image/jpeg",
                    Bytes::from_static(b"\xFF\xD8\xFF"),
                ),
            },
        ] {
            state = WizardStateMachine::transition(state, event).0;
        }

        let snapshot = WizardSnapshot::from(&state);
        let selfie = snapshot.selfie_photo.expect("selfie selected");
        assert!(selfie.preview.starts_with("data:image/jpeg;base64,"));
        assert_eq!(selfie.preview, "data:image/jpeg;base64,/9j/");

        let json = serde_json::to_value(&snapshot.id_document).unwrap();
        assert_eq!(json["preview"], "data:image/png;base64,aWQ=");
    }

    #[test]
    fn terminal_snapshot_has_no_step() {
        let snapshot = WizardSnapshot::from(&WizardState::Submitted);
        assert_eq!(snapshot.phase, WizardPhase::Submitted);
        assert_eq!(snapshot.step_number, None);
        assert!(!snapshot.can_advance);
        assert!(!snapshot.can_submit);
    }
}
