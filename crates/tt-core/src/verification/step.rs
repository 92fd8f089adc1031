/// The four ordered wizard steps.
///
/// 验证向导的四个步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Document,
    Selfie,
    Details,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Document,
        WizardStep::Selfie,
        WizardStep::Details,
        WizardStep::Review,
    ];

    /// 1-based position shown in the progress bar.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Document => 1,
            WizardStep::Selfie => 2,
            WizardStep::Details => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Document => "Document Upload",
            WizardStep::Selfie => "Face Verification",
            WizardStep::Details => "Personal Details",
            WizardStep::Review => "Review & Submit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Document => "Upload your government-issued ID",
            WizardStep::Selfie => "Take a selfie for biometric matching",
            WizardStep::Details => "Confirm your information",
            WizardStep::Review => "Review and submit for verification",
        }
    }
}
