//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for use case construction. Not a builder: no build
//! steps, no default values, no hidden logic.

use std::sync::Arc;
use tt_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required.
pub struct AppDeps {
    // Backend / 后端
    pub verification_api: Arc<dyn VerificationApiPort>,

    // Session / 会话
    pub session_tokens: Arc<dyn SessionTokenPort>,

    // Local files / 本地文件
    pub evidence_source: Arc<dyn EvidenceSourcePort>,

    // UI / 界面
    pub wizard_events: Arc<dyn WizardEventPort>,
}
