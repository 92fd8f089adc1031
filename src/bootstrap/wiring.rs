//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (REST client, token store) / 创建 infra 层具体实现
//! - ✅ Create platform implementations (image files) / 创建 platform 层具体实现
//! - ✅ Group them into `AppDeps` / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//! - Config already resolved in config.rs
//! - 配置已在 config.rs 解析
//!
//! > **This is the only place allowed to depend on tt-infra + tt-platform + tt-app simultaneously.**
//! > **这是唯一允许同时依赖 tt-infra、tt-platform 和 tt-app 的地方。**

use std::sync::Arc;

use tt_app::AppDeps;
use tt_core::config::AppConfig;
use tt_core::ports::*;
use tt_infra::http::HttpVerificationApi;
use tt_infra::session::FileSessionTokenStore;
use tt_platform::evidence::LocalImageFileSource;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Wire all dependencies from the resolved configuration.
/// 根据已解析的配置组装所有依赖。
pub fn wire_dependencies(
    config: &AppConfig,
    wizard_events: Arc<dyn WizardEventPort>,
) -> WiringResult<AppDeps> {
    let session_tokens: Arc<dyn SessionTokenPort> =
        Arc::new(FileSessionTokenStore::new(config.session_path.clone()));

    let verification_api: Arc<dyn VerificationApiPort> = Arc::new(
        HttpVerificationApi::new(config.api_base_url.clone(), session_tokens.clone())
            .map_err(|e| WiringError::HttpClientInit(e.to_string()))?,
    );

    let evidence_source: Arc<dyn EvidenceSourcePort> = Arc::new(LocalImageFileSource::new());

    tracing::debug!(api_base_url = %config.api_base_url, "dependencies wired");

    Ok(AppDeps {
        verification_api,
        session_tokens,
        evidence_source,
        wizard_events,
    })
}
