//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Fill empty facts with defaults and overrides / 用默认值和覆盖项补全空值
//!
//! `load_config` accepts whatever is in the file. Defaults are applied in one
//! place only: `resolve_config`.

use anyhow::Context;
use std::path::PathBuf;
use tt_app::app_paths::AppPaths;
use tt_core::config::AppConfig;
use tt_core::ports::AppDirsPort;
use tt_platform::app_dirs::DirsAppDirsAdapter;

/// Backend used when neither the config file nor the environment names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// facts, not errors.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Fill empty values with defaults.
///
/// Precedence for the base URL: override (CLI flag or `TRUETRIBE_API_URL`),
/// then the config file, then [`DEFAULT_API_BASE_URL`]. Paths fall back to
/// the platform app data directory.
pub fn resolve_config(
    file_config: AppConfig,
    paths: &AppPaths,
    api_url_override: Option<String>,
) -> AppConfig {
    let api_base_url = api_url_override
        .filter(|url| !url.is_empty())
        .or_else(|| Some(file_config.api_base_url).filter(|url| !url.is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let session_path = if file_config.session_path.as_os_str().is_empty() {
        paths.session_path.clone()
    } else {
        file_config.session_path
    };

    let log_dir = if file_config.log_dir.as_os_str().is_empty() {
        paths.logs_dir.clone()
    } else {
        file_config.log_dir
    };

    AppConfig {
        api_base_url,
        session_path,
        log_dir,
    }
}

/// Resolve the concrete application paths for this machine and profile.
pub fn resolve_app_paths() -> anyhow::Result<AppPaths> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    Ok(AppPaths::from_app_dirs(&app_dirs))
}

/// Load the config file if present and resolve it.
///
/// A missing file is not an error; every value then comes from defaults.
pub fn load_app_config(
    paths: &AppPaths,
    api_url_override: Option<String>,
) -> anyhow::Result<AppConfig> {
    let file_config = if paths.config_path.exists() {
        load_config(paths.config_path.clone())?
    } else {
        AppConfig::empty()
    };
    Ok(resolve_config(file_config, paths, api_url_override))
}
