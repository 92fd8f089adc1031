//! File-based session token store
//!
//! Persists the access/refresh token pair to a local JSON file in the
//! application data directory.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tt_core::ports::SessionTokenPort;
use tt_core::session::SessionTokens;

pub const DEFAULT_SESSION_FILE: &str = "session.json";

/// On-disk shape. Only lives for the duration of one read or write.
#[derive(Serialize, Deserialize)]
struct StoredTokens {
    access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

pub struct FileSessionTokenStore {
    session_file_path: PathBuf,
}

impl FileSessionTokenStore {
    pub fn new(session_file_path: PathBuf) -> Self {
        Self { session_file_path }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            session_file_path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionTokenPort for FileSessionTokenStore {
    async fn load(&self) -> anyhow::Result<Option<SessionTokens>> {
        if !fs::try_exists(&self.session_file_path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.session_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredTokens = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse session file: {e}"))?;

        if stored.access_token.is_empty() {
            return Ok(None);
        }

        Ok(Some(SessionTokens::new(
            stored.access_token,
            stored.refresh_token,
        )))
    }

    async fn save(&self, tokens: &SessionTokens) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let stored = StoredTokens {
            access_token: tokens.access_token.expose().to_string(),
            refresh_token: tokens
                .refresh_token
                .as_ref()
                .map(|token| token.expose().to_string()),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session tokens: {e}"))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {e}"))?;

        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.session_file_path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(anyhow::anyhow!("Failed to remove session file: {err}")),
        }
    }
}
