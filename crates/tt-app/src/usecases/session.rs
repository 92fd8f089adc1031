use std::sync::Arc;

use tt_core::ports::SessionTokenPort;
use tt_core::session::SessionTokens;

/// Use case for storing tokens obtained from the authentication service.
pub struct StoreSessionTokens {
    session_tokens: Arc<dyn SessionTokenPort>,
}

impl StoreSessionTokens {
    pub fn new(session_tokens: Arc<dyn SessionTokenPort>) -> Self {
        Self { session_tokens }
    }

    pub async fn execute(
        &self,
        access_token: String,
        refresh_token: Option<String>,
    ) -> anyhow::Result<()> {
        let tokens = SessionTokens::new(access_token, refresh_token);
        if tokens.access_token.is_empty() {
            anyhow::bail!("access token must not be empty");
        }
        self.session_tokens.save(&tokens).await?;
        tracing::info!(has_refresh = tokens.refresh_token.is_some(), "session tokens stored");
        Ok(())
    }
}

/// Use case for forgetting the local session.
pub struct ClearSession {
    session_tokens: Arc<dyn SessionTokenPort>,
}

impl ClearSession {
    pub fn new(session_tokens: Arc<dyn SessionTokenPort>) -> Self {
        Self { session_tokens }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.session_tokens.clear().await?;
        tracing::info!("session cleared");
        Ok(())
    }
}
