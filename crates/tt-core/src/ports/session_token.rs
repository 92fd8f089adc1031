use async_trait::async_trait;

use crate::session::SessionTokens;

#[async_trait]
pub trait SessionTokenPort: Send + Sync {
    /// Returns `None` when no session is stored.
    async fn load(&self) -> anyhow::Result<Option<SessionTokens>>;
    async fn save(&self, tokens: &SessionTokens) -> anyhow::Result<()>;
    /// Removes both tokens. Clearing an absent session is not an error.
    async fn clear(&self) -> anyhow::Result<()>;
}
