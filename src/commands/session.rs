//! Session commands
//! 会话相关命令

use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

/// Store tokens issued by the backend's login endpoint.
pub async fn set_session(
    runtime: &AppRuntime,
    access_token: String,
    refresh_token: Option<String>,
) -> Result<(), String> {
    let span = info_span!("command.session.set");
    async {
        runtime
            .usecases()
            .store_session_tokens()
            .execute(access_token, refresh_token)
            .await
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn clear_session(runtime: &AppRuntime) -> Result<(), String> {
    let span = info_span!("command.session.clear");
    async { runtime.usecases().clear_session().execute().await.map_err(map_err) }
        .instrument(span)
        .await
}
