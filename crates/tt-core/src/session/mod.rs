//! Session tokens issued by the backend's authentication service.

use crate::security::SecretString;

/// Access/refresh token pair for the current user session.
///
/// 当前会话的访问令牌与刷新令牌。
#[derive(Debug, PartialEq)]
pub struct SessionTokens {
    pub access_token: SecretString,
    pub refresh_token: Option<SecretString>,
}

impl SessionTokens {
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token: SecretString::new(access_token),
            refresh_token: refresh_token.map(SecretString::new),
        }
    }

    /// `Authorization` header value for authenticated requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose())
    }
}
