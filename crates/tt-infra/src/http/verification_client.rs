//! REST client for the backend verification endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};
use tt_core::ports::{ApiError, SessionTokenPort, VerificationApiPort};
use tt_core::verification::{EvidenceFile, VerificationOverview, VerificationSubmission};

const SUBMIT_PATH: &str = "/api/v1/verification/submit/";
const STATUS_PATH: &str = "/api/v1/verification/status/";

pub struct HttpVerificationApi {
    client: reqwest::Client,
    base_url: String,
    session_tokens: Arc<dyn SessionTokenPort>,
}

impl HttpVerificationApi {
    pub fn new(
        base_url: impl Into<String>,
        session_tokens: Arc<dyn SessionTokenPort>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url, session_tokens))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session_tokens: Arc<dyn SessionTokenPort>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when a session is stored.
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let tokens = self
            .session_tokens
            .load()
            .await
            .map_err(|e| ApiError::Session(e.to_string()))?;
        Ok(match tokens {
            Some(tokens) => request.header(reqwest::header::AUTHORIZATION, tokens.bearer()),
            None => {
                debug!("no stored session, sending request unauthenticated");
                request
            }
        })
    }

    /// Map non-success responses, clearing the session on 401.
    async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend returned 401, clearing stored session");
            if let Err(err) = self.session_tokens.clear().await {
                warn!(error = %err, "failed to clear session after 401");
            }
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl VerificationApiPort for HttpVerificationApi {
    async fn submit_verification(
        &self,
        submission: VerificationSubmission,
    ) -> Result<(), ApiError> {
        let form = build_submission_form(&submission)?;
        let request = self.authorize(self.client.post(self.url(SUBMIT_PATH))).await?;

        let response = request.multipart(form).send().await.map_err(map_reqwest_error)?;
        let response = self.check_status(response).await?;
        info!(status = response.status().as_u16(), "verification submission accepted");
        Ok(())
    }

    async fn verification_status(&self) -> Result<VerificationOverview, ApiError> {
        let request = self.authorize(self.client.get(self.url(STATUS_PATH))).await?;

        let response = request.send().await.map_err(map_reqwest_error)?;
        let response = self.check_status(response).await?;
        response
            .json::<VerificationOverview>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Two file parts followed by the five text fields.
fn build_submission_form(submission: &VerificationSubmission) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .part("id_document", file_part(&submission.id_document)?)
        .part("selfie_photo", file_part(&submission.selfie_photo)?);
    for (name, value) in submission.text_fields() {
        form = form.text(name, value);
    }
    Ok(form)
}

fn file_part(file: &EvidenceFile) -> Result<Part, ApiError> {
    Part::bytes(file.bytes().to_vec())
        .file_name(file.file_name().to_string())
        .mime_str(file.content_type())
        .map_err(|e| {
            ApiError::Transport(format!("invalid content type {}: {e}", file.content_type()))
        })
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        return ApiError::Rejected {
            status: status.as_u16(),
            body: String::new(),
        };
    }
    if error.is_decode() {
        return ApiError::Decode(error.to_string());
    }
    ApiError::Transport(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use mockito::{Matcher, Server};
    use std::sync::Mutex;
    use tt_core::session::SessionTokens;
    use tt_core::verification::{DocumentType, PersonalInfoDraft, PersonalInfoField};

    struct MemorySession {
        access_token: Mutex<Option<String>>,
    }

    impl MemorySession {
        fn with_token(token: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                access_token: Mutex::new(token.map(str::to_string)),
            })
        }

        fn token(&self) -> Option<String> {
            self.access_token.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionTokenPort for MemorySession {
        async fn load(&self) -> anyhow::Result<Option<SessionTokens>> {
            Ok(self.token().map(|t| SessionTokens::new(t, None)))
        }

        async fn save(&self, tokens: &SessionTokens) -> anyhow::Result<()> {
            *self.access_token.lock().unwrap() = Some(tokens.access_token.expose().to_string());
            Ok(())
        }

        async fn clear(&self) -> anyhow::Result<()> {
            *self.access_token.lock().unwrap() = None;
            Ok(())
        }
    }

    fn submission() -> VerificationSubmission {
        let mut draft = PersonalInfoDraft::with_full_name("Ada Lovelace");
        draft.set(PersonalInfoField::DocumentNumber, "P1234567".into());
        draft.set(PersonalInfoField::DateOfBirth, "1990-01-01".into());
        draft.set(PersonalInfoField::Address, "1 Main St".into());
        VerificationSubmission {
            id_document: EvidenceFile::new(
                "passport.png",
                "image/png",
                Bytes::from_static(b"\x89PNG\r\n\x1a\nid"),
            ),
            selfie_photo: EvidenceFile::new(
                "selfie.jpg",
                "image/jpeg",
                Bytes::from_static(b"\xff\xd8\xffselfie"),
            ),
            document_type: DocumentType::Passport,
            personal_info: draft.complete().expect("complete draft"),
        }
    }

    #[tokio::test]
    async fn submit_sends_one_authenticated_multipart_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", SUBMIT_PATH)
            .match_header("authorization", "Bearer token-123")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="id_document"; filename="passport.png""#.into()),
                Matcher::Regex(r#"name="selfie_photo"; filename="selfie.jpg""#.into()),
                Matcher::Regex(r#"name="document_type"\r\n\r\npassport"#.into()),
                Matcher::Regex(r#"name="document_number"\r\n\r\nP1234567"#.into()),
                Matcher::Regex(r#"name="full_name"\r\n\r\nAda Lovelace"#.into()),
                Matcher::Regex(r#"name="date_of_birth"\r\n\r\n1990-01-01"#.into()),
                Matcher::Regex(r#"name="address"\r\n\r\n1 Main St"#.into()),
            ]))
            .with_status(201)
            .with_body(r#"{"id":1,"status":"pending"}"#)
            .expect(1)
            .create_async()
            .await;

        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            server.url(),
            MemorySession::with_token(Some("token-123")),
        );

        api.submit_verification(submission())
            .await
            .expect("submission should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_maps_non_success_status_to_rejected() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", SUBMIT_PATH)
            .with_status(400)
            .with_body(r#"{"document_number":["required"]}"#)
            .create_async()
            .await;

        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            server.url(),
            MemorySession::with_token(Some("token-123")),
        );

        let err = api.submit_verification(submission()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                body: r#"{"document_number":["required"]}"#.into(),
            }
        );
    }

    #[tokio::test]
    async fn unauthorized_response_clears_session() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", SUBMIT_PATH)
            .with_status(401)
            .create_async()
            .await;

        let session = MemorySession::with_token(Some("expired"));
        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            format!("{}/", server.url()),
            session.clone(),
        );

        let err = api.submit_verification(submission()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err, ApiError::Unauthorized);
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn status_decodes_overview() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", STATUS_PATH)
            .match_header("authorization", "Bearer token-123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "email_verified": true,
                    "phone_verified": false,
                    "identity_verified": false,
                    "overall_verified": false,
                    "results": [
                        {"id": "7c1e", "verification_type": "identity", "status": "pending"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            server.url(),
            MemorySession::with_token(Some("token-123")),
        );

        let overview = api.verification_status().await.expect("status");

        mock.assert_async().await;
        assert!(overview.email_verified);
        assert!(!overview.identity_verified);
        assert_eq!(overview.results.len(), 1);
        assert!(overview.has_pending());
    }

    #[tokio::test]
    async fn status_without_session_sends_no_authorization() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", STATUS_PATH)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            server.url(),
            MemorySession::with_token(None),
        );

        let overview = api.verification_status().await.expect("status");

        mock.assert_async().await;
        assert!(!overview.overall_verified);
    }

    #[tokio::test]
    async fn status_with_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", STATUS_PATH)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let api = HttpVerificationApi::with_client(
            reqwest::Client::new(),
            server.url(),
            MemorySession::with_token(None),
        );

        let err = api.verification_status().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
