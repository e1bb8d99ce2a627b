//! JSON-over-HTTP client for the backend endpoints
//!
//! [`ApiClient`] owns the URL building, status handling and error
//! normalization; the actual HTTP exchange sits behind [`Transport`] so the
//! browser (fetch) and the CLI (reqwest) plug in their own.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::{
    ChatRequest, ChatResponse, DocumentGenerationRequest, DocumentGenerationResponse,
    ErrorBody, LegalSearchRequest, SearchResult,
};
use crate::config::{ApiConfig, Endpoint};
use crate::error::ClientError;

/// Raw answer from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP POST carrying a JSON body
///
/// Implementations send `Content-Type: application/json` and return
/// whatever status the server answered with. Only a missing response is an
/// error, reported as [`ClientError::Transport`].
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ClientError>;
}

/// Message surfaced for a non-success reply: the `detail` field when the
/// body carries one, otherwise a message naming the status code
pub fn error_message(reply: &HttpReply) -> String {
    serde_json::from_str::<ErrorBody>(&reply.body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| format!("HTTP Error: {}", reply.status))
}

pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `payload` to `endpoint` and return the parsed JSON body unmodified
    pub async fn send<P>(&self, endpoint: Endpoint, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let result = self.exchange(endpoint, payload).await;
        if let Err(err) = &result {
            tracing::error!(endpoint = endpoint.name(), error = %err, "API error");
        }
        result
    }

    /// Like [`send`](Self::send), decoding the body into `R`
    pub async fn send_as<P, R>(&self, endpoint: Endpoint, payload: &P) -> Result<R, ClientError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.send(endpoint, payload).await?;
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(endpoint = endpoint.name(), error = %e, "Unexpected response shape");
            ClientError::from(e)
        })
    }

    pub async fn generate_document(
        &self,
        request: &DocumentGenerationRequest,
    ) -> Result<DocumentGenerationResponse, ClientError> {
        self.send_as(Endpoint::GenerateDocument, request).await
    }

    pub async fn legal_search(
        &self,
        request: &LegalSearchRequest,
    ) -> Result<SearchResult, ClientError> {
        self.send_as(Endpoint::LegalSearch, request).await
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.send_as(Endpoint::Chat, request).await
    }

    async fn exchange<P>(&self, endpoint: Endpoint, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.config.url_for(endpoint);
        let body = serde_json::to_string(payload)?;

        tracing::debug!(%url, bytes = body.len(), "POST");
        let reply = self.transport.post_json(&url, body).await?;

        if !reply.is_success() {
            return Err(ClientError::Application {
                status: reply.status,
                message: error_message(&reply),
            });
        }

        Ok(serde_json::from_str(&reply.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;
    use proptest::prelude::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Replies with a fixed answer and records what was posted
    struct FixedTransport {
        reply: Result<HttpReply, ClientError>,
        posted: RefCell<Vec<(String, String)>>,
    }

    impl FixedTransport {
        fn new(reply: Result<HttpReply, ClientError>) -> Self {
            Self {
                reply,
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for FixedTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ClientError> {
            self.posted.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn client(reply: Result<HttpReply, ClientError>) -> ApiClient<FixedTransport> {
        ApiClient::new(resolve("localhost"), FixedTransport::new(reply))
    }

    fn run<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[tokio::test]
    async fn test_success_returns_body_unmodified() {
        let body = json!({"reponse": "ok", "extra": [1, 2, {"nested": null}]});
        let client = client(Ok(HttpReply::new(200, body.to_string())));

        let value = client
            .send(Endpoint::LegalSearch, &json!({"question": "q"}))
            .await
            .unwrap();

        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn test_posts_serialized_payload_to_endpoint_url() {
        let client = client(Ok(HttpReply::new(200, "{}")));
        client
            .send(Endpoint::Chat, &json!({"message": "hi", "historique": []}))
            .await
            .unwrap();

        let posted = client.transport().posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "http://127.0.0.1:8000/api/v1/chat");
        let sent: Value = serde_json::from_str(&posted[0].1).unwrap();
        assert_eq!(sent, json!({"message": "hi", "historique": []}));
    }

    #[tokio::test]
    async fn test_detail_is_surfaced_verbatim() {
        let client = client(Ok(HttpReply::new(
            500,
            r#"{"detail": "Erreur lors de l'interaction chat: quota"}"#,
        )));

        let err = client.send(Endpoint::Chat, &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur lors de l'interaction chat: quota");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_status() {
        let client = client(Ok(HttpReply::new(502, "<html>Bad Gateway</html>")));
        let err = client.send(Endpoint::Chat, &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error: 502");
    }

    #[tokio::test]
    async fn test_json_error_body_without_detail_falls_back_to_status() {
        let client = client(Ok(HttpReply::new(500, r#"{"error": "x"}"#)));
        let err = client.send(Endpoint::Chat, &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_network_failure_is_propagated() {
        let client = client(Err(ClientError::Transport("Failed to fetch".to_string())));
        let err = client.send(Endpoint::Chat, &json!({})).await.unwrap_err();
        assert_eq!(err, ClientError::Transport("Failed to fetch".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_decode_error() {
        let client = client(Ok(HttpReply::new(200, "not json")));
        let err = client.send(Endpoint::Chat, &json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_typed_helper_rejects_wrong_shape() {
        let client = client(Ok(HttpReply::new(200, r#"{"unexpected": true}"#)));
        let err = client
            .legal_search(&LegalSearchRequest::new("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: a JSON `detail` always becomes the error message exactly
        #[test]
        fn detail_becomes_message(status in 400u16..600, detail in ".{0,60}") {
            let body = json!({ "detail": detail }).to_string();
            let client = client(Ok(HttpReply::new(status, body)));
            let err = run(client.send(Endpoint::GenerateDocument, &json!({}))).unwrap_err();
            prop_assert_eq!(err.to_string(), detail);
        }

        /// Property: without a parsable detail the message names the status
        #[test]
        fn missing_detail_names_status(status in 300u16..600, body in "[a-z <>]{0,40}") {
            let client = client(Ok(HttpReply::new(status, body)));
            let err = run(client.send(Endpoint::LegalSearch, &json!({}))).unwrap_err();
            prop_assert!(err.to_string().contains(&status.to_string()));
        }

        /// Property: a JSON body with other keys but no detail names the status
        #[test]
        fn json_without_detail_names_status(
            status in 300u16..600,
            key in "[a-ce-z]{1,12}",
            value in "[a-z ]{0,20}",
        ) {
            let body = json!({ key: value }).to_string();
            let client = client(Ok(HttpReply::new(status, body)));
            let err = run(client.send(Endpoint::Chat, &json!({}))).unwrap_err();
            prop_assert_eq!(err.to_string(), format!("HTTP Error: {}", status));
        }
    }
}
