use anyhow::{Context, Result, bail};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::exchange::{ConfirmRequest, ExchangeResponse, StartRequest, Transport};

pub const START_PATH: &str = "/chat/translate/start";
pub const CONFIRM_PATH: &str = "/chat/translate/confirm";
pub const POLISH_PATH: &str = "/chat/translate/polish";

#[derive(Debug, Serialize)]
struct PolishRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct PolishResponse {
    reply: Option<String>,
}

/// Client for the chat and glossary endpoints of one backend.
///
/// Redirects are not followed: the glossary store answers writes with a
/// `303` to its HTML page, which carries nothing this client needs.
pub struct BackendClient {
    pub(super) client: Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        crate::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to backend: {url}"))?;

        let response = ensure_success(response).await?;

        response
            .json::<R>()
            .await
            .with_context(|| format!("Failed to decode response from {url}"))
    }

    /// Asks the backend for a grammar and spelling pass over `message`.
    pub async fn polish(&self, message: &str) -> Result<String> {
        let response: PolishResponse = self
            .post_json(POLISH_PATH, &PolishRequest { message })
            .await?;
        Ok(response.reply.unwrap_or_default())
    }
}

impl Transport for BackendClient {
    async fn start(&self, request: &StartRequest<'_>) -> Result<ExchangeResponse> {
        self.post_json(START_PATH, request).await
    }

    async fn confirm(&self, request: &ConfirmRequest<'_>) -> Result<ExchangeResponse> {
        self.post_json(CONFIRM_PATH, request).await
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    bail!("Backend request failed with status {status}: {body}");
}
