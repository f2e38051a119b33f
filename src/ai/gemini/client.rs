use super::stream::parse_sse_stream;
use super::types::GenerateContentResponse;
use crate::ai::ResponseStream;
use crate::{Error, Result};
use futures::stream::{self, TryStreamExt};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client.
///
/// Holds no per-conversation state; the model is chosen per call.
#[derive(Clone)]
pub struct GeminiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    timeout: Duration,
}

impl GeminiHttpClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, timeout, Client::new())
    }

    pub fn new_with_client(api_key: String, timeout: Duration, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Builds `{base}/v1beta/models/{model}:{method}`.
    ///
    /// `model` may be given bare (`gemini-2.0-flash`) or `models/`-prefixed.
    pub fn model_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post_to_url<Req: Serialize + ?Sized, Resp: DeserializeOwned>(
        &self,
        url: String,
        request: &Req,
    ) -> Result<Resp> {
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Parse(e.to_string())
        })
    }

    /// Calls Gemini's `generateContent` endpoint.
    pub async fn generate_content<Req: Serialize + ?Sized, Resp: DeserializeOwned>(
        &self,
        model: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = self.model_url(model, "generateContent");
        self.post_to_url(url, request).await
    }

    /// Calls Gemini's `streamGenerateContent` endpoint with SSE framing.
    ///
    /// Nothing is sent until the returned stream is first polled. The unary
    /// timeout is not applied: a stream lives as long as the model keeps
    /// producing fragments. Dropping the stream closes the connection.
    pub fn stream_generate_content<Req: Serialize + ?Sized>(
        &self,
        model: &str,
        request: &Req,
    ) -> ResponseStream {
        let body = match serde_json::to_vec(request) {
            Ok(body) => body,
            Err(e) => {
                return Box::pin(stream::once(async move {
                    Err::<GenerateContentResponse, _>(Error::from(e))
                }))
            }
        };

        let builder = self
            .client
            .post(format!(
                "{}?alt=sse",
                self.model_url(model, "streamGenerateContent")
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .body(body);

        let connect = async move {
            let response = builder.send().await.map_err(|e| {
                tracing::error!("Failed to open Gemini stream: {}", e);
                e
            })?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await?;
                tracing::error!("Gemini API stream error (status {}): {}", status, error_text);
                return Err(Error::Api {
                    status: status.as_u16(),
                    message: error_text,
                });
            }

            Ok::<_, Error>(parse_sse_stream(Box::pin(response.bytes_stream())))
        };

        Box::pin(stream::once(connect).try_flatten())
    }
}
