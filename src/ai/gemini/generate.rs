use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentConfig, GenerateContentResponse};
use crate::ai::{GenerationService, ResponseStream};
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'a Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [serde_json::Value]>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_sequences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
}

impl GenerationConfig {
    /// `None` when no sampling field is set, so the key is left out entirely.
    fn from_config(config: &GenerateContentConfig) -> Option<Self> {
        let generation = Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
            candidate_count: config.candidate_count,
            stop_sequences: config.stop_sequences.clone(),
            seed: config.seed,
            response_mime_type: config.response_mime_type.clone(),
            presence_penalty: config.presence_penalty,
            frequency_penalty: config.frequency_penalty,
        };
        (generation != Self::default()).then_some(generation)
    }
}

impl<'a> GenerateContentRequest<'a> {
    fn new(contents: &'a [Content], config: &'a GenerateContentConfig) -> Self {
        Self {
            contents,
            system_instruction: config.system_instruction.as_ref(),
            generation_config: GenerationConfig::from_config(config),
            tools: config.tools.as_deref(),
        }
    }
}

/// [`GenerationService`] backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    http: GeminiHttpClient,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, Duration::from_secs(30), client),
        }
    }

    pub fn from_http(http: GeminiHttpClient) -> Self {
        Self { http }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        contents: &[Content],
        config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        tracing::debug!(model, contents = contents.len(), "Sending generateContent request");
        let request = GenerateContentRequest::new(contents, config);
        self.http.generate_content(model, &request).await
    }

    fn generate_stream(
        &self,
        model: &str,
        contents: &[Content],
        config: &GenerateContentConfig,
    ) -> ResponseStream {
        tracing::debug!(
            model,
            contents = contents.len(),
            "Opening streamGenerateContent request"
        );
        let request = GenerateContentRequest::new(contents, config);
        self.http.stream_generate_content(model, &request)
    }
}
