use super::{GenerationService, ResponseStream};
use crate::ai::gemini::types::{Content, GenerateContentConfig, GenerateContentResponse};
use crate::Result;
use async_trait::async_trait;
use futures::stream;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted in-memory [`GenerationService`].
///
/// Queued replies are consumed in order; once a queue is empty the mock
/// answers with a single `"mock reply"` turn. Every call records the
/// contents it was given.
pub struct MockGenerationClient {
    responses: Arc<Mutex<VecDeque<Result<GenerateContentResponse>>>>,
    streams: Arc<Mutex<VecDeque<Vec<Result<GenerateContentResponse>>>>>,
    requests: Arc<Mutex<Vec<Vec<Content>>>>,
    delay: Option<Duration>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            streams: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn with_text_response(self, text: &str) -> Self {
        self.with_response(GenerateContentResponse::from_content(Content::model(text)))
    }

    pub fn with_error(self, error: crate::Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Makes every unary call wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues the items one `generate_stream` call will yield.
    pub fn with_stream(self, items: Vec<Result<GenerateContentResponse>>) -> Self {
        self.streams.lock().unwrap().push_back(items);
        self
    }

    pub fn with_text_stream(self, chunks: &[&str]) -> Self {
        let items = chunks
            .iter()
            .map(|c| Ok(GenerateContentResponse::from_content(Content::model(*c))))
            .collect();
        self.with_stream(items)
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Contents passed to each call, oldest first.
    pub fn recorded_requests(&self) -> Vec<Vec<Content>> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, contents: &[Content]) {
        self.requests.lock().unwrap().push(contents.to_vec());
    }

    fn default_response() -> GenerateContentResponse {
        GenerateContentResponse::from_content(Content::model("mock reply"))
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn generate(
        &self,
        _model: &str,
        contents: &[Content],
        _config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        self.record(contents);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Self::default_response()))
    }

    fn generate_stream(
        &self,
        _model: &str,
        contents: &[Content],
        _config: &GenerateContentConfig,
    ) -> ResponseStream {
        self.record(contents);
        let items = self
            .streams
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| vec![Ok(Self::default_response())]);
        Box::pin(stream::iter(items))
    }
}
