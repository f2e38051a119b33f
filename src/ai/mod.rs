//! Generation backends for the chat session.
//!
//! The session only ever talks to [`GenerationService`]; the Gemini REST
//! client and the in-memory mock are the two implementations.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GeminiHttpClient};
pub use mock::MockGenerationClient;

use crate::ai::gemini::types::{Content, GenerateContentConfig, GenerateContentResponse};
use crate::Result;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Lazy, single-pass sequence of response fragments.
///
/// Each item is either a fragment or an error, never both.
pub type ResponseStream = Pin<Box<dyn Stream<Item = Result<GenerateContentResponse>> + Send>>;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Single-shot generation. Not assumed idempotent; never retried here.
    async fn generate(
        &self,
        model: &str,
        contents: &[Content],
        config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse>;

    /// Streaming generation. No I/O happens until the stream is first polled;
    /// dropping the stream releases the underlying connection.
    fn generate_stream(
        &self,
        model: &str,
        contents: &[Content],
        config: &GenerateContentConfig,
    ) -> ResponseStream;
}
