//! wiremock helpers shared by the Gemini client tests.

use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockBuilder};

pub const GENERATE_CONTENT_PATH_REGEX: &str = r"^/v1beta/models/[^/]+:generateContent$";
pub const STREAM_GENERATE_CONTENT_PATH_REGEX: &str =
    r"^/v1beta/models/[^/]+:streamGenerateContent$";

pub fn post_path_regex(regex: &str) -> MockBuilder {
    Mock::given(method("POST")).and(path_regex(regex))
}

/// A `generateContent` body whose single candidate says `text`.
pub fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            }
        }]
    })
}

/// Frames each fragment as one SSE `data:` event.
pub fn sse_body(fragments: &[serde_json::Value]) -> String {
    fragments
        .iter()
        .map(|f| format!("data: {}\r\n\r\n", f))
        .collect()
}
