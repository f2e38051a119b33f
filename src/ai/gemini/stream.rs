//! Server-sent event decoding for `streamGenerateContent?alt=sse`.
//!
//! Each event's `data` payload is one complete JSON `GenerateContentResponse`:
//!
//! ```text
//! data: {"candidates":[{"content":{"role":"model","parts":[{"text":"Hel"}]}}]}
//!
//! data: {"candidates":[{"content":{"role":"model","parts":[{"text":"lo"}]}}]}
//!
//! ```
//!
//! A payload may also be pretty-printed over several lines after `data:`;
//! every following line up to the blank line belongs to it.

use super::types::GenerateContentResponse;
use crate::ai::ResponseStream;
use crate::{Error, Result};
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::VecDeque;

/// Incremental SSE decoder that only keeps `data` fields.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk of bytes, returning the payloads of every event it completed.
    ///
    /// Lines may end in `\n`, `\r` or `\r\n`, and may be split across chunks.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();

        while let Some((end, ending_len)) = find_line_end(&self.buffer) {
            // A lone trailing '\r' may be the first half of "\r\n".
            if ending_len == 1 && self.buffer[end] == b'\r' && end + 1 == self.buffer.len() {
                break;
            }
            let line: Vec<u8> = self.buffer.drain(..end + ending_len).take(end).collect();
            if let Some(event) = self.decode_line(&String::from_utf8_lossy(&line)) {
                events.push(event);
            }
        }

        events
    }

    /// Flushes whatever is left once the byte stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            let line = String::from_utf8_lossy(&rest);
            let line = line.trim_end_matches('\r');
            if let Some(event) = self.decode_line(line) {
                return Some(event);
            }
        }
        self.decode_line("")
    }

    fn decode_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            if self.data.is_empty() {
                return None;
            }
            let event = self.data.join("\n");
            self.data.clear();
            return Some(event);
        }

        // Comment
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "data" => self.data.push(value.to_string()),
            "event" | "id" | "retry" => {}
            // Payloads pretty-printed over several lines after `data:`.
            _ if !self.data.is_empty() => self.data.push(line.to_string()),
            _ => {}
        }
        None
    }
}

/// Returns `(line_end, ending_len)` for the first line terminator in `buffer`.
fn find_line_end(buffer: &[u8]) -> Option<(usize, usize)> {
    let pos = buffer.iter().position(|&b| b == b'\n' || b == b'\r')?;
    if buffer[pos] == b'\r' && buffer.get(pos + 1) == Some(&b'\n') {
        Some((pos, 2))
    } else {
        Some((pos, 1))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

/// Decodes one event payload into a response fragment.
///
/// Returns `None` for payloads that carry nothing (`[DONE]`, whitespace).
pub fn parse_event(data: &str) -> Option<Result<GenerateContentResponse>> {
    let data = data.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(data) {
        tracing::error!(
            "Gemini stream error (code {}): {}",
            envelope.error.code,
            envelope.error.message
        );
        return Some(Err(Error::Api {
            status: envelope.error.code,
            message: envelope.error.message,
        }));
    }

    Some(serde_json::from_str(data).map_err(|e| {
        tracing::error!("Failed to parse Gemini stream event: {}\nData: {}", e, data);
        Error::Parse(format!("invalid stream event: {}", e))
    }))
}

struct SseState<S> {
    bytes: S,
    decoder: SseDecoder,
    pending: VecDeque<String>,
    exhausted: bool,
}

/// Turns an SSE byte stream into a stream of response fragments.
///
/// Transport errors from the byte stream are forwarded as items; the stream
/// keeps going only as long as the underlying byte stream does.
pub fn parse_sse_stream<S>(bytes: S) -> ResponseStream
where
    S: Stream<Item = std::result::Result<Bytes, reqwest::Error>> + Send + Unpin + 'static,
{
    let state = SseState {
        bytes,
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        exhausted: false,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        loop {
            while let Some(event) = state.pending.pop_front() {
                if let Some(item) = parse_event(&event) {
                    return Some((item, state));
                }
            }

            if state.exhausted {
                return None;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    let events = state.decoder.push(&chunk);
                    state.pending.extend(events);
                }
                Some(Err(e)) => {
                    tracing::error!("Gemini stream transport error: {}", e);
                    return Some((Err(Error::Http(e)), state));
                }
                None => {
                    state.exhausted = true;
                    state.pending.extend(state.decoder.finish());
                }
            }
        }
    }))
}
