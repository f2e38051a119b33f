//! Whether a turn or a response can be sent back to the model as context.

use crate::ai::gemini::types::{Content, GenerateContentResponse};

/// A content is valid when it has at least one part and every part is
/// meaningful. A single empty part invalidates the whole turn.
pub fn is_valid_content(content: Option<&Content>) -> bool {
    match content {
        Some(content) => {
            !content.parts.is_empty() && content.parts.iter().all(|part| part.is_meaningful())
        }
        None => false,
    }
}

/// Only the first candidate is looked at.
pub fn is_valid_response(response: Option<&GenerateContentResponse>) -> bool {
    response
        .and_then(|r| r.candidates.first())
        .is_some_and(|candidate| is_valid_content(candidate.content.as_ref()))
}

impl Content {
    pub fn is_valid(&self) -> bool {
        is_valid_content(Some(self))
    }
}

impl GenerateContentResponse {
    pub fn is_valid(&self) -> bool {
        is_valid_response(Some(self))
    }
}
