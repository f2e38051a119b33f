//! Conversation state: validation, curation and the session itself.

pub mod curate;
pub mod session;
pub mod validate;

pub use curate::extract_curated_history;
pub use session::{ChatSession, ChatStream, Chats, Message};
pub use validate::{is_valid_content, is_valid_response};
