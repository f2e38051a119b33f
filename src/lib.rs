//! Multi-turn chat sessions for Gemini models.
//!
//! A [`ChatSession`] records every turn of a conversation and sends only the
//! well-formed ones back to the model as context. Replies can be awaited
//! whole or consumed as a stream of fragments.

pub mod ai;
pub mod app;
pub mod chat;
pub mod error;
pub mod models;

pub use ai::gemini::types::{Content, GenerateContentConfig, GenerateContentResponse, Part, Role};
pub use chat::{ChatSession, ChatStream, Chats, Message};
pub use error::{Error, Result};
