//! `OpenAI` chat-completions client - the reasoning service collaborator.
//!
//! The intent parser submits a system prompt, the user query and a strict
//! JSON schema, and receives a structured intent document (or an error /
//! timeout, which the parser degrades from). Nothing in this module knows
//! about intents; it speaks the chat-completions wire format only.

mod client;
mod error;
mod types;

pub use client::ReasoningClient;
pub use error::OpenAiError;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, JsonSchemaFormat, ResponseFormat,
};
