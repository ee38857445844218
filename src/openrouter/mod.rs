//! OpenRouter chat-completion client and wire types.
pub mod client;
pub mod fallback;
pub mod types;

pub use client::{CompletionClient, Generation};
