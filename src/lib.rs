//! Roast generation API library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `openrouter`: Chat-completion client with fallback roasts.
//! - `prompt`: Category prompt templates with `{name}` substitution.
//! - `store`: Persistence for roast records and status checks.
//! - `models`: Request/response and record types.
//! - `utils`: Static helpers such as the random name list.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `CompletionClient`,
//! `Generation`, and `RoastStore`.
pub mod api;
pub mod openrouter;
pub mod prompt;
pub mod store;
pub mod models;
pub mod utils;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use openrouter::{CompletionClient, Generation};
pub use store::RoastStore;
