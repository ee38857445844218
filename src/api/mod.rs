//! Axum HTTP surface, nested under `/api`.
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};
