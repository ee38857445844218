//! Prompt templating for roast generation.
pub mod templates;

pub use templates::{resolve_prompt, template_for};
