//! Prompt templating with a single `{name}` placeholder per category.
//!
//! The table is static and read-only; unknown categories resolve to the
//! `medium` template.
use crate::models::Category;

const PLACEHOLDER: &str = "{name}";

const LIGHT: &str = "You are a witty but gentle roast generator. Generate a playful, light-hearted roast for the name '{name}'. \n    Keep it fun, family-friendly, and harmless. Use wordplay and clever observations. Add appropriate emojis. \n    Keep it under 50 words and make it genuinely funny without being mean.";

const MEDIUM: &str = "You are a sassy roast generator. Generate a moderately sharp but still playful roast for the name '{name}'. \n    Be witty, use clever observations, and add some bite while keeping it entertaining. Add appropriate emojis. \n    Keep it under 50 words and make it burn just right - not too soft, not too harsh.";

const EXTRA_SPICY: &str = "You are a savage roast generator. Generate a hilariously brutal but creative roast for the name '{name}'. \n    Be ruthlessly witty, use sharp humor, and don't hold back - but keep it clever and creative, not just mean. \n    Add fire emojis. Keep it under 50 words and make it absolutely devastating in the funniest way possible.";

/// Raw template for a category, placeholder intact.
pub fn template_for(category: Category) -> &'static str {
    match category {
        Category::Light => LIGHT,
        Category::Medium => MEDIUM,
        Category::ExtraSpicy => EXTRA_SPICY,
    }
}

/// Select the template for `category` and substitute `name` into it.
///
/// The name is inserted verbatim. Only the template's own placeholder is
/// replaced, so a name containing `{name}` is not expanded again.
pub fn resolve_prompt(category: &str, name: &str) -> String {
    template_for(Category::resolve(category)).replacen(PLACEHOLDER, name, 1)
}
