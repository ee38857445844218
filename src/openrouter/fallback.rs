//! Canned roasts used when the live provider cannot answer.
use crate::models::Category;

/// Fallback roast for `category` (medium when unknown) addressed to `name`.
pub fn fallback_roast(category: &str, name: &str) -> String {
    match Category::resolve(category) {
        Category::Light => {
            format!("Hey {}, you're like a human participation trophy - everyone gets one! 🏆", name)
        }
        Category::Medium => format!("{}, you're so unique, just like everyone else! ✨", name),
        Category::ExtraSpicy => {
            format!("{}, I'd roast you harder, but my mom said not to burn trash! 🔥", name)
        }
    }
}
