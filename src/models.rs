//! Request, response and record types shared by the API, the store and the CLI.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tone selector for a roast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Light,
    Medium,
    ExtraSpicy,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Light, Category::Medium, Category::ExtraSpicy];

    /// Exact-match lookup of a wire tag. Anything unknown is treated as `Medium`.
    pub fn resolve(tag: &str) -> Self {
        match tag {
            "light" => Category::Light,
            "extra_spicy" => Category::ExtraSpicy,
            _ => Category::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Light => "light",
            Category::Medium => "medium",
            Category::ExtraSpicy => "extra_spicy",
        }
    }
}

fn default_category() -> String {
    Category::Medium.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoastRequest {
    pub name: String,
    /// Kept as the raw caller string so unknown tags can be echoed back.
    #[serde(default = "default_category")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
    pub name: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl RoastResponse {
    pub fn new(roast: String, name: String, category: String) -> Self {
        RoastResponse { roast, name, category, timestamp: Utc::now() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        StatusCheck {
            id: Uuid::new_v4().to_string(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}
