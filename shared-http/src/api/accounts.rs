use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flexible;

/// A customer of the token API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "flexible::text")]
    pub customer_id: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    /// Set while the customer is deactivated.
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// First ten characters of the token, or `vazio` when there is none.
    pub fn token_preview(&self) -> String {
        match self.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => format!("{}...", token.chars().take(10).collect::<String>()),
            None => "vazio".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub data: Vec<Customer>,
    #[serde(default = "first_page")]
    pub last_page: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for CustomerPage {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            last_page: first_page(),
        }
    }
}

impl CustomerPage {
    /// Parses a listing body; anything without an array `data` is an empty page.
    pub fn from_value(body: Value) -> Self {
        let last_page = body
            .get("last_page")
            .and_then(Value::as_u64)
            .map(|p| p.max(1) as u32)
            .unwrap_or_else(first_page);
        let data = match body.get("data") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        };
        Self { data, last_page }
    }
}
