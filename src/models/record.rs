use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Local mirror entry. `name` is the primary key; `structure` holds the
/// serialized template so by-name reads never need the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub status: String,
    pub structure: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl TemplateRecord {
    pub fn new(name: String, status: String, structure: JsonValue) -> Self {
        Self {
            name,
            status,
            structure,
            created_at: Utc::now(),
        }
    }
}
