use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Template as submitted by a client for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    pub language: String,
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_format: Option<String>,

    #[serde(default)]
    pub components: Vec<ComponentDto>,
}

/// Template as the provider describes it. Fields this service doesn't model
/// land in `extra` so provider listings pass through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_format: Option<String>,

    #[serde(default)]
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub components: Vec<ComponentDto>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDto {
    /// BODY, HEADER, FOOTER, BUTTONS
    #[serde(rename = "type")]
    pub component_type: String,

    /// TEXT, IMAGE, VIDEO, DOCUMENT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ButtonDto>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<TemplateExampleDto>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDto {
    /// QUICK_REPLY, URL, PHONE_NUMBER, CATALOG, OTP
    #[serde(rename = "type")]
    pub button_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExampleDto {
    #[serde(rename = "header_text", default, skip_serializing_if = "Option::is_none")]
    pub header_texts: Option<Vec<String>>,

    #[serde(rename = "body_text", default, skip_serializing_if = "Option::is_none")]
    pub body_texts: Option<Vec<Vec<String>>>,

    #[serde(rename = "header_handle", default, skip_serializing_if = "Option::is_none")]
    pub header_handles: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bulk listing as returned by the provider. Cursor paginated; the cursors
/// are opaque and can't be produced locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatesResponse {
    #[serde(default)]
    pub data: Vec<TemplateDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<Cursors>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Provider reply to a create call. Fields beyond the known ones are kept
/// so the reply can be handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
