use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, json};
use template_service::{
    clients::{
        provider::WhatsAppClient,
        store::TemplateStore,
    },
    config::ProviderConfig,
    error::StoreError,
    models::{
        page::{NamePage, PageRequest},
        record::TemplateRecord,
        template::{ComponentDto, TemplateDefinition},
    },
    sync::TemplateSynchronizer,
};
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "test-token";
pub const ACCOUNT_ID: &str = "1029384756";

pub fn provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        base_url: base_url.to_string(),
        access_token: ACCESS_TOKEN.to_string(),
        business_account_id: ACCOUNT_ID.to_string(),
        timeout: None,
    }
}

pub fn whatsapp_client(server: &MockServer) -> Arc<WhatsAppClient> {
    Arc::new(WhatsAppClient::new(provider_config(&server.uri())).expect("client builds"))
}

pub fn synchronizer(server: &MockServer, store: Arc<dyn TemplateStore>) -> TemplateSynchronizer {
    TemplateSynchronizer::new(whatsapp_client(server), store)
}

pub fn account_templates_path() -> String {
    format!("/{}/message_templates", ACCOUNT_ID)
}

pub fn order_confirmation() -> TemplateDefinition {
    TemplateDefinition {
        name: "order_confirmation".to_string(),
        language: "en_US".to_string(),
        category: "UTILITY".to_string(),
        parameter_format: None,
        components: vec![ComponentDto {
            component_type: "BODY".to_string(),
            format: None,
            text: Some("Your order {{1}} has shipped".to_string()),
            buttons: None,
            example: None,
            extra: Map::new(),
        }],
    }
}

pub fn pending_response() -> serde_json::Value {
    json!({
        "id": "594425479261596",
        "status": "PENDING",
        "category": "UTILITY"
    })
}

pub fn listing_response() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "111",
                "name": "order_confirmation",
                "parameter_format": "POSITIONAL",
                "language": "en_US",
                "status": "APPROVED",
                "category": "UTILITY",
                "components": [
                    {"type": "BODY", "text": "Your order {{1}} has shipped"}
                ]
            },
            {
                "id": "222",
                "name": "summer_sale",
                "parameter_format": "NAMED",
                "language": "en_US",
                "status": "REJECTED",
                "category": "MARKETING",
                "sub_category": "CUSTOM",
                "rejected_reason": "PROMOTIONAL",
                "quality_score": {"score": "UNKNOWN", "date": 1718000000},
                "components": [
                    {"type": "HEADER", "format": "IMAGE", "example": {"header_handle": ["4::aW1hZ2U="]}},
                    {"type": "BODY", "text": "Hi {{first_name}}", "example": {
                        "body_text_named_params": [{"param_name": "first_name", "example": "Ana"}]
                    }},
                    {"type": "BUTTONS", "buttons": [{
                        "type": "URL",
                        "text": "Shop",
                        "url": "https://example.com/{{1}}",
                        "example": ["https://example.com/summer"]
                    }]}
                ]
            },
            {
                "id": "333",
                "name": "login_code",
                "language": "en_US",
                "status": "APPROVED",
                "category": "AUTHENTICATION",
                "components": [
                    {"type": "BODY", "add_security_recommendation": true},
                    {"type": "FOOTER", "code_expiration_minutes": 10},
                    {"type": "BUTTONS", "buttons": [{"type": "OTP", "text": "Copy Code", "otp_type": "COPY_CODE"}]}
                ]
            }
        ],
        "paging": {
            "cursors": {"before": "QVFIUmxtY", "after": "QVFIUkZAf"},
            "next": "https://graph.example.com/v21.0/1029384756/message_templates?after=QVFIUkZAf"
        }
    })
}

pub fn record(name: &str) -> TemplateRecord {
    TemplateRecord::new(
        name.to_string(),
        "PENDING".to_string(),
        json!({"name": name, "language": "en_US", "category": "UTILITY", "components": []}),
    )
}

/// Mirror whose every call fails, for exercising persistence failures.
pub struct FailingStore;

#[async_trait]
impl TemplateStore for FailingStore {
    async fn save(&self, _record: &TemplateRecord) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<TemplateRecord>, StoreError> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn find_all_names(&self, _request: PageRequest) -> Result<NamePage, StoreError> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
