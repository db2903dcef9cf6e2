use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    config::ProviderConfig,
    error::ProviderError,
    models::template::{CreateTemplateResponse, TemplateDefinition, TemplatesResponse},
};

/// Template-management endpoints of the messaging provider.
#[async_trait]
pub trait TemplateProvider: Send + Sync {
    async fn create_template(
        &self,
        definition: &TemplateDefinition,
    ) -> Result<CreateTemplateResponse, ProviderError>;

    async fn list_templates(&self) -> Result<TemplatesResponse, ProviderError>;

    async fn find_templates_by_name(&self, name: &str) -> Result<TemplatesResponse, ProviderError>;
}

pub struct WhatsAppClient {
    http_client: Client,
    config: ProviderConfig,
}

impl WhatsAppClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            business_account_id = %config.business_account_id,
            "WhatsApp template client initialized"
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    fn templates_url(&self) -> String {
        format!("{}/message_templates", self.config.base_url)
    }

    fn account_templates_url(&self) -> String {
        format!(
            "{}/{}/message_templates",
            self.config.base_url, self.config.business_account_id
        )
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        let response = request
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ProviderError::Unavailable(format!("Failed to parse provider JSON: {}", e)));
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));

        warn!(status = status.as_u16(), "Provider rejected template request");

        Err(ProviderError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl TemplateProvider for WhatsAppClient {
    async fn create_template(
        &self,
        definition: &TemplateDefinition,
    ) -> Result<CreateTemplateResponse, ProviderError> {
        debug!(name = %definition.name, "Submitting template to provider");

        self.send(self.http_client.post(self.templates_url()).json(definition))
            .await
    }

    async fn list_templates(&self) -> Result<TemplatesResponse, ProviderError> {
        debug!("Listing templates from provider");

        self.send(self.http_client.get(self.templates_url())).await
    }

    async fn find_templates_by_name(&self, name: &str) -> Result<TemplatesResponse, ProviderError> {
        debug!(name, "Querying provider for template by name");

        self.send(
            self.http_client
                .get(self.account_templates_url())
                .query(&[("name", name)]),
        )
        .await
    }
}
