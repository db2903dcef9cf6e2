//! Template synchronizer.
//!
//! Writes go to the provider first and are mirrored locally afterwards. Bulk
//! listings come straight from the provider; by-name lookups and name pages
//! are answered from the mirror only. The mirror is an append-only record of
//! creations made through this service, not a cache of provider state.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    clients::{provider::TemplateProvider, store::TemplateStore},
    error::{StoreError, SyncResult},
    mapper,
    models::{
        page::{NamePage, PageRequest},
        status::{CreateOutcome, PersistenceOutcome},
        template::{TemplateDefinition, TemplateDto, TemplatesResponse},
        validation::{validate_lookup_name, validate_page_request, validate_template_name},
    },
};

#[derive(Clone)]
pub struct TemplateSynchronizer {
    provider: Arc<dyn TemplateProvider>,
    store: Arc<dyn TemplateStore>,
}

impl TemplateSynchronizer {
    pub fn new(provider: Arc<dyn TemplateProvider>, store: Arc<dyn TemplateStore>) -> Self {
        Self { provider, store }
    }

    pub fn store(&self) -> Arc<dyn TemplateStore> {
        Arc::clone(&self.store)
    }

    /// Submits the template upstream, then mirrors it. Provider failures are
    /// returned as errors and nothing is written. Once the provider has
    /// accepted, mirror failures only show up in the persistence outcome.
    pub async fn create(&self, definition: TemplateDefinition) -> SyncResult<CreateOutcome> {
        validate_template_name(&definition.name)?;

        let upstream = self.provider.create_template(&definition).await?;

        info!(
            name = %definition.name,
            status = upstream.status.as_deref().unwrap_or("<none>"),
            "Template accepted by provider"
        );

        let persistence = match mapper::to_record(&definition, &upstream) {
            Ok(record) => match self.store.save(&record).await {
                Ok(()) => PersistenceOutcome::Persisted,
                Err(StoreError::Duplicate(name)) => {
                    warn!(name = %name, "Template already mirrored, keeping existing record");
                    PersistenceOutcome::Duplicate
                }
                Err(e) => {
                    error!(
                        name = %definition.name,
                        error = %e,
                        "Failed to mirror template created upstream"
                    );
                    PersistenceOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            },
            Err(e) => {
                error!(
                    name = %definition.name,
                    error = %e,
                    "Provider create response could not be mirrored"
                );
                PersistenceOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(CreateOutcome {
            upstream,
            persistence,
        })
    }

    /// Full provider listing, cursors included. The mirror is not consulted.
    pub async fn list_all(&self) -> SyncResult<TemplatesResponse> {
        Ok(self.provider.list_templates().await?)
    }

    /// Mirror-only lookup. `None` means this service never mirrored `name`,
    /// whether or not the provider knows it.
    pub async fn get_by_name(&self, name: &str) -> SyncResult<Option<TemplateDto>> {
        validate_lookup_name(name)?;

        let Some(record) = self.store.find_by_name(name).await? else {
            return Ok(None);
        };

        let projection = mapper::to_response_projection(std::slice::from_ref(&record))?;
        Ok(projection.data.into_iter().next())
    }

    pub async fn list_names(&self, request: PageRequest) -> SyncResult<NamePage> {
        validate_page_request(&request)?;

        Ok(self.store.find_all_names(request).await?)
    }

    /// Asks the provider directly. Never used as a fallback for
    /// [`Self::get_by_name`].
    pub async fn fetch_from_provider(&self, name: &str) -> SyncResult<Option<TemplateDto>> {
        validate_lookup_name(name)?;

        let response = self.provider.find_templates_by_name(name).await?;
        Ok(response.data.into_iter().next())
    }
}
