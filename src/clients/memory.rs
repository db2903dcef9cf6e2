use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    clients::store::TemplateStore,
    error::StoreError,
    models::{
        page::{NamePage, PageRequest},
        record::TemplateRecord,
    },
};

/// Process-local mirror keyed by template name. Ordered so name pages come
/// out in lexical order, same as the Postgres store.
#[derive(Default)]
pub struct InMemoryTemplateStore {
    records: RwLock<BTreeMap<String, TemplateRecord>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn save(&self, record: &TemplateRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.name) {
            return Err(StoreError::Duplicate(record.name.clone()));
        }

        records.insert(record.name.clone(), record.clone());

        debug!(name = %record.name, "Template record stored in memory");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TemplateRecord>, StoreError> {
        Ok(self.records.read().await.get(name).cloned())
    }

    async fn find_all_names(&self, request: PageRequest) -> Result<NamePage, StoreError> {
        let records = self.records.read().await;
        let total = records.len() as u64;

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let names = records
            .keys()
            .skip(offset)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(NamePage::new(names, total, request))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
