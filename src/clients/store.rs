use async_trait::async_trait;

use crate::{
    error::StoreError,
    models::{
        page::{NamePage, PageRequest},
        record::TemplateRecord,
    },
};

/// Local mirror of templates created through this service.
///
/// Implementations must enforce name uniqueness: saving a second record
/// under an existing name fails with [`StoreError::Duplicate`] and leaves the
/// first record untouched.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn save(&self, record: &TemplateRecord) -> Result<(), StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<TemplateRecord>, StoreError>;

    /// Names in lexical order, sliced by offset pagination.
    async fn find_all_names(&self, request: PageRequest) -> Result<NamePage, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    fn backend_name(&self) -> &'static str;
}
