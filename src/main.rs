use std::sync::Arc;

use anyhow::{Error, Result};
use template_service::{
    api::{AppState, run_api_server},
    clients::{
        database::PostgresTemplateStore, memory::InMemoryTemplateStore, provider::WhatsAppClient,
        store::TemplateStore,
    },
    config::Config,
    sync::TemplateSynchronizer,
    utils::init_tracing,
};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing();

    let provider = Arc::new(WhatsAppClient::new(config.provider_config())?);

    let store: Arc<dyn TemplateStore> = match &config.database_url {
        Some(url) => {
            Arc::new(PostgresTemplateStore::connect(url, config.database_max_connections).await?)
        }
        None => {
            warn!("DATABASE_URL not set, template mirror is in-memory and lost on restart");
            Arc::new(InMemoryTemplateStore::new())
        }
    };

    let state = Arc::new(AppState::new(TemplateSynchronizer::new(provider, store)));

    run_api_server(config.server_port, state).await
}
