use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{debug, error, info};

use crate::{
    clients::store::TemplateStore,
    error::StoreError,
    models::{
        page::{NamePage, PageRequest},
        record::TemplateRecord,
    },
    utils::mask_database_url,
};

const CREATE_TEMPLATE_RECORDS: &str = r#"
    CREATE TABLE IF NOT EXISTS template_records (
        name TEXT PRIMARY KEY,
        status TEXT NOT NULL,
        structure JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

type RecordRow = (String, String, serde_json::Value, DateTime<Utc>);

pub struct PostgresTemplateStore {
    pool: PgPool,
}

impl PostgresTemplateStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        info!(database_url = %mask_database_url(database_url), "Connecting to PostgreSQL database");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to database: {}", e)))?;

        info!("PostgreSQL connection established");

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TEMPLATE_RECORDS)
            .execute(&self.pool)
            .await?;

        debug!("template_records table ready");
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for PostgresTemplateStore {
    async fn save(&self, record: &TemplateRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO template_records (name, status, structure, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&record.name)
        .bind(&record.status)
        .bind(&record.structure)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(record.name.clone())
            }
            _ => {
                error!(
                    error = %e,
                    name = %record.name,
                    "Failed to write template record to database"
                );
                StoreError::Backend(format!("Database write failed: {}", e))
            }
        })?;

        debug!(name = %record.name, status = %record.status, "Template record written to database");

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TemplateRecord>, StoreError> {
        let row: Option<RecordRow> = sqlx::query_as(
            r#"
            SELECT name, status, structure, created_at
            FROM template_records
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(name, status, structure, created_at)| TemplateRecord {
            name,
            status,
            structure,
            created_at,
        }))
    }

    async fn find_all_names(&self, request: PageRequest) -> Result<NamePage, StoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM template_records")
            .fetch_one(&self.pool)
            .await?;

        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT name FROM template_records
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.size as i64)
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(NamePage::new(names, total.max(0) as u64, request))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Database health check failed: {}", e)))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
