use std::env;

use anyhow::{Context, Result};
use chrono::Utc;
use template_service::{
    clients::{database::PostgresTemplateStore, memory::InMemoryTemplateStore, store::TemplateStore},
    error::StoreError,
    models::page::PageRequest,
};

use crate::common::record;

/// Run with `TEST_DATABASE_URL=... cargo test -- --ignored`.
async fn postgres_store() -> Result<PostgresTemplateStore> {
    let url = env::var("TEST_DATABASE_URL").context("TEST_DATABASE_URL must be set")?;

    Ok(PostgresTemplateStore::connect(&url, 2).await?)
}

fn unique_name(prefix: &str) -> String {
    format!(
        "{}_{}",
        prefix,
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

/// Test: Records written to PostgreSQL are read back by name
#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn test_postgres_save_and_find() -> Result<()> {
    let store = postgres_store().await?;

    let name = unique_name("pg_roundtrip");
    let written = record(&name);
    store.save(&written).await?;

    let found = store.find_by_name(&name).await?.expect("record stored");
    assert_eq!(found.name, name);
    assert_eq!(found.status, "PENDING");
    assert_eq!(found.structure, written.structure);

    assert!(store.find_by_name(&unique_name("pg_absent")).await?.is_none());

    Ok(())
}

/// Test: PostgreSQL enforces unique template names
#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn test_postgres_duplicate_name() -> Result<()> {
    let store = postgres_store().await?;

    let name = unique_name("pg_duplicate");
    store.save(&record(&name)).await?;

    let result = store.save(&record(&name)).await;

    assert!(matches!(result, Err(StoreError::Duplicate(n)) if n == name));

    Ok(())
}

/// Test: PostgreSQL name pages report the table total
#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn test_postgres_name_page_totals() -> Result<()> {
    let store = postgres_store().await?;

    store.save(&record(&unique_name("pg_page"))).await?;

    let page = store.find_all_names(PageRequest::new(0, 5)).await?;
    assert!(page.total >= 1);
    assert!(page.names.len() <= 5);

    let mut sorted = page.names.clone();
    sorted.sort();
    assert_eq!(page.names, sorted);

    Ok(())
}

/// Test: Out-of-range pages are empty but keep the total
#[tokio::test]
async fn test_memory_out_of_range_page() -> Result<()> {
    let store = InMemoryTemplateStore::new();
    for name in ["a_template", "b_template", "c_template"] {
        store.save(&record(name)).await?;
    }

    let page = store.find_all_names(PageRequest::new(50, 2)).await?;

    assert!(page.names.is_empty());
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert!(!page.has_next);

    Ok(())
}

/// Test: Huge page indexes don't overflow
#[tokio::test]
async fn test_memory_huge_page_index() -> Result<()> {
    let store = InMemoryTemplateStore::new();
    store.save(&record("only_template")).await?;

    let page = store
        .find_all_names(PageRequest::new(u32::MAX, 100))
        .await?;

    assert!(page.names.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
