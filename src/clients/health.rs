use std::{collections::HashMap, sync::Arc, time::Instant};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::store::TemplateStore,
    models::health::{ComponentHealth, HealthCheckResponse, HealthStatus},
};

pub struct HealthChecker {
    store: Arc<dyn TemplateStore>,
}

impl HealthChecker {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        checks.insert("template_mirror".to_string(), self.check_store().await);

        let status = if checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy)
        {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            checks,
        }
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();
        let backend = self.store.backend_name();

        match self.store.health_check().await {
            Ok(()) => {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(backend, response_time_ms = elapsed, "Template mirror health check passed");
                ComponentHealth::healthy(elapsed).with_backend(backend)
            }
            Err(e) => {
                warn!(backend, error = %e, "Template mirror health check failed");
                ComponentHealth::unhealthy(e.to_string()).with_backend(backend)
            }
        }
    }
}
