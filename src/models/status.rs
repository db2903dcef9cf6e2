use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::models::template::CreateTemplateResponse;

/// What happened to the mirror after the provider accepted a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PersistenceOutcome {
    Persisted,
    Duplicate,
    Failed { reason: String },
}

impl PersistenceOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceOutcome::Persisted => "persisted",
            PersistenceOutcome::Duplicate => "duplicate",
            PersistenceOutcome::Failed { .. } => "failed",
        }
    }
}

impl Display for PersistenceOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PersistenceOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Result of a create: the provider's reply plus the mirror write outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub upstream: CreateTemplateResponse,
    pub persistence: PersistenceOutcome,
}

impl CreateOutcome {
    pub fn is_synced(&self) -> bool {
        self.persistence == PersistenceOutcome::Persisted
    }
}
