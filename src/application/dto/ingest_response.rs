use crate::dependency_graph::domain::Gav;
use serde::Serialize;
use uuid::Uuid;

/// Outcome for one document of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Parsed and resolved to this component
    Parsed { gav: Gav, dependencies: usize },
    /// Rejected by the parser; the rest of the batch was still ingested
    Failed { error: String },
    /// Empty document, not parsed
    Skipped { reason: String },
}

/// Per-document entry of an [`IngestResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub label: String,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

/// IngestResponse - Response DTO from the ingestion use case
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub batch_id: Uuid,
    /// RFC 3339 timestamp
    pub ingested_at: String,
    /// One entry per collected document, in collection order
    pub documents: Vec<DocumentReport>,
    /// Parse and resolution warnings, formatted for users
    pub warnings: Vec<String>,
    pub added_components: usize,
    pub added_edges: usize,
    /// Store revision after this batch
    pub revision: u64,
}

impl IngestResponse {
    pub fn parsed_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.status, DocumentStatus::Parsed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.status, DocumentStatus::Failed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}
