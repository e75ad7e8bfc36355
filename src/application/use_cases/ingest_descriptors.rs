use crate::application::dto::{DocumentReport, DocumentStatus, IngestRequest, IngestResponse};
use crate::dependency_graph::domain::RawDescriptor;
use crate::dependency_graph::services::{DescriptorParser, IdentityResolver};
use crate::ports::outbound::{DescriptorSource, GraphStore, ProgressReporter, SourceDocument};
use crate::shared::error::ParsingError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use uuid::Uuid;

/// Maximum number of documents parsed at the same time
const MAX_CONCURRENT_PARSES: usize = 8;

/// Parser result for one document, before resolution
enum ParsedDocument {
    Parsed(RawDescriptor),
    Failed(ParsingError),
    Skipped(String),
}

/// IngestDescriptorsUseCase - Folds a batch of descriptor documents into the store
///
/// Documents are parsed concurrently; resolution starts only once the whole
/// batch is parsed, so parents may appear anywhere in the batch. A document
/// that fails to parse is reported and skipped, never aborting the batch.
///
/// # Type Parameters
/// * `DS` - DescriptorSource implementation
/// * `GS` - GraphStore implementation
/// * `PR` - ProgressReporter implementation
pub struct IngestDescriptorsUseCase<DS, GS, PR> {
    descriptor_source: DS,
    graph_store: Arc<GS>,
    progress_reporter: PR,
}

impl<DS, GS, PR> IngestDescriptorsUseCase<DS, GS, PR>
where
    DS: DescriptorSource,
    GS: GraphStore,
    PR: ProgressReporter,
{
    /// Creates a new IngestDescriptorsUseCase with injected dependencies
    pub fn new(descriptor_source: DS, graph_store: Arc<GS>, progress_reporter: PR) -> Self {
        Self {
            descriptor_source,
            graph_store,
            progress_reporter,
        }
    }

    /// Executes the ingestion use case
    ///
    /// # Errors
    /// Returns an error if documents cannot be collected or the store cannot
    /// be read or persisted. Parse failures are reported per document instead.
    pub async fn execute(&self, request: IngestRequest) -> Result<IngestResponse> {
        let batch_id = Uuid::new_v4();
        let ingested_at = chrono::Utc::now().to_rfc3339();

        self.progress_reporter.report(&format!(
            "📖 Collecting descriptors from {} input(s)...",
            request.inputs.len()
        ));
        let documents = self.descriptor_source.collect_documents(&request.inputs)?;
        if documents.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No descriptor documents (pom.xml or *.pom) were found.");
        } else {
            self.progress_reporter
                .report(&format!("✅ Found {} descriptor(s)", documents.len()));
        }

        let labels: Vec<String> = documents.iter().map(|d| d.label.clone()).collect();
        let parsed = self.parse_documents(documents).await?;

        let mut warnings = Vec::new();
        let mut descriptors = Vec::new();
        let mut descriptor_slots = Vec::new();
        let mut statuses: Vec<Option<DocumentStatus>> = Vec::with_capacity(labels.len());
        for (index, document) in parsed.into_iter().enumerate() {
            let status = match document {
                ParsedDocument::Parsed(descriptor) => {
                    for warning in &descriptor.warnings {
                        self.progress_reporter
                            .report_error(&format!("⚠️  Warning: {}", warning));
                        warnings.push(warning.clone());
                    }
                    descriptor_slots.push(index);
                    descriptors.push(descriptor);
                    None
                }
                ParsedDocument::Failed(error) => {
                    tracing::warn!(source = error.source_label(), "{}", error);
                    self.progress_reporter
                        .report_error(&format!("❌ Skipped {}", error));
                    Some(DocumentStatus::Failed {
                        error: error.to_string(),
                    })
                }
                ParsedDocument::Skipped(reason) => {
                    let message = format!("{}: {}", labels[index], reason);
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: {}", message));
                    warnings.push(message);
                    Some(DocumentStatus::Skipped { reason })
                }
            };
            statuses.push(status);
        }

        let snapshot = self.graph_store.snapshot().await?;
        let outcome = IdentityResolver::resolve_batch(&descriptors, snapshot.as_ref());
        for warning in &outcome.warnings {
            let message = warning.to_string();
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", message));
            warnings.push(message);
        }

        let summary = self.graph_store.ingest(&outcome.descriptors).await?;

        for (slot, resolved) in descriptor_slots.iter().zip(&outcome.descriptors) {
            statuses[*slot] = Some(DocumentStatus::Parsed {
                gav: resolved.gav.clone(),
                dependencies: resolved.dependencies.len(),
            });
        }
        let documents: Vec<DocumentReport> = labels
            .into_iter()
            .zip(statuses)
            .filter_map(|(label, status)| status.map(|status| DocumentReport { label, status }))
            .collect();

        self.progress_reporter.report_completion(&format!(
            "✅ Ingested {} descriptor(s): +{} component(s), +{} edge(s) (revision {})",
            outcome.descriptors.len(),
            summary.added_components,
            summary.added_edges,
            summary.revision
        ));
        tracing::info!(
            %batch_id,
            documents = documents.len(),
            added_components = summary.added_components,
            added_edges = summary.added_edges,
            revision = summary.revision,
            "ingested batch"
        );

        Ok(IngestResponse {
            batch_id,
            ingested_at,
            documents,
            warnings,
            added_components: summary.added_components,
            added_edges: summary.added_edges,
            revision: summary.revision,
        })
    }

    /// Parses every document on the blocking pool, keeping input order
    async fn parse_documents(&self, documents: Vec<SourceDocument>) -> Result<Vec<ParsedDocument>> {
        let total = documents.len();
        let mut results: Vec<Option<ParsedDocument>> = (0..total).map(|_| None).collect();

        let mut parses = stream::iter(documents.into_iter().enumerate())
            .map(|(index, document)| async move {
                let parsed = tokio::task::spawn_blocking(move || parse_document(document)).await;
                (index, parsed)
            })
            .buffer_unordered(MAX_CONCURRENT_PARSES);

        let mut done = 0;
        while let Some((index, parsed)) = parses.next().await {
            let parsed = parsed
                .map_err(|e| anyhow::anyhow!("Descriptor parsing task failed: {}", e))?;
            results[index] = Some(parsed);
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("parsing descriptors"));
        }

        Ok(results.into_iter().flatten().collect())
    }
}

fn parse_document(document: SourceDocument) -> ParsedDocument {
    if document.bytes.iter().all(u8::is_ascii_whitespace) {
        return ParsedDocument::Skipped("document is empty".to_string());
    }
    match DescriptorParser::parse(&document.bytes, &document.label) {
        Ok(descriptor) => ParsedDocument::Parsed(descriptor),
        Err(error) => ParsedDocument::Failed(error),
    }
}
