use crate::dependency_graph::domain::{NoPriorComponents, ResolvedDescriptor};
use crate::dependency_graph::services::{DescriptorParser, DescriptorTree, IdentityResolver};
use crate::ports::outbound::{DescriptorSource, ProgressReporter};
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::path::PathBuf;

/// One inspected descriptor: its declared tree and resolved identity
#[derive(Debug, Clone)]
pub struct InspectedDescriptor {
    pub label: String,
    /// Declared coordinates and direct dependencies, as written
    pub tree: String,
    pub resolved: ResolvedDescriptor,
}

/// InspectDescriptorUseCase - Shows the direct dependencies of descriptors
/// without touching the graph store
///
/// Every document is resolved on its own, so only its own properties and
/// built-ins are available for placeholders.
pub struct InspectDescriptorUseCase<DS, PR> {
    descriptor_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> InspectDescriptorUseCase<DS, PR>
where
    DS: DescriptorSource,
    PR: ProgressReporter,
{
    pub fn new(descriptor_source: DS, progress_reporter: PR) -> Self {
        Self {
            descriptor_source,
            progress_reporter,
        }
    }

    /// # Errors
    /// Returns an error if no document is found or one fails to parse
    pub fn execute(&self, input: PathBuf) -> Result<Vec<InspectedDescriptor>> {
        let documents = self
            .descriptor_source
            .collect_documents(std::slice::from_ref(&input))?;
        if documents.is_empty() {
            return Err(AnalyzerError::DescriptorNotFound {
                path: input,
                suggestion: "The directory contains no pom.xml or *.pom files".to_string(),
            }
            .into());
        }

        let mut inspected = Vec::with_capacity(documents.len());
        for document in documents {
            self.progress_reporter
                .report(&format!("📖 Reading {}", document.label));
            let descriptor = DescriptorParser::parse(&document.bytes, &document.label)?;
            let tree = DescriptorTree::render(&descriptor);

            let outcome =
                IdentityResolver::resolve_batch(std::slice::from_ref(&descriptor), &NoPriorComponents);
            for warning in descriptor.warnings.iter().map(ToString::to_string).chain(
                outcome.warnings.iter().map(ToString::to_string),
            ) {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", warning));
            }

            let Some(resolved) = outcome.descriptors.into_iter().next() else {
                continue;
            };
            inspected.push(InspectedDescriptor {
                label: document.label,
                tree,
                resolved,
            });
        }

        Ok(inspected)
    }
}
