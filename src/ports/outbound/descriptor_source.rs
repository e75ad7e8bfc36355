use crate::shared::Result;
use std::path::PathBuf;

/// One raw descriptor document and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Human-readable origin (usually the file path), used in every diagnostic
    pub label: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }
}

/// DescriptorSource port for collecting raw descriptor documents
///
/// This port abstracts where POM documents come from (file system, archives,
/// in-memory fixtures) so the ingestion use case only deals with bytes.
pub trait DescriptorSource {
    /// Collects every descriptor document reachable from the given inputs
    ///
    /// # Arguments
    /// * `inputs` - Files or directories to collect from
    ///
    /// # Returns
    /// Documents in a stable order, without duplicates
    ///
    /// # Errors
    /// Returns an error if:
    /// - An input does not exist
    /// - An input is a symbolic link or exceeds the size limit
    /// - A document cannot be read
    fn collect_documents(&self, inputs: &[PathBuf]) -> Result<Vec<SourceDocument>>;
}
