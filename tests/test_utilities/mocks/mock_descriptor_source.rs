use jdep_analyzer::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock DescriptorSource serving in-memory documents in insertion order
#[derive(Default, Clone)]
pub struct MockDescriptorSource {
    documents: Vec<SourceDocument>,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockDescriptorSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, label: &str, content: &str) -> Self {
        self.documents
            .push(SourceDocument::new(label, content.as_bytes().to_vec()));
        self
    }

    pub fn with_bytes(mut self, label: &str, bytes: Vec<u8>) -> Self {
        self.documents.push(SourceDocument::new(label, bytes));
        self
    }
}

impl DescriptorSource for MockDescriptorSource {
    fn collect_documents(&self, inputs: &[PathBuf]) -> Result<Vec<SourceDocument>> {
        self.requested.lock().unwrap().extend(inputs.iter().cloned());
        Ok(self.documents.clone())
    }
}
