use std::path::PathBuf;

/// IngestRequest - Request DTO for the ingestion use case
#[derive(Debug, Clone)]
pub struct IngestRequest {
    /// Descriptor files or directories to scan
    pub inputs: Vec<PathBuf>,
}

impl IngestRequest {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }
}
