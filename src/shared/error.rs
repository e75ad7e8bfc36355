use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean run,
/// a run where some descriptors could not be parsed, and hard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every document was processed
    Success = 0,
    /// At least one descriptor failed to parse; the rest of the batch was ingested
    ParseFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, store error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ParseFailures => write!(f, "Parse Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for infrastructure concerns.
///
/// Descriptor-level parse failures are modeled separately by [`ParsingError`]
/// because they never abort a batch.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Descriptor not found: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a pom.xml file or a directory containing POM files")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to load graph store: {path}\nDetails: {details}\n\n💡 Hint: Delete or move the store file to start from an empty graph")]
    StoreReadError { path: PathBuf, details: String },

    #[error("Failed to persist graph store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the store directory exists and is writable")]
    StoreWriteError { path: PathBuf, details: String },

    /// Validation error for user-supplied options
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Failure to turn one raw document into a descriptor.
///
/// Always tagged with the label of the offending document so a batch
/// report can attribute it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("{source_label}: descriptor is not valid UTF-8")]
    InvalidEncoding { source_label: String },

    #[error("{source_label}: malformed XML: {details}")]
    Malformed {
        source_label: String,
        details: String,
    },

    #[error("{source_label}: root element is <{found}>, expected <project>")]
    MissingProjectRoot { source_label: String, found: String },

    #[error("{source_label}: descriptor is too large ({size} bytes, maximum {max} bytes)")]
    TooLarge {
        source_label: String,
        size: usize,
        max: usize,
    },
}

impl ParsingError {
    /// Label of the document that failed to parse
    pub fn source_label(&self) -> &str {
        match self {
            ParsingError::InvalidEncoding { source_label }
            | ParsingError::Malformed { source_label, .. }
            | ParsingError::MissingProjectRoot { source_label, .. }
            | ParsingError::TooLarge { source_label, .. } => source_label,
        }
    }
}
