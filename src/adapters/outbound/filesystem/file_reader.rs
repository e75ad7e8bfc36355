use crate::ports::outbound::{DescriptorSource, SourceDocument};
use crate::shared::error::AnalyzerError;
use crate::shared::security::{reject_symlink, validate_regular_file};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemDescriptorSource adapter reading POM documents from disk
///
/// Each input may be a descriptor file, taken as is, or a directory scanned
/// recursively for `pom.xml` and `*.pom` files (names compared
/// case-insensitively). Symbolic links are never followed.
pub struct FileSystemDescriptorSource;

impl FileSystemDescriptorSource {
    pub fn new() -> Self {
        Self
    }

    /// Whether a file name looks like a Maven descriptor
    pub fn is_descriptor_name(name: &str) -> bool {
        let name = name.to_lowercase();
        name == "pom.xml" || name.ends_with(".pom")
    }

    fn resolve_input(&self, input: &Path, found: &mut BTreeSet<PathBuf>) -> Result<()> {
        if fs::symlink_metadata(input).is_err() {
            return Err(AnalyzerError::DescriptorNotFound {
                path: input.to_path_buf(),
                suggestion: "Pass a pom.xml file or a directory that contains POM files"
                    .to_string(),
            }
            .into());
        }
        reject_symlink(input, "read")?;

        if input.is_dir() {
            let before = found.len();
            self.scan_directory(input, found)?;
            tracing::debug!(
                directory = %input.display(),
                descriptors = found.len() - before,
                "scanned directory"
            );
        } else if input.is_file() {
            found.insert(input.to_path_buf());
        } else {
            return Err(AnalyzerError::InvalidInputPath {
                path: input.to_path_buf(),
                reason: "Not a regular file or directory".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn scan_directory(&self, root: &Path, found: &mut BTreeSet<PathBuf>) -> Result<()> {
        let mut pending = vec![root.to_path_buf()];

        while let Some(directory) = pending.pop() {
            let entries = fs::read_dir(&directory).map_err(|e| AnalyzerError::InvalidInputPath {
                path: directory.clone(),
                reason: format!("Failed to read directory: {}", e),
            })?;

            for entry in entries {
                let entry = entry.map_err(|e| AnalyzerError::InvalidInputPath {
                    path: directory.clone(),
                    reason: format!("Failed to read directory entry: {}", e),
                })?;
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(_) => continue,
                };
                let path = entry.path();

                if file_type.is_symlink() {
                    tracing::debug!(path = %path.display(), "skipping symbolic link");
                } else if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file()
                    && Self::is_descriptor_name(&entry.file_name().to_string_lossy())
                {
                    found.insert(path);
                }
            }
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<SourceDocument> {
        validate_regular_file(path, "descriptor")?;
        let bytes = fs::read(path).map_err(|e| AnalyzerError::DescriptorReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(SourceDocument::new(path.display().to_string(), bytes))
    }
}

impl Default for FileSystemDescriptorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorSource for FileSystemDescriptorSource {
    fn collect_documents(&self, inputs: &[PathBuf]) -> Result<Vec<SourceDocument>> {
        let mut found = BTreeSet::new();
        for input in inputs {
            self.resolve_input(input, &mut found)?;
        }

        found.iter().map(|path| self.read_document(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_descriptor_names() {
        assert!(FileSystemDescriptorSource::is_descriptor_name("pom.xml"));
        assert!(FileSystemDescriptorSource::is_descriptor_name("POM.XML"));
        assert!(FileSystemDescriptorSource::is_descriptor_name("log4j-1.2.17.pom"));
        assert!(!FileSystemDescriptorSource::is_descriptor_name("settings.xml"));
        assert!(!FileSystemDescriptorSource::is_descriptor_name("pom.xml.bak"));
    }

    #[test]
    fn test_scan_directory_recursively_sorted() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir.path().join("b/pom.xml"), "<project/>");
        write(&temp_dir.path().join("a/nested/lib-1.0.pom"), "<project/>");
        write(&temp_dir.path().join("a/readme.md"), "# not a pom");

        let source = FileSystemDescriptorSource::new();
        let documents = source
            .collect_documents(&[temp_dir.path().to_path_buf()])
            .unwrap();

        assert_eq!(documents.len(), 2);
        assert!(documents[0].label.ends_with("lib-1.0.pom"));
        assert!(documents[1].label.ends_with("pom.xml"));
        assert_eq!(documents[1].bytes, b"<project/>");
    }

    #[test]
    fn test_explicit_file_is_taken_as_is() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom-descriptor.xml");
        write(&path, "<project/>");

        let documents = FileSystemDescriptorSource::new()
            .collect_documents(&[path.clone()])
            .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].label, path.display().to_string());
    }

    #[test]
    fn test_overlapping_inputs_are_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        write(&pom, "<project/>");

        let documents = FileSystemDescriptorSource::new()
            .collect_documents(&[temp_dir.path().to_path_buf(), pom])
            .unwrap();

        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let result = FileSystemDescriptorSource::new()
            .collect_documents(&[PathBuf::from("/nonexistent/project/pom.xml")]);

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Descriptor not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped_during_scan() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        write(&outside.path().join("pom.xml"), "<project/>");
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked")).unwrap();
        write(&temp_dir.path().join("pom.xml"), "<project/>");

        let documents = FileSystemDescriptorSource::new()
            .collect_documents(&[temp_dir.path().to_path_buf()])
            .unwrap();

        assert_eq!(documents.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_input_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("pom.xml");
        write(&target, "<project/>");
        let link = temp_dir.path().join("link.pom");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemDescriptorSource::new().collect_documents(&[link]);
        assert!(result.unwrap_err().to_string().contains("Security violation"));
    }
}
