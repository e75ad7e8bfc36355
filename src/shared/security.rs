use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum descriptor or store file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its target.
/// A path that does not exist passes; callers decide whether absence is an error.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(AnalyzerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file or directory instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular, non-symlink file within the size limit
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description used in error messages (e.g. "pom.xml")
///
/// # Returns
/// The file size in bytes
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(AnalyzerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed; pass the target file directly".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AnalyzerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "file is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split the input or remove generated files from the scanned tree".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_reject_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        assert!(reject_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_reject_symlink_missing_path_passes() {
        let path = PathBuf::from("/nonexistent/dependencies.json");
        assert!(reject_symlink(&path, "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_reject_symlink_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("pom.xml");
        fs::write(&target, "<project/>").unwrap();
        let link = temp_dir.path().join("link.xml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = reject_symlink(&link, "read");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Security violation"));
    }

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        let size = validate_regular_file(&file_path, "pom.xml").unwrap();
        assert_eq!(size, 10);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "pom.xml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/pom.xml");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/pom.xml");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }
}
