use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AnalyzerError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Rendered reports always end with exactly the newline the formatter wrote,
/// or one added when it wrote none
fn with_trailing_newline(report: &str) -> Cow<'_, str> {
    if report.is_empty() || report.ends_with('\n') {
        Cow::Borrowed(report)
    } else {
        Cow::Owned(format!("{}\n", report))
    }
}

/// Writes a rendered graph / pair / component report to a file.
///
/// The report is written to a sibling temp file and renamed over the
/// destination, so an existing report is replaced in one step.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn report_directory(&self) -> Result<PathBuf> {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => {
                if !parent.is_dir() {
                    return Err(self
                        .write_error(format!(
                            "Report directory does not exist: {}",
                            parent.display()
                        ))
                        .into());
                }
                Ok(parent.to_path_buf())
            }
            _ => Ok(PathBuf::from(".")),
        }
    }

    fn write_error(&self, details: String) -> AnalyzerError {
        AnalyzerError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let directory = self.report_directory()?;
        reject_symlink(&self.output_path, "report")?;

        let report = with_trailing_newline(content);
        let mut temp = tempfile::NamedTempFile::new_in(&directory)
            .map_err(|e| self.write_error(e.to_string()))?;
        temp.write_all(report.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;
        temp.persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        eprintln!(
            "✅ Report written: {} ({} lines)",
            self.output_path.display(),
            report.lines().count()
        );
        Ok(())
    }
}

/// Writes the rendered report to stdout.
///
/// A closed pipe (`jdep-analyzer graph | head`) is not an error.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let report = with_trailing_newline(content);
        let mut stdout = io::stdout().lock();
        match stdout
            .write_all(report.as_bytes())
            .and_then(|_| stdout.flush())
        {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed before the report was fully written");
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to write report to stdout: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::CsvFormatter;
    use crate::application::read_models::PairView;
    use crate::ports::outbound::ReportFormatter;
    use std::fs;
    use tempfile::TempDir;

    fn log4j_pair() -> PairView {
        PairView {
            source_group: Some("com.acme".to_string()),
            source_artifact: "app".to_string(),
            source_version: None,
            target_group: Some("log4j".to_string()),
            target_artifact: "log4j".to_string(),
            target_version: None,
            scope: "compile, test".to_string(),
        }
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(with_trailing_newline("# Components"), "# Components\n");
        assert_eq!(with_trailing_newline("[]\n"), "[]\n");
        assert_eq!(with_trailing_newline(""), "");
    }

    #[test]
    fn test_writes_csv_report() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("pairs.csv");
        let rendered = CsvFormatter::new().format_pairs(&[log4j_pair()]).unwrap();

        FileSystemWriter::new(output_path.clone())
            .present(&rendered)
            .unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.starts_with("source_group,source_artifact,"));
        assert!(written.contains("com.acme,app,,log4j,log4j,,\"compile, test\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_replaces_existing_report() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("graph.json");
        fs::write(&output_path, "{\"elements\": \"stale\"}").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("{\"elements\": {}}")
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "{\"elements\": {}}\n"
        );
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_missing_report_directory() {
        let output_path = PathBuf::from("/nonexistent/directory/graph.json");

        let result = FileSystemWriter::new(output_path).present("[]");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Report directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_symlinked_report() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.md");
        fs::write(&target, "original").unwrap();
        let link = temp_dir.path().join("report.md");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("# Components");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("[]").is_ok());
    }
}
