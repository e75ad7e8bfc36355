use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where a rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output FILE` writes a report file; no path means stdout
    pub fn for_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for report presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for a report destination
    ///
    /// # Examples
    /// ```
    /// use jdep_analyzer::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::for_output(None));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    use crate::application::read_models::ComponentView;
    use crate::dependency_graph::domain::Gav;
    use crate::ports::outbound::ReportFormatter;

    fn components() -> Vec<ComponentView> {
        [
            Gav::new("log4j", "log4j", "1.2.17"),
            Gav::new("org.apache.logging.log4j", "log4j-core", "2.20.0"),
        ]
        .iter()
        .map(ComponentView::from)
        .collect()
    }

    #[test]
    fn test_for_output() {
        assert_eq!(PresenterType::for_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::for_output(Some(PathBuf::from("pairs.csv"))),
            PresenterType::File(PathBuf::from("pairs.csv"))
        );
    }

    #[test]
    fn test_json_components_report_round_trips_through_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("components.json");
        let rendered = JsonFormatter::new().format_components(&components()).unwrap();

        PresenterFactory::create(PresenterType::for_output(Some(path.clone())))
            .present(&rendered)
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let ids: Vec<&str> = written
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "log4j:log4j:1.2.17",
                "org.apache.logging.log4j:log4j-core:2.20.0"
            ]
        );
    }

    #[test]
    fn test_markdown_components_report_written() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("components.md");
        let rendered = MarkdownFormatter::new().format_components(&components()).unwrap();

        PresenterFactory::create(PresenterType::File(path.clone()))
            .present(&rendered)
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("# Components"));
        assert!(written.contains("| org.apache.logging.log4j | log4j-core | 2.20.0 |"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_stdout_presenter_for_empty_listing() {
        let rendered = JsonFormatter::new().format_components(&[]).unwrap();
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present(&rendered).is_ok());
    }
}
