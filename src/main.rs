mod cli;

use cli::{AggregationArgs, Args, Command, GraphArgs, ListingArgs, OutputArgs};
use jdep_analyzer::adapters::outbound::aggregation::CachingAggregator;
use jdep_analyzer::adapters::outbound::console::StderrProgressReporter;
use jdep_analyzer::adapters::outbound::filesystem::{FileSystemDescriptorSource, StdoutPresenter};
use jdep_analyzer::adapters::outbound::store::JsonFileGraphStore;
use jdep_analyzer::application::dto::{
    GraphViewRequest, IngestRequest, ListingRequest, OutputFormat,
};
use jdep_analyzer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use jdep_analyzer::application::use_cases::{
    IngestDescriptorsUseCase, InspectDescriptorUseCase, QueryGraphUseCase,
};
use jdep_analyzer::config::{self, ConfigFile};
use jdep_analyzer::dependency_graph::domain::{AggregationToggles, Depth};
use jdep_analyzer::ports::outbound::OutputPresenter;
use jdep_analyzer::shared::error::{AnalyzerError, ExitCode};
use jdep_analyzer::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse_args();
    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            exit_code_for(&e)
        }
    };
    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?.unwrap_or_default();
    let store_path = config::resolve_store_path(
        args.store,
        std::env::var(config::STORE_PATH_ENV).ok(),
        Some(&config),
    );
    tracing::debug!(store = %store_path.display(), "using graph store");

    match args.command {
        Command::Ingest { paths, json } => ingest(paths, json, store_path).await,
        Command::Analyze { pom } => analyze(pom),
        Command::Graph(graph_args) => graph(graph_args, &config, store_path).await,
        Command::Pairs(listing) => pairs(listing, &config, store_path).await,
        Command::Components(listing) => components(listing, &config, store_path).await,
    }
}

/// Explicit `--config` must exist; otherwise `./jdep.config.yml` is optional
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let discovered = config::discover_config(&cwd)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    cwd.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}

async fn ingest(paths: Vec<PathBuf>, json: bool, store_path: PathBuf) -> Result<ExitCode> {
    let store = Arc::new(JsonFileGraphStore::open(store_path)?);
    let use_case = IngestDescriptorsUseCase::new(
        FileSystemDescriptorSource::new(),
        store,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(IngestRequest::new(paths)).await?;

    if json {
        let mut output = serde_json::to_string_pretty(&response)?;
        output.push('\n');
        StdoutPresenter::new().present(&output)?;
    }

    if response.has_failures() {
        eprintln!(
            "{}",
            format!(
                "⚠️  {} of {} descriptor(s) could not be parsed.",
                response.failed_count(),
                response.documents.len()
            )
            .yellow()
        );
        return Ok(ExitCode::ParseFailures);
    }
    Ok(ExitCode::Success)
}

fn analyze(pom: PathBuf) -> Result<ExitCode> {
    let use_case =
        InspectDescriptorUseCase::new(FileSystemDescriptorSource::new(), StderrProgressReporter::new());
    let inspected = use_case.execute(pom)?;

    let mut output = String::new();
    for (i, descriptor) in inspected.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&descriptor.tree);
        let resolved = descriptor.resolved.gav.to_string();
        if !descriptor.tree.starts_with(&format!("{}\n", resolved)) {
            output.push_str(&format!("Resolved as {}\n", resolved));
        }
    }
    StdoutPresenter::new().present(&output)?;
    Ok(ExitCode::Success)
}

async fn graph(args: GraphArgs, config: &ConfigFile, store_path: PathBuf) -> Result<ExitCode> {
    let toggles = toggles(args.aggregation, config);
    let mut request = GraphViewRequest::new(toggles);
    if let Some(root) = args.root {
        if root.trim().is_empty() {
            return Err(AnalyzerError::Validation {
                message: "--root must name a component, e.g. 'log4j:log4j' or 'com.acme:app:1.0'"
                    .to_string(),
            }
            .into());
        }
        let direction = args
            .direction
            .or_else(|| config.traversal_direction())
            .unwrap_or_default();
        let depth = Depth::from_option(args.depth.or(config.depth));
        request = request.with_root(root, direction, depth);
    }

    let use_case = query_use_case(store_path)?;
    let view = use_case.graph_view(request).await?;

    let format = output_format(&args.output, config);
    eprintln!("{}", FormatterFactory::progress_message(format));
    let rendered = FormatterFactory::create(format).format_graph(&view)?;
    present(args.output, &rendered)
}

async fn pairs(args: ListingArgs, config: &ConfigFile, store_path: PathBuf) -> Result<ExitCode> {
    let request = listing_request(&args, config);
    let use_case = query_use_case(store_path)?;
    let rows = use_case.pairs(request).await?;

    let format = output_format(&args.output, config);
    eprintln!("{}", FormatterFactory::progress_message(format));
    let rendered = FormatterFactory::create(format).format_pairs(&rows)?;
    present(args.output, &rendered)
}

async fn components(
    args: ListingArgs,
    config: &ConfigFile,
    store_path: PathBuf,
) -> Result<ExitCode> {
    let request = listing_request(&args, config);
    let use_case = query_use_case(store_path)?;
    let components = use_case.components(request).await?;

    let format = output_format(&args.output, config);
    eprintln!("{}", FormatterFactory::progress_message(format));
    let rendered = FormatterFactory::create(format).format_components(&components)?;
    present(args.output, &rendered)
}

fn query_use_case(
    store_path: PathBuf,
) -> Result<QueryGraphUseCase<JsonFileGraphStore, CachingAggregator, StderrProgressReporter>> {
    let store = Arc::new(JsonFileGraphStore::open(store_path)?);
    Ok(QueryGraphUseCase::new(
        store,
        CachingAggregator::direct(),
        StderrProgressReporter::new(),
    ))
}

/// CLI switches win; the config file only turns merging on
fn toggles(args: AggregationArgs, config: &ConfigFile) -> AggregationToggles {
    AggregationToggles::from_ignore_flags(
        args.ignore_group || config.ignore_group.unwrap_or(false),
        args.ignore_version || config.ignore_version.unwrap_or(false),
    )
}

fn listing_request(args: &ListingArgs, config: &ConfigFile) -> ListingRequest {
    let toggles = toggles(args.aggregation, config);
    let limit = args
        .limit
        .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
        .or(config.limit);
    ListingRequest::new(args.filter.clone())
        .ignoring(!toggles.keep_group, !toggles.keep_version)
        .with_limit(limit)
}

fn output_format(args: &OutputArgs, config: &ConfigFile) -> OutputFormat {
    args.format
        .or_else(|| config.output_format())
        .unwrap_or_default()
}

fn present(output: OutputArgs, rendered: &str) -> Result<ExitCode> {
    PresenterFactory::create(PresenterType::for_output(output.output)).present(rendered)?;
    Ok(ExitCode::Success)
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AnalyzerError>() {
        Some(AnalyzerError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
