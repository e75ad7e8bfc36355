use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jdep_analyzer::application::dto::OutputFormat;
use jdep_analyzer::dependency_graph::domain::Direction;

/// Resolve Maven POM identities and query aggregated dependency graphs
#[derive(Parser, Debug)]
#[command(name = "jdep-analyzer")]
#[command(version)]
#[command(
    about = "Resolve Maven POM identities and query aggregated dependency graphs",
    long_about = None
)]
pub struct Args {
    /// Config file path (defaults to ./jdep.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Graph store file (overrides JDEP_STORE_PATH and the config file)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse POM files and fold them into the graph store
    Ingest {
        /// pom.xml / *.pom files, or directories scanned recursively
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Print the ingestion report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Show the direct dependencies declared by a POM, without storing it
    Analyze {
        /// pom.xml / *.pom file, or a directory of POM files
        #[arg(value_name = "POM")]
        pom: PathBuf,
    },

    /// Export the aggregated graph, optionally around a root component
    Graph(GraphArgs),

    /// List deduplicated dependency pairs
    Pairs(ListingArgs),

    /// List stored components
    Components(ListingArgs),
}

/// Aggregation switches shared by the query commands
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct AggregationArgs {
    /// Merge components that differ only by groupId
    #[arg(long)]
    pub ignore_group: bool,

    /// Merge components that differ only by version
    #[arg(long)]
    pub ignore_version: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: json, markdown or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GraphArgs {
    /// Root component as group:artifact:version (partial ids accepted)
    #[arg(long, value_name = "GAV")]
    pub root: Option<String>,

    /// Traversal direction from the root: forward or reverse
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Maximum hops from the root (unbounded if omitted)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: Option<u32>,

    #[command(flatten)]
    pub aggregation: AggregationArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListingArgs {
    /// Case-insensitive artifactId substring (matches everything if omitted)
    #[arg(default_value = "")]
    pub filter: String,

    /// Maximum number of rows
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub aggregation: AggregationArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
