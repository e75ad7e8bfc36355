//! jdep-analyzer - dependency graph engine for Maven POM descriptors
//!
//! This library parses `pom.xml` / `*.pom` documents, resolves each one's
//! coordinates (parent inheritance, `${...}` placeholders), folds them into an
//! append-only graph of components and "depends on" edges, and answers
//! aggregated queries over that graph, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Pure graph model and services
//!   (parser, identity resolver, graph builder, aggregation, queries)
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use jdep_analyzer::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let store = Arc::new(InMemoryGraphStore::new());
//!
//! // Ingest a multi-module project
//! let ingest = IngestDescriptorsUseCase::new(
//!     FileSystemDescriptorSource::new(),
//!     Arc::clone(&store),
//!     StderrProgressReporter::new(),
//! );
//! ingest
//!     .execute(IngestRequest::new(vec![PathBuf::from("my-project")]))
//!     .await?;
//!
//! // Who depends on log4j, across all versions?
//! let query = QueryGraphUseCase::new(
//!     store,
//!     CachingAggregator::direct(),
//!     StderrProgressReporter::new(),
//! );
//! let request = GraphViewRequest::new(AggregationToggles::new(true, false))
//!     .with_root("log4j:log4j", Direction::Reverse, Depth::Unbounded);
//! let view = query.graph_view(request).await?;
//!
//! println!("{}", JsonFormatter::new().format_graph(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::aggregation::{CachingAggregator, DirectAggregator};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::store::{InMemoryGraphStore, JsonFileGraphStore};
    pub use crate::application::dto::{
        DocumentReport, DocumentStatus, GraphViewRequest, IngestRequest, IngestResponse,
        ListingRequest, OutputFormat,
    };
    pub use crate::application::read_models::{ComponentView, GraphView, PairView};
    pub use crate::application::use_cases::{
        IngestDescriptorsUseCase, InspectDescriptorUseCase, QueryGraphUseCase,
    };
    pub use crate::dependency_graph::domain::{
        AggregatedGraph, AggregationKey, AggregationToggles, AtomicGraph, DependencyEdge, Depth,
        Direction, Gav, RawDescriptor, ResolvedDescriptor,
    };
    pub use crate::dependency_graph::services::{
        DescriptorParser, DescriptorTree, GraphAggregator, GraphBuilder, GraphQuery,
        IdentityResolver,
    };
    pub use crate::ports::outbound::{
        DescriptorSource, GraphAggregation, GraphStore, OutputPresenter, ProgressReporter,
        ReportFormatter, SourceDocument,
    };
    pub use crate::shared::Result;
}
