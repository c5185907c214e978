//! deptree - transitive dependency resolution with cycle detection
//!
//! This library builds the dependency graph of a package by breadth-first
//! expansion up to a depth bound, then reports every circular dependency
//! chain in it. Dependency edges come from a package registry over HTTP or
//! from an offline JSON fixture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Graph, cycle and package models plus
//!   the graph builder and cycle detector services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): YAML config file and CLI override merging
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptree::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source = FixtureDependencySource::load("fixtures/graph.json");
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = ResolveDependenciesUseCase::new(source, progress_reporter);
//! let request = ResolveRequest::new(PackageId::new("express")?, 3);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = TreeFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, FixtureDependencySource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, ListFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::RegistryDependencySource;
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::config::{RepositoryMode, ResolverConfig};
    pub use crate::ports::outbound::{
        DependencySource, GraphFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::resolution::domain::{Cycle, DependencyGraph, PackageId, PackageVersion};
    pub use crate::resolution::services::{CycleDetector, GraphBuilder};
    pub use crate::shared::Result;
}
