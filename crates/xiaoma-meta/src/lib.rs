//! Source tree metadata for xiaoma.
//!
//! This crate enumerates capability documents and workflow manifests, loads
//! per-target injection descriptors, resolves source/installed paths, and
//! reads the optional project install configuration.

pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod scanner;
pub mod schema;

pub use config::{InstallConfig, TargetChoices, load_install_config};
pub use error::{Error, Result};
pub use loader::{InjectionDescriptor, InjectionLoader};
pub use manifest::{WorkflowEntry, find_workflow_manifests};
pub use paths::{PathResolver, StandardPaths};
pub use scanner::{scan, scan_with_standalone_probe};
pub use schema::{
    CapabilityKind, Document, InjectionConfig, InjectionPoint, Module, SubagentSelection,
    SubagentSet, WorkflowManifest,
};
