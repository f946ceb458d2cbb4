//! Artifact generation and target adapters for xiaoma.
//!
//! # Architecture
//!
//! 1. **Generators** ([`generator`]) read the installed capability tree and
//!    emit normalized [`Artifact`] records.
//!
//! 2. **Adapters** ([`adapter`]) turn artifacts into one destination layout.
//!    A single [`ProfileAdapter`] engine is driven by [`AdapterProfile`] data;
//!    the sixteen built-in profiles live in [`registry`].
//!
//! 3. The [`AdapterDispatcher`] runs the selected adapters in order and
//!    carries one [`InjectionSession`] across them, so the subagent selection
//!    is asked for at most once per run.

pub mod adapter;
pub mod artifact;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod injection;
pub mod logging;
pub mod registry;
pub mod writer;

pub use adapter::{
    AdapterProfile, AgentContent, Destination, Envelope, FileFormat, NamingStrategy,
    ProfileAdapter, TargetAdapter,
};
pub use artifact::{Artifact, ArtifactSet, ArtifactType};
pub use context::{CleanupReport, CustomLauncher, InstallContext, InstallResult, WriteFailure};
pub use dispatcher::AdapterDispatcher;
pub use error::{Error, Result};
pub use injection::{FixedSelection, InjectionSession, SelectionPrompt};
pub use registry::{AdapterCategory, AdapterRegistration, AdapterRegistry};
