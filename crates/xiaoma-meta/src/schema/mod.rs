//! Data types for source documents, workflow manifests and injection descriptors

mod document;
mod injection;
mod manifest;
mod selection;

pub use document::{CapabilityKind, Document, Module};
pub use injection::{InjectionConfig, InjectionPoint, SubagentSet};
pub use manifest::WorkflowManifest;
pub use selection::SubagentSelection;
