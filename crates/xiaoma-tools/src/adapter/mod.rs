//! Target adapters
//!
//! Per adapter and run: cleanup, prepare directories, generate and write,
//! apply injections, report. Every destination is served by the same
//! [`ProfileAdapter`] engine; the differences live in [`AdapterProfile`].

mod engine;
mod naming;
mod profile;

pub use engine::ProfileAdapter;
pub use naming::mode_slug;
pub use profile::{AdapterProfile, AgentContent, Destination, Envelope, FileFormat, NamingStrategy};

use crate::context::{CleanupReport, CustomLauncher, InstallContext, InstallResult};
use crate::error::Result;
use crate::injection::{InjectionSession, SelectionPrompt};
use xiaoma_fs::{CapabilityFolder, NormalizedPath};

/// Contract every destination adapter fulfils.
pub trait TargetAdapter {
    /// Slug identifier (e.g. "claude-code")
    fn name(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Offered first in interactive target selection.
    fn preferred(&self) -> bool;

    /// Whether the adapter's namespace already holds generated content.
    fn detect(&self, project_root: &NormalizedPath) -> bool;

    /// Clean up, then write every artifact for the selected modules.
    ///
    /// Individual write failures are collected in the result; only failures
    /// that prevent the batch from running at all are returned as errors.
    fn install(
        &self,
        ctx: &InstallContext<'_>,
        session: &mut InjectionSession,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<InstallResult>;

    /// Remove only what this adapter generated.
    fn cleanup(&self, project_root: &NormalizedPath) -> Result<CleanupReport>;

    /// Write one additional agent launcher.
    ///
    /// Returns `Ok(None)` when the host tool is not set up in the project.
    fn install_custom_launcher(
        &self,
        project_root: &NormalizedPath,
        folder: &CapabilityFolder,
        launcher: &CustomLauncher,
    ) -> Result<Option<NormalizedPath>>;
}
