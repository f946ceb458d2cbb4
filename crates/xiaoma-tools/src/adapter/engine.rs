//! The profile-driven adapter engine.

use super::naming::mode_slug;
use super::{AdapterProfile, Destination, FileFormat, NamingStrategy, TargetAdapter};
use crate::artifact::{Artifact, ArtifactSet, ArtifactType};
use crate::context::{CleanupReport, CustomLauncher, InstallContext, InstallResult};
use crate::error::Result;
use crate::generator::{
    AgentGenerator, ArtifactGenerator, GeneratorOptions, TaskToolGenerator, WorkflowGenerator,
    slugify, templates,
};
use crate::injection::{InjectionSession, SelectionPrompt, apply_injections, install_subagents};
use crate::writer::{self, modes};
use xiaoma_content::bind_folder;
use xiaoma_fs::constants::is_generated_name;
use xiaoma_fs::{CapabilityFolder, NormalizedPath, ReservedName, io};
use xiaoma_meta::{InjectionLoader, TargetChoices};

/// Module name given to custom launchers.
const CUSTOM_MODULE: &str = "custom";

/// A [`TargetAdapter`] driven entirely by an [`AdapterProfile`].
#[derive(Debug, Clone)]
pub struct ProfileAdapter {
    profile: AdapterProfile,
}

impl ProfileAdapter {
    pub fn new(profile: AdapterProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AdapterProfile {
        &self.profile
    }

    fn options(&self, project_root: &NormalizedPath) -> GeneratorOptions {
        GeneratorOptions {
            project_root: self
                .profile
                .resolve_project_root
                .then(|| project_root.as_str().to_string()),
            standalone_only: self.profile.standalone_only,
        }
    }

    /// Every artifact this adapter would write for `ctx`.
    pub fn collect_artifacts(&self, ctx: &InstallContext<'_>) -> ArtifactSet {
        let options = self.options(ctx.project_root());
        let mut set = ArtifactSet::new();

        set.extend(AgentGenerator::new(self.profile.agents).generate(
            ctx.paths,
            &ctx.modules,
            &options,
        ));

        if let Destination::Directory { .. } = self.profile.destination {
            set.extend(TaskToolGenerator.generate(ctx.paths, &ctx.modules, &options));
            set.extend(WorkflowGenerator.generate(ctx.paths, &ctx.modules, &options));
            if !self.profile.keep_launchers {
                set.remove_type(ArtifactType::WorkflowLauncher);
            }
        }

        set
    }

    /// Whether `root` is a directory wholly owned by the pipeline.
    fn owns_root(root: &NormalizedPath) -> bool {
        root.file_name() == Some(ReservedName::GeneratedDir.as_str())
    }

    fn write_file(
        &self,
        root: &NormalizedPath,
        naming: NamingStrategy,
        format: FileFormat,
        artifact: &Artifact,
        folder: &CapabilityFolder,
    ) -> Result<NormalizedPath> {
        let path = root.join(&naming.file_name(artifact, format.extension()));
        let rendered = writer::render(artifact, format)?;
        io::write_text(&path, &bind_folder(&rendered, folder.as_str()))?;
        Ok(path)
    }

    fn write_directory(
        &self,
        ctx: &InstallContext<'_>,
        artifacts: &ArtifactSet,
        result: &mut InstallResult,
    ) -> Result<()> {
        let Destination::Directory {
            root,
            naming,
            format,
        } = self.profile.destination
        else {
            return Ok(());
        };
        let root = ctx.project_root().join(root);
        io::ensure_dir(&root)?;

        for artifact in artifacts.iter() {
            match self.write_file(&root, naming, format, artifact, ctx.folder()) {
                Ok(path) => result.record(artifact.artifact_type, path),
                Err(e) => result.fail(
                    root.join(&naming.file_name(artifact, format.extension())),
                    e,
                ),
            }
        }
        Ok(())
    }

    /// Render one folder-bound mode entry. User modes in the registry are
    /// never bound.
    fn mode_body(artifact: &Artifact, folder: &CapabilityFolder) -> Result<String> {
        let slug = mode_slug(&artifact.module, &artifact.name);
        let when_to_use = artifact
            .when_to_use
            .clone()
            .unwrap_or_else(|| format!("Use for {} tasks", artifact.title));
        modes::render_mode(&modes::ModeEntry {
            slug: &slug,
            name: &artifact.title,
            role_definition: &artifact.description,
            when_to_use: &when_to_use,
            custom_instructions: &artifact.content,
        })
        .map(|body| bind_folder(&body, folder.as_str()))
    }

    fn write_registry(
        &self,
        ctx: &InstallContext<'_>,
        artifacts: &ArtifactSet,
        result: &mut InstallResult,
    ) -> Result<()> {
        let Destination::ModesRegistry { file } = self.profile.destination else {
            return Ok(());
        };
        let path = ctx.project_root().join(file);
        let mut content = io::read_text_if_exists(&path)?.unwrap_or_default();

        let mut written = Vec::new();
        for artifact in artifacts.of_type(ArtifactType::Agent) {
            let slug = mode_slug(&artifact.module, &artifact.name);
            match Self::mode_body(artifact, ctx.folder()) {
                Ok(body) => {
                    content = modes::upsert_mode(&content, &slug, &body);
                    written.push(artifact.artifact_type);
                }
                Err(e) => result.fail(path.clone(), e),
            }
        }
        if written.is_empty() {
            return Ok(());
        }

        match io::write_text(&path, &content) {
            Ok(()) => {
                for artifact_type in written {
                    *result.counts.entry(artifact_type).or_insert(0) += 1;
                }
                result.written.push(path);
            }
            Err(e) => result.fail(path, e),
        }
        Ok(())
    }

    fn apply_module_injections(
        &self,
        ctx: &InstallContext<'_>,
        session: &mut InjectionSession,
        prompt: &mut dyn SelectionPrompt,
        result: &mut InstallResult,
    ) -> Result<()> {
        let loader = InjectionLoader::new();
        let mut used_selection = false;

        for module in &ctx.modules {
            let Some(descriptor) = loader.load(ctx.paths, self.profile.slug, module) else {
                continue;
            };

            let selection = if descriptor.has_subagents() {
                used_selection = true;
                Some(session.resolve(
                    prompt,
                    self.profile.slug,
                    descriptor.config.subagent_files(),
                )?)
            } else {
                session.selection().cloned()
            };

            if let (Some(selection), Some(dir)) = (&selection, self.profile.subagent_dir) {
                let dest = ctx.project_root().join(dir);
                install_subagents(&descriptor, selection, &dest, ctx.folder(), result);
            }

            apply_injections(
                &descriptor,
                selection.as_ref(),
                ctx.project_root(),
                ctx.folder(),
                result,
            );
        }

        if used_selection && let Some(selection) = session.selection() {
            let choices = TargetChoices {
                subagents: Some(selection.clone()),
            };
            if let Err(e) = choices.save(ctx.paths, self.profile.slug) {
                tracing::warn!("Could not save choices for {}: {}", self.profile.slug, e);
            }
        }
        Ok(())
    }

    /// Remove prefixed entries directly inside `dir`; returns files removed.
    fn remove_prefixed(dir: &NormalizedPath) -> Result<usize> {
        let mut removed = 0;
        for entry in io::list_dir(dir)? {
            if !entry.file_name().is_some_and(is_generated_name) {
                continue;
            }
            if entry.is_dir() {
                removed += io::remove_dir_if_exists(&entry)?;
            } else if io::remove_file_if_exists(&entry)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn custom_artifact(&self, project_root: &NormalizedPath, launcher: &CustomLauncher) -> Artifact {
        let name = slugify(&launcher.name);
        let title = launcher.title.clone().unwrap_or_else(|| launcher.name.clone());
        let content = self
            .options(project_root)
            .resolve(&templates::agent_launcher(&title, &launcher.agent_path));
        Artifact {
            artifact_type: ArtifactType::Agent,
            module: CUSTOM_MODULE.to_string(),
            relative_path: format!("{}/agents/{}", CUSTOM_MODULE, name),
            name,
            content,
            source_path: NormalizedPath::new(&launcher.agent_path),
            description: launcher.description.clone().unwrap_or_else(|| title.clone()),
            when_to_use: None,
            title,
        }
    }
}

impl TargetAdapter for ProfileAdapter {
    fn name(&self) -> &str {
        self.profile.slug
    }

    fn display_name(&self) -> &str {
        self.profile.display_name
    }

    fn preferred(&self) -> bool {
        self.profile.preferred
    }

    fn detect(&self, project_root: &NormalizedPath) -> bool {
        match self.profile.destination {
            Destination::Directory { root, .. } => {
                let root = project_root.join(root);
                if Self::owns_root(&root) {
                    io::count_files(&root).is_ok_and(|n| n > 0)
                } else {
                    io::list_dir(&root).is_ok_and(|entries| {
                        entries
                            .iter()
                            .any(|e| e.file_name().is_some_and(is_generated_name))
                    })
                }
            }
            Destination::ModesRegistry { file } => {
                match io::read_text_if_exists(&project_root.join(file)) {
                    Ok(Some(content)) => modes::has_generated_modes(&content),
                    _ => false,
                }
            }
        }
    }

    fn install(
        &self,
        ctx: &InstallContext<'_>,
        session: &mut InjectionSession,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<InstallResult> {
        let mut result = InstallResult::new(self.profile.slug);
        result.cleaned = self.cleanup(ctx.project_root())?.removed;

        let artifacts = self.collect_artifacts(ctx);
        result.collisions = artifacts.collisions().len();

        match self.profile.destination {
            Destination::Directory { .. } => self.write_directory(ctx, &artifacts, &mut result)?,
            Destination::ModesRegistry { .. } => {
                self.write_registry(ctx, &artifacts, &mut result)?
            }
        }

        self.apply_module_injections(ctx, session, prompt, &mut result)?;

        tracing::info!(
            "{}: {} artifacts written, {} injections, {} failures",
            self.profile.slug,
            result.total(),
            result.injections_applied,
            result.failures.len()
        );
        Ok(result)
    }

    fn cleanup(&self, project_root: &NormalizedPath) -> Result<CleanupReport> {
        let mut report = CleanupReport::new(self.profile.slug);

        match self.profile.destination {
            Destination::Directory { root, .. } => {
                let root = project_root.join(root);
                report.removed += if Self::owns_root(&root) {
                    io::remove_dir_if_exists(&root)?
                } else {
                    Self::remove_prefixed(&root)?
                };
            }
            Destination::ModesRegistry { file } => {
                let path = project_root.join(file);
                if let Some(content) = io::read_text_if_exists(&path)? {
                    let (cleaned, removed) = modes::remove_generated_modes(&content);
                    if removed > 0 {
                        if modes::is_empty_registry(&cleaned) {
                            io::remove_file_if_exists(&path)?;
                        } else {
                            io::write_text(&path, &cleaned)?;
                        }
                    }
                    report.removed += removed;
                }
            }
        }

        if let Some(dir) = self.profile.subagent_dir {
            report.removed += Self::remove_prefixed(&project_root.join(dir))?;
        }

        tracing::debug!("{}: cleanup removed {}", self.profile.slug, report.removed);
        Ok(report)
    }

    fn install_custom_launcher(
        &self,
        project_root: &NormalizedPath,
        folder: &CapabilityFolder,
        launcher: &CustomLauncher,
    ) -> Result<Option<NormalizedPath>> {
        if !project_root.join(self.profile.anchor).exists() {
            tracing::info!(
                "{} not configured in {}, skipping custom launcher",
                self.profile.display_name,
                project_root
            );
            return Ok(None);
        }

        let artifact = self.custom_artifact(project_root, launcher);
        match self.profile.destination {
            Destination::Directory {
                root,
                naming,
                format,
            } => {
                let root = project_root.join(root);
                Ok(Some(self.write_file(&root, naming, format, &artifact, folder)?))
            }
            Destination::ModesRegistry { file } => {
                let path = project_root.join(file);
                let existing = io::read_text_if_exists(&path)?.unwrap_or_default();
                let slug = mode_slug(&artifact.module, &artifact.name);
                let body = Self::mode_body(&artifact, folder)?;
                io::write_text(&path, &modes::upsert_mode(&existing, &slug, &body))?;
                Ok(Some(path))
            }
        }
    }
}
