//! Module injection: subagent selection, injection-point filling and
//! subagent installation.

use crate::Result;
use crate::context::InstallResult;
use xiaoma_content::bind_folder;
use xiaoma_content::block::replace_injection_point;
use xiaoma_fs::constants::GENERATED_PREFIX;
use xiaoma_fs::{CapabilityFolder, NormalizedPath, io};
use xiaoma_meta::{InjectionDescriptor, SubagentSelection};

/// `requires` value meaning "any subagent selected".
pub const REQUIRES_ANY: &str = "any";

/// Source of the user's subagent choice.
pub trait SelectionPrompt {
    /// Ask which of `available` to install for `target`.
    fn select_subagents(&mut self, target: &str, available: &[String])
    -> Result<SubagentSelection>;
}

/// A prompt that always answers with the same selection.
#[derive(Debug, Clone)]
pub struct FixedSelection(pub SubagentSelection);

impl SelectionPrompt for FixedSelection {
    fn select_subagents(&mut self, _target: &str, _available: &[String]) -> Result<SubagentSelection> {
        Ok(self.0.clone())
    }
}

/// Selection state for one orchestrator run.
///
/// The prompt is consulted at most once; every later request reuses the
/// first answer.
#[derive(Debug, Default)]
pub struct InjectionSession {
    selection: Option<SubagentSelection>,
    prompts: usize,
}

impl InjectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose selection is already known.
    pub fn with_selection(selection: SubagentSelection) -> Self {
        Self {
            selection: Some(selection),
            prompts: 0,
        }
    }

    /// Use `selection` unless one was already resolved.
    pub fn seed(&mut self, selection: SubagentSelection) {
        if self.selection.is_none() {
            self.selection = Some(selection);
        }
    }

    pub fn selection(&self) -> Option<&SubagentSelection> {
        self.selection.as_ref()
    }

    /// Number of times the prompt was consulted.
    pub fn prompt_count(&self) -> usize {
        self.prompts
    }

    /// The cached selection, asking `prompt` on first use.
    pub fn resolve(
        &mut self,
        prompt: &mut dyn SelectionPrompt,
        target: &str,
        available: &[String],
    ) -> Result<SubagentSelection> {
        if let Some(selection) = &self.selection {
            return Ok(selection.clone());
        }
        let selection = prompt.select_subagents(target, available)?;
        self.prompts += 1;
        tracing::debug!("Subagent selection for {}: {:?}", target, selection);
        self.selection = Some(selection.clone());
        Ok(selection)
    }
}

/// Whether an injection point's `requires` list is satisfied.
pub fn requirement_met(requires: &[String], selection: Option<&SubagentSelection>) -> bool {
    if requires.is_empty() {
        return true;
    }
    let Some(selection) = selection else {
        return false;
    };
    if requires.iter().any(|r| r == REQUIRES_ANY) {
        return selection.any();
    }
    requires.iter().any(|r| selection.includes(r))
}

/// Keep lines naming known subagents only when they name a selected one.
///
/// Identifiers are matched against the file names in `known` and their
/// stems. Lines naming nothing known are kept as-is.
pub fn filter_content(content: &str, known: &[String], selection: &SubagentSelection) -> String {
    if matches!(selection, SubagentSelection::All) {
        return content.to_string();
    }

    content
        .split_inclusive('\n')
        .filter(|line| {
            let named = mentioned(line, known);
            named.is_empty() || named.iter().any(|file| selection.includes(file))
        })
        .collect()
}

fn mentioned<'a>(line: &str, known: &'a [String]) -> Vec<&'a String> {
    let tokens: Vec<&str> = line
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .map(|t| t.trim_matches('.'))
        .filter(|t| !t.is_empty())
        .collect();

    known
        .iter()
        .filter(|file| {
            let stem = file.rsplit_once('.').map(|(s, _)| s).unwrap_or(file);
            tokens.iter().any(|t| *t == file.as_str() || *t == stem)
        })
        .collect()
}

/// Fill the descriptor's injection points inside the project.
///
/// Replaced points are counted in `result`. Missing destination files and
/// markers are skipped; a destination that cannot be read or written is
/// recorded as a failure and the remaining points still run.
pub fn apply_injections(
    descriptor: &InjectionDescriptor,
    selection: Option<&SubagentSelection>,
    project_root: &NormalizedPath,
    folder: &CapabilityFolder,
    result: &mut InstallResult,
) {
    let known = descriptor.config.subagent_files();

    for point in &descriptor.config.injections {
        if !requirement_met(&point.requires, selection) {
            tracing::debug!("Injection {} not required by selection", point.point);
            continue;
        }

        let path = project_root.join(&bind_folder(&point.file, folder.as_str()));
        let text = match io::read_text_if_exists(&path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!("Injection target {} absent, skipping", path);
                continue;
            }
            Err(e) => {
                result.fail(path, e);
                continue;
            }
        };

        let content = match selection {
            Some(selection) => filter_content(&point.content, known, selection),
            None => point.content.clone(),
        };
        let content = bind_folder(content.trim_end_matches('\n'), folder.as_str());

        let Some(updated) = replace_injection_point(&text, &point.point, &content) else {
            tracing::debug!("Marker {} not found in {}", point.point, path);
            continue;
        };
        match io::write_text(&path, &updated) {
            Ok(()) => {
                tracing::debug!("Injected {} into {}", point.point, path);
                result.injections_applied += 1;
            }
            Err(e) => result.fail(path, e),
        }
    }
}

/// Copy the selected subagent files into `dest_dir` under the generated
/// prefix, binding the capability folder. Each copy is recorded in
/// `result`, as a written file or as a failure.
pub fn install_subagents(
    descriptor: &InjectionDescriptor,
    selection: &SubagentSelection,
    dest_dir: &NormalizedPath,
    folder: &CapabilityFolder,
    result: &mut InstallResult,
) {
    for file in selection.filter(descriptor.config.subagent_files()) {
        let source = descriptor.subagent_path(file);
        let text = match io::read_text_if_exists(&source) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("Subagent {} listed but missing at {}", file, source);
                continue;
            }
            Err(e) => {
                result.fail(source, e);
                continue;
            }
        };
        let dest = dest_dir.join(&format!("{}{}", GENERATED_PREFIX, file));
        match io::write_text(&dest, &bind_folder(&text, folder.as_str())) {
            Ok(()) => {
                result.subagents_installed += 1;
                result.written.push(dest);
            }
            Err(e) => result.fail(dest, e),
        }
    }
}
