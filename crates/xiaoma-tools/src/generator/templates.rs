//! Bodies of the generated stubs.
//!
//! Stubs reference installed documents through `{project-root}` and
//! `{xiaoma_folder}`; the adapter decides whether `{project-root}` is
//! resolved and binds the folder at write time.

use xiaoma_fs::constants::CORE_MODULE;

/// Path of an installed document, in token form.
pub fn installed_path(module: &str, dir: &str, rel: &str) -> String {
    format!("{{project-root}}/{{xiaoma_folder}}/{}/{}/{}", module, dir, rel)
}

/// The workflow engine every workflow command runs through.
pub fn workflow_engine() -> String {
    installed_path(CORE_MODULE, "tasks", "workflow.xml")
}

pub fn agent_launcher(title: &str, agent_path: &str) -> String {
    format!(
        r#"# {title}

You must fully embody this agent's persona and follow all activation instructions exactly as specified. NEVER break character until given an exit command.

<agent-activation CRITICAL="TRUE">
1. LOAD the FULL agent file from @{agent_path}
2. READ its entire contents - this contains the complete agent persona, menu, and instructions
3. Execute ALL activation steps exactly as written in the agent file
4. Follow the agent's persona and menu system precisely
5. Stay in character throughout the session
</agent-activation>
"#
    )
}

/// `kind` is `task` or `tool`.
pub fn capability_command(kind: &str, title: &str, description: &str, path: &str) -> String {
    format!(
        r#"# {title}

{description}

LOAD and execute the {kind} at: {path}

Follow all instructions in the {kind} file exactly as written.
"#
    )
}

pub fn workflow_command(name: &str, description: &str, manifest_path: &str) -> String {
    let engine = workflow_engine();
    format!(
        r#"# {name}

{description}

IT IS CRITICAL THAT YOU FOLLOW THESE STEPS:

<steps CRITICAL="TRUE">
1. Always LOAD the FULL @{engine}
2. READ its entire contents - this is the core engine for executing a workflow config
3. Pass the yaml path {manifest_path} as 'workflow-config' parameter to the workflow.xml instructions
4. Follow workflow.xml instructions EXACTLY as written
5. Save outputs after EACH section when generating any documents from templates
</steps>
"#
    )
}

/// One `(name, manifest path, description)` entry per workflow.
pub fn workflow_launcher(module: &str, entries: &[(String, String, String)]) -> String {
    let mut out = format!("# {} Workflows\n\n## Available Workflows in {}\n\n", module, module);
    for (name, path, description) in entries {
        out.push_str(&format!("**{}**\n- Path: `{}`\n- {}\n\n", name, path, description));
    }
    out.push_str(&format!(
        "## Execution\n\nWhen running any workflow:\n1. LOAD {}\n2. Pass the workflow path as 'workflow-config' parameter\n3. Follow workflow.xml instructions EXACTLY\n4. Save outputs after EACH section\n",
        workflow_engine()
    ));
    out
}
