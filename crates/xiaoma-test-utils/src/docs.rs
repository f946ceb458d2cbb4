//! Sample capability documents.

/// An agent document in the attribute-bag style.
pub fn agent(id: &str, name: &str, title: &str) -> String {
    format!(
        "<!-- Powered by xiaoma -->\n\n```xml\n<agent id=\"{id}\" name=\"{name}\" title=\"{title}\" icon=\"🤖\">\n  <persona>\n    <role>{title}</role>\n  </persona>\n</agent>\n```\n"
    )
}

/// An agent document carrying an injection point inside its persona.
pub fn agent_with_injection_point(id: &str, point: &str) -> String {
    format!(
        "<agent id=\"{id}\" name=\"John\" title=\"Product Manager\">\n  <persona>\n    <!-- XIAOMA-INJECT-POINT: {point} -->\n  </persona>\n</agent>\n"
    )
}

/// An XML task, optionally marked standalone.
pub fn xml_task(id: &str, standalone: bool) -> String {
    let flag = if standalone { " standalone=\"true\"" } else { "" };
    format!("<task id=\"{id}\" name=\"{id}\"{flag}>\n  <flow>Do the thing</flow>\n</task>\n")
}

/// A Markdown tool with front-matter.
pub fn markdown_tool(name: &str, description: &str, standalone: bool) -> String {
    format!(
        "---\nname: {name}\ndescription: {description}\nstandalone: {standalone}\n---\n\n# {name}\n\nRun {{project-root}}/{{xiaoma_folder}}/core/tools/{name}.md\n"
    )
}

/// A workflow manifest.
pub fn workflow_manifest(name: &str, description: &str, standalone: bool) -> String {
    format!(
        "name: \"{name}\"\ndescription: \"{description}\"\nstandalone: {standalone}\ninstructions: \"{{installed_path}}/instructions.md\"\n"
    )
}
