//! TOML command files (`description` + `prompt`).

use crate::artifact::Artifact;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct TomlCommand<'a> {
    description: &'a str,
    prompt: &'a str,
}

pub fn render(artifact: &Artifact) -> Result<String> {
    Ok(toml::to_string(&TomlCommand {
        description: &artifact.description,
        prompt: &artifact.content,
    })?)
}
