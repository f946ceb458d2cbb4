//! Error types for xiaoma-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] xiaoma_fs::Error),

    #[error("Metadata error: {0}")]
    Meta(#[from] xiaoma_meta::Error),

    #[error("Content error: {0}")]
    Content(#[from] xiaoma_content::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown target: {slug}")]
    UnknownTarget { slug: String },

    #[error("Subagent selection failed: {message}")]
    PromptFailed { message: String },
}
