//! Error types for xiaoma-content

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Front-matter is not a mapping")]
    FrontMatterShape,

    #[error("Front-matter YAML error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}
