//! The configurable name of the installed capability folder.

use crate::constants::DEFAULT_CAPABILITY_FOLDER;
use crate::{Error, Result, validate_path_identifier};
use serde::{Deserialize, Serialize};

/// Name of the installed capability root (the value bound to `{xiaoma_folder}`).
///
/// Passed explicitly to generators and adapters; there is no process-wide
/// default beyond [`CapabilityFolder::default`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CapabilityFolder(String);

impl CapabilityFolder {
    /// Validate and wrap a folder name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_path_identifier(&name).map_err(|reason| Error::InvalidFolder {
            name: name.clone(),
            reason,
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CapabilityFolder {
    fn default() -> Self {
        Self(DEFAULT_CAPABILITY_FOLDER.to_string())
    }
}

impl TryFrom<String> for CapabilityFolder {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CapabilityFolder> for String {
    fn from(folder: CapabilityFolder) -> Self {
        folder.0
    }
}

impl std::fmt::Display for CapabilityFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
