//! Filesystem abstraction for the xiaoma capability installer
//!
//! Provides normalized path handling, atomic I/O, the reserved names shared by
//! every adapter, and format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod folder;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ReservedName;
pub use error::{Error, Result};
pub use folder::CapabilityFolder;
pub use path::{NormalizedPath, validate_path_identifier};
