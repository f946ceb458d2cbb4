//! Command implementations for xiaoma-cli

pub mod cleanup;
pub mod detect;
pub mod install;
pub mod launcher;
pub mod list;

pub use cleanup::run_cleanup;
pub use detect::run_detect;
pub use install::{InstallOptions, run_install};
pub use launcher::{LauncherOptions, run_launcher};
pub use list::run_list_targets;
