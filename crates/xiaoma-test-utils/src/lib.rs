//! Shared test utilities for the xiaoma workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`] : [`SourceTree`] builder for a source tree plus project
//! - [`docs`] : small capability documents used across suites

pub mod docs;
pub mod tree;

pub use tree::SourceTree;
