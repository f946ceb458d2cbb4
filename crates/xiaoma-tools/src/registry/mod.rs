//! Adapter registry: the sixteen built-in destination profiles.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::AdapterRegistry;
pub use types::{AdapterCategory, AdapterRegistration};
