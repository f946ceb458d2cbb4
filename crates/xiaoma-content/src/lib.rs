//! Content transformation for capability documents
//!
//! Every function in this crate is pure over document text. The transformer
//! chain is order-sensitive:
//!
//! 1. [`activation::inject_activation`] adds the activation block to agent
//!    documents.
//! 2. [`tokens::Placeholders::apply`] substitutes `{project-root}`, `{module}`,
//!    `{agent}` and `{task}`.
//! 3. [`tokens::bind_folder`] substitutes `{xiaoma_folder}` at write time.
//!
//! Steps 1 and 2 are bundled in [`transform::transform`]; step 3 is kept apart
//! so the capability folder can be rebound without re-running the others.

pub mod activation;
pub mod block;
pub mod error;
pub mod frontmatter;
pub mod metadata;
pub mod standalone;
pub mod tokens;
pub mod transform;

pub use block::Block;
pub use error::{Error, Result};
pub use metadata::DocumentMetadata;
pub use tokens::{Placeholders, bind_folder};
pub use transform::{TransformContext, transform};
