//! The path store: one nested tree of collections and documents, addressed
//! by paths of string segments.

mod document_store;
mod path;

pub use document_store::*;
pub(crate) use path::*;
